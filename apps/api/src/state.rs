use std::sync::Arc;

use crate::analytics::charts::ChartRenderer;
use crate::catalog::CatalogStore;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Catalog backend chosen at startup: Postgres when configured, memory otherwise.
    pub store: Arc<dyn CatalogStore>,
    pub charts: Arc<ChartRenderer>,
    pub config: Config,
}
