mod analytics;
mod catalog;
mod chatbot;
mod config;
mod db;
mod errors;
mod models;
mod pages;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analytics::charts::ChartRenderer;
use crate::catalog::memory::MemoryStore;
use crate::catalog::postgres::PgStore;
use crate::catalog::seed::demo_dataset;
use crate::catalog::CatalogStore;
use crate::config::Config;
use crate::db::{create_pool, ensure_schema};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Guide API v{}", env!("CARGO_PKG_VERSION"));

    let store = open_store(&config).await?;
    info!("Catalog store: {}", store.backend());

    if config.seed_on_start && store.snapshot().await?.branches.is_empty() {
        let counts = store.reseed(&demo_dataset()).await?;
        info!(
            "Seeded demo catalog: {} branches, {} companies, {} courses, {} projects",
            counts.branches, counts.companies, counts.courses, counts.projects
        );
    }

    tokio::fs::create_dir_all(&config.media_root).await?;
    let charts = Arc::new(ChartRenderer::new(config.media_root.clone()));
    info!("Charts rendered into {}", config.media_root.display());

    let state = AppState {
        store,
        charts,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Postgres when `DATABASE_URL` is set, an in-process store otherwise.
async fn open_store(config: &Config) -> Result<Arc<dyn CatalogStore>> {
    match &config.database_url {
        Some(url) => {
            let pool = create_pool(url).await?;
            ensure_schema(&pool).await?;
            Ok(Arc::new(PgStore::new(pool)))
        }
        None => {
            info!("DATABASE_URL not set; keeping the catalog in memory");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
