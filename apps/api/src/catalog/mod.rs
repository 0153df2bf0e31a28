//! Catalog storage: the branch repository shared by every handler.
//!
//! Handlers never touch a backend directly. They hold an `Arc<dyn CatalogStore>`
//! from `AppState` and work on the `Catalog` snapshot it returns.

pub mod memory;
pub mod postgres;
pub mod seed;

use std::collections::HashSet;

use anyhow::{bail, Result};
use async_trait::async_trait;

use crate::models::catalog::{Catalog, CatalogCounts};
use crate::models::feedback::FeedbackEntry;

use self::seed::NewBranch;

/// Read-mostly store of branches and the records they own.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Short backend label used in logs.
    fn backend(&self) -> &'static str;

    /// Returns every table in insertion order.
    async fn snapshot(&self) -> Result<Catalog>;

    /// Deletes all catalog rows and inserts `dataset` in order.
    async fn reseed(&self, dataset: &[NewBranch]) -> Result<CatalogCounts>;

    /// Appends one chatbot exchange to the feedback log.
    async fn record_feedback(&self, entry: FeedbackEntry) -> Result<()>;

    async fn feedback_count(&self) -> Result<usize>;
}

/// Rejects datasets that would break the uniqueness rules of the catalog:
/// branch names, branch codes, and company names within a branch.
pub fn validate_dataset(dataset: &[NewBranch]) -> Result<()> {
    let mut names = HashSet::new();
    let mut codes = HashSet::new();
    for branch in dataset {
        if !names.insert(branch.name.to_lowercase()) {
            bail!("duplicate branch name '{}'", branch.name);
        }
        if !codes.insert(branch.code.to_lowercase()) {
            bail!("duplicate branch code '{}'", branch.code);
        }
        let mut companies = HashSet::new();
        for company in &branch.companies {
            if !companies.insert(company.as_str()) {
                bail!("duplicate company '{}' in branch '{}'", company, branch.name);
            }
        }
    }
    Ok(())
}
