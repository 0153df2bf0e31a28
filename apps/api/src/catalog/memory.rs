use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use crate::catalog::seed::NewBranch;
use crate::catalog::{validate_dataset, CatalogStore};
use crate::models::catalog::{Branch, Catalog, CatalogCounts, Company, Course, Project};
use crate::models::feedback::FeedbackEntry;

/// Process-local store. Used when no `DATABASE_URL` is configured, and in tests.
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    catalog: Catalog,
    feedback: Vec<FeedbackEntry>,
    /// Ids are never reused, so a reseed hands out fresh ones.
    last_id: i64,
}

impl Tables {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
        }
    }

    /// Store preloaded with `dataset`.
    pub async fn seeded(dataset: &[NewBranch]) -> Result<Self> {
        let store = Self::new();
        store.reseed(dataset).await?;
        Ok(store)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn snapshot(&self) -> Result<Catalog> {
        Ok(self.tables.read().await.catalog.clone())
    }

    async fn reseed(&self, dataset: &[NewBranch]) -> Result<CatalogCounts> {
        validate_dataset(dataset)?;

        let mut tables = self.tables.write().await;
        let mut catalog = Catalog::default();

        for new in dataset {
            let branch_id = tables.next_id();
            catalog.branches.push(Branch {
                id: branch_id,
                name: new.name.clone(),
                code: new.code.clone(),
                description: new.description.clone(),
                placement_2024: new.placement_2024,
                placement_2026: new.placement_2026,
                salary_2024: new.salary_2024,
                future_trends: new.future_trends.clone(),
                future_skills: new.future_skills.clone(),
                icon: new.icon.clone(),
            });
            for name in &new.companies {
                let id = tables.next_id();
                catalog.companies.push(Company {
                    id,
                    name: name.clone(),
                    branch_id,
                    description: String::new(),
                    website: String::new(),
                });
            }
            for course in &new.courses {
                let id = tables.next_id();
                catalog.courses.push(Course {
                    id,
                    name: course.name.clone(),
                    platform: course.platform,
                    branch_id,
                    level: course.level,
                    duration: course.duration.clone(),
                    is_free: course.is_free,
                    free_details: course.free_details.clone(),
                });
            }
            for project in &new.projects {
                let id = tables.next_id();
                catalog.projects.push(Project {
                    id,
                    name: project.name.clone(),
                    branch_id,
                    description: String::new(),
                    difficulty: project.difficulty,
                });
            }
        }

        let counts = catalog.counts();
        tables.catalog = catalog;
        info!(
            "Reseeded memory catalog: {} branches, {} companies, {} courses, {} projects",
            counts.branches, counts.companies, counts.courses, counts.projects
        );
        Ok(counts)
    }

    async fn record_feedback(&self, entry: FeedbackEntry) -> Result<()> {
        self.tables.write().await.feedback.push(entry);
        Ok(())
    }

    async fn feedback_count(&self) -> Result<usize> {
        Ok(self.tables.read().await.feedback.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::demo_dataset;

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let store = MemoryStore::new();
        let catalog = store.snapshot().await.unwrap();
        assert!(catalog.branches.is_empty());
        assert_eq!(catalog.counts(), CatalogCounts::default());
    }

    #[tokio::test]
    async fn test_reseed_twice_yields_same_counts_and_fresh_ids() {
        let store = MemoryStore::new();
        let first = store.reseed(&demo_dataset()).await.unwrap();
        let first_ids: Vec<i64> = store
            .snapshot()
            .await
            .unwrap()
            .branches
            .iter()
            .map(|b| b.id)
            .collect();

        let second = store.reseed(&demo_dataset()).await.unwrap();
        let catalog = store.snapshot().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(catalog.counts(), second);
        assert!(catalog.branches.iter().all(|b| !first_ids.contains(&b.id)));
    }

    #[tokio::test]
    async fn test_snapshot_preserves_insertion_order() {
        let store = MemoryStore::seeded(&demo_dataset()).await.unwrap();
        let names: Vec<String> = store
            .snapshot()
            .await
            .unwrap()
            .branches
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(
            names,
            ["Computer Science", "Mechanical", "Civil", "Electronics", "Chemical", "Aerospace"]
        );
    }

    #[tokio::test]
    async fn test_owned_records_point_at_their_branch() {
        let store = MemoryStore::seeded(&demo_dataset()).await.unwrap();
        let catalog = store.snapshot().await.unwrap();
        let civil = catalog.branch_named("Civil").unwrap();
        assert_eq!(catalog.companies_for(civil.id).count(), 6);
        assert_eq!(catalog.courses_for(civil.id).count(), 3);
        assert_eq!(catalog.projects_for(civil.id).count(), 6);
    }

    #[tokio::test]
    async fn test_invalid_dataset_leaves_previous_state() {
        let store = MemoryStore::seeded(&demo_dataset()).await.unwrap();
        let mut bad = demo_dataset();
        bad[2].name = "Mechanical".to_string();
        assert!(store.reseed(&bad).await.is_err());
        assert_eq!(store.snapshot().await.unwrap().branches.len(), 6);
    }

    #[tokio::test]
    async fn test_feedback_is_appended() {
        let store = MemoryStore::new();
        store
            .record_feedback(FeedbackEntry::new("hi", "hello"))
            .await
            .unwrap();
        store
            .record_feedback(FeedbackEntry::new("help", "menu"))
            .await
            .unwrap();
        assert_eq!(store.feedback_count().await.unwrap(), 2);
    }
}
