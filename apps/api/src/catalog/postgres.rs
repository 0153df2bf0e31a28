use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::info;

use crate::catalog::seed::NewBranch;
use crate::catalog::{validate_dataset, CatalogStore};
use crate::models::catalog::{Branch, Catalog, CatalogCounts, Company, Course, Project};
use crate::models::feedback::FeedbackEntry;

/// PostgreSQL-backed store. Tables are created by `db::ensure_schema`.
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct BranchRow {
    id: i64,
    name: String,
    code: String,
    description: String,
    placement_2024: i32,
    placement_2026: i32,
    salary_2024: f64,
    future_trends: String,
    future_skills: String,
    icon: String,
}

#[derive(FromRow)]
struct CourseRow {
    id: i64,
    name: String,
    platform: String,
    branch_id: i64,
    level: String,
    duration: String,
    is_free: bool,
    free_details: String,
}

#[derive(FromRow)]
struct ProjectRow {
    id: i64,
    name: String,
    branch_id: i64,
    description: String,
    difficulty: String,
}

#[derive(FromRow)]
struct CompanyRow {
    id: i64,
    name: String,
    branch_id: i64,
    description: String,
    website: String,
}

impl From<BranchRow> for Branch {
    fn from(row: BranchRow) -> Self {
        Branch {
            id: row.id,
            name: row.name,
            code: row.code,
            description: row.description,
            placement_2024: row.placement_2024,
            placement_2026: row.placement_2026,
            salary_2024: row.salary_2024,
            future_trends: row.future_trends,
            future_skills: row.future_skills,
            icon: row.icon,
        }
    }
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Company {
            id: row.id,
            name: row.name,
            branch_id: row.branch_id,
            description: row.description,
            website: row.website,
        }
    }
}

impl TryFrom<CourseRow> for Course {
    type Error = anyhow::Error;

    fn try_from(row: CourseRow) -> Result<Self> {
        Ok(Course {
            id: row.id,
            platform: row
                .platform
                .parse()
                .with_context(|| format!("course {}", row.id))?,
            level: row.level.parse().with_context(|| format!("course {}", row.id))?,
            name: row.name,
            branch_id: row.branch_id,
            duration: row.duration,
            is_free: row.is_free,
            free_details: row.free_details,
        })
    }
}

impl TryFrom<ProjectRow> for Project {
    type Error = anyhow::Error;

    fn try_from(row: ProjectRow) -> Result<Self> {
        Ok(Project {
            id: row.id,
            difficulty: row
                .difficulty
                .parse()
                .with_context(|| format!("project {}", row.id))?,
            name: row.name,
            branch_id: row.branch_id,
            description: row.description,
        })
    }
}

#[async_trait]
impl CatalogStore for PgStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn snapshot(&self) -> Result<Catalog> {
        let branches = sqlx::query_as::<_, BranchRow>(
            r#"
            SELECT id, name, code, description, placement_2024, placement_2026,
                   salary_2024, future_trends, future_skills, icon
            FROM branches
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let companies = sqlx::query_as::<_, CompanyRow>(
            "SELECT id, name, branch_id, description, website FROM companies ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        let courses = sqlx::query_as::<_, CourseRow>(
            r#"
            SELECT id, name, platform, branch_id, level, duration, is_free, free_details
            FROM courses
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let projects = sqlx::query_as::<_, ProjectRow>(
            "SELECT id, name, branch_id, description, difficulty FROM projects ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(Catalog {
            branches: branches.into_iter().map(Branch::from).collect(),
            companies: companies.into_iter().map(Company::from).collect(),
            courses: courses
                .into_iter()
                .map(Course::try_from)
                .collect::<Result<_>>()?,
            projects: projects
                .into_iter()
                .map(Project::try_from)
                .collect::<Result<_>>()?,
        })
    }

    /// Runs as one transaction: a failure part-way leaves the previous catalog intact.
    async fn reseed(&self, dataset: &[NewBranch]) -> Result<CatalogCounts> {
        validate_dataset(dataset)?;

        let mut tx = self.pool.begin().await?;

        for table in ["projects", "courses", "companies", "branches"] {
            sqlx::query(&format!("DELETE FROM {table}"))
                .execute(&mut *tx)
                .await?;
        }

        let mut counts = CatalogCounts::default();
        for new in dataset {
            let branch_id: i64 = sqlx::query_scalar(
                r#"
                INSERT INTO branches
                    (name, code, description, placement_2024, placement_2026,
                     salary_2024, future_trends, future_skills, icon)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                RETURNING id
                "#,
            )
            .bind(&new.name)
            .bind(&new.code)
            .bind(&new.description)
            .bind(new.placement_2024)
            .bind(new.placement_2026)
            .bind(new.salary_2024)
            .bind(&new.future_trends)
            .bind(&new.future_skills)
            .bind(&new.icon)
            .fetch_one(&mut *tx)
            .await?;
            counts.branches += 1;

            for company in &new.companies {
                sqlx::query("INSERT INTO companies (name, branch_id) VALUES ($1, $2)")
                    .bind(company)
                    .bind(branch_id)
                    .execute(&mut *tx)
                    .await?;
                counts.companies += 1;
            }

            for course in &new.courses {
                sqlx::query(
                    r#"
                    INSERT INTO courses
                        (name, platform, branch_id, level, duration, is_free, free_details)
                    VALUES ($1, $2, $3, $4, $5, $6, $7)
                    "#,
                )
                .bind(&course.name)
                .bind(course.platform.as_str())
                .bind(branch_id)
                .bind(course.level.as_str())
                .bind(&course.duration)
                .bind(course.is_free)
                .bind(&course.free_details)
                .execute(&mut *tx)
                .await?;
                counts.courses += 1;
            }

            for project in &new.projects {
                sqlx::query("INSERT INTO projects (name, branch_id, difficulty) VALUES ($1, $2, $3)")
                    .bind(&project.name)
                    .bind(branch_id)
                    .bind(project.difficulty.as_str())
                    .execute(&mut *tx)
                    .await?;
                counts.projects += 1;
            }
        }

        tx.commit().await?;

        info!(
            "Reseeded postgres catalog: {} branches, {} companies, {} courses, {} projects",
            counts.branches, counts.companies, counts.courses, counts.projects
        );
        Ok(counts)
    }

    async fn record_feedback(&self, entry: FeedbackEntry) -> Result<()> {
        sqlx::query(
            "INSERT INTO feedback_logs (id, user_input, bot_response, timestamp) VALUES ($1, $2, $3, $4)",
        )
        .bind(entry.id)
        .bind(&entry.user_input)
        .bind(&entry.bot_response)
        .bind(entry.timestamp)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn feedback_count(&self) -> Result<usize> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM feedback_logs")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.max(0) as usize)
    }
}
