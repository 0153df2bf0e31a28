use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::analytics::metrics::{growth, verdict};
use crate::catalog::seed::demo_dataset;
use crate::errors::AppError;
use crate::models::catalog::{Branch, CatalogCounts, Company, Course, Project};
use crate::state::AppState;

/// Courses and projects shown on a branch's detail page.
const DETAIL_LIMIT: usize = 5;

#[derive(Debug, Serialize)]
pub struct HomePage {
    pub branches: Vec<Branch>,
    pub total_branches: usize,
}

#[derive(Debug, Serialize)]
pub struct BranchListPage {
    pub branches: Vec<Branch>,
}

#[derive(Debug, Serialize)]
pub struct BranchDetailPage {
    pub branch: Branch,
    pub growth: i32,
    pub companies: Vec<Company>,
    pub courses: Vec<Course>,
    pub projects: Vec<Project>,
    pub verdict: &'static str,
}

#[derive(Debug, Serialize)]
pub struct AboutPage {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub data_sources: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct LoadDataResponse {
    pub message: &'static str,
    pub counts: CatalogCounts,
}

/// GET /
pub async fn handle_home(State(state): State<AppState>) -> Result<Json<HomePage>, AppError> {
    let catalog = state.store.snapshot().await?;
    Ok(Json(HomePage {
        total_branches: catalog.branches.len(),
        branches: catalog.branches,
    }))
}

/// GET /branches/
pub async fn handle_branches(
    State(state): State<AppState>,
) -> Result<Json<BranchListPage>, AppError> {
    let catalog = state.store.snapshot().await?;
    Ok(Json(BranchListPage {
        branches: catalog.branches,
    }))
}

/// GET /branch/:id/
pub async fn handle_branch_detail(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<BranchDetailPage>, AppError> {
    let id: i64 = raw_id
        .parse()
        .map_err(|_| AppError::NotFound(format!("Branch {raw_id} not found")))?;
    let catalog = state.store.snapshot().await?;
    let branch = catalog
        .branch(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Branch {id} not found")))?;

    Ok(Json(BranchDetailPage {
        growth: growth(&branch),
        verdict: verdict(&branch),
        companies: catalog.companies_for(id).cloned().collect(),
        courses: catalog.courses_for(id).take(DETAIL_LIMIT).cloned().collect(),
        projects: catalog.projects_for(id).take(DETAIL_LIMIT).cloned().collect(),
        branch,
    }))
}

/// GET /about/
pub async fn handle_about() -> Json<AboutPage> {
    Json(AboutPage {
        name: "Engineering Career Guide",
        version: env!("CARGO_PKG_VERSION"),
        description: "Placement, salary and market trends for engineering branches, \
                      with course and project recommendations and a career chatbot.",
        data_sources: vec!["NPTEL", "Coursera", "edX", "Udemy"],
    })
}

/// GET /load-data/
///
/// Destructive: replaces every branch, company, course and project with the demo dataset.
pub async fn handle_load_data(
    State(state): State<AppState>,
) -> Result<Json<LoadDataResponse>, AppError> {
    let counts = state.store.reseed(&demo_dataset()).await?;
    info!("Demo data reloaded via {} store", state.store.backend());
    Ok(Json(LoadDataResponse {
        message: "✅ Initial data loaded successfully!",
        counts,
    }))
}
