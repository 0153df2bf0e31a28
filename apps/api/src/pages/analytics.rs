use axum::{extract::State, Json};
use serde::Serialize;

use crate::analytics::metrics::{
    best_placement, growth, growth_icon, highest_salary, max_salary, salary_bar, top_growth,
    SALARY_BAR_SCALE,
};
use crate::errors::AppError;
use crate::models::catalog::Branch;
use crate::state::AppState;

/// Branches highlighted on the market page.
const MARKET_GROWTH_TOP: usize = 3;

#[derive(Debug, Serialize)]
pub struct PlacementRow {
    pub branch: Branch,
    pub growth: i32,
    pub growth_icon: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PlacementPage {
    pub branches: Vec<PlacementRow>,
    pub chart_file: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SalaryRow {
    pub branch: Branch,
    pub bar_length: u32,
    pub bar: String,
}

#[derive(Debug, Serialize)]
pub struct SalaryPage {
    pub branches: Vec<SalaryRow>,
    pub chart_file: Option<String>,
    pub growth_chart: Option<String>,
    pub max_salary: f64,
}

#[derive(Debug, Serialize)]
pub struct MarketPage {
    pub best_placement: Option<Branch>,
    pub highest_salary: Option<Branch>,
    pub growth_branches: Vec<Branch>,
    pub placement_chart: Option<String>,
    pub salary_chart: Option<String>,
    pub growth_chart: Option<String>,
}

/// GET /placement/
pub async fn handle_placement(
    State(state): State<AppState>,
) -> Result<Json<PlacementPage>, AppError> {
    let catalog = state.store.snapshot().await?;
    let charts = state.charts.ensure_rendered(&catalog.branches).await;

    let branches = catalog
        .branches
        .into_iter()
        .map(|branch| {
            let growth = growth(&branch);
            PlacementRow {
                growth,
                growth_icon: growth_icon(growth),
                branch,
            }
        })
        .collect();

    Ok(Json(PlacementPage {
        branches,
        chart_file: charts.placement_chart,
    }))
}

/// GET /salary/
pub async fn handle_salary(State(state): State<AppState>) -> Result<Json<SalaryPage>, AppError> {
    let catalog = state.store.snapshot().await?;
    let charts = state.charts.ensure_rendered(&catalog.branches).await;
    let max_salary = max_salary(&catalog.branches);

    let branches = catalog
        .branches
        .into_iter()
        .map(|branch| {
            let bar_length = salary_bar(&branch, max_salary, SALARY_BAR_SCALE);
            SalaryRow {
                bar: "█".repeat(bar_length as usize),
                bar_length,
                branch,
            }
        })
        .collect();

    Ok(Json(SalaryPage {
        branches,
        chart_file: charts.salary_chart,
        growth_chart: charts.growth_chart,
        max_salary,
    }))
}

/// GET /market/
pub async fn handle_market(State(state): State<AppState>) -> Result<Json<MarketPage>, AppError> {
    let catalog = state.store.snapshot().await?;
    let charts = state.charts.ensure_rendered(&catalog.branches).await;
    let branches = &catalog.branches;

    Ok(Json(MarketPage {
        best_placement: best_placement(branches).cloned(),
        highest_salary: highest_salary(branches).cloned(),
        growth_branches: top_growth(branches, MARKET_GROWTH_TOP)
            .into_iter()
            .cloned()
            .collect(),
        placement_chart: charts.placement_chart,
        salary_chart: charts.salary_chart,
        growth_chart: charts.growth_chart,
    }))
}
