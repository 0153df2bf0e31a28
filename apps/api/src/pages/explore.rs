use axum::{
    extract::{Query, State},
    Form, Json,
};
use serde::{Deserialize, Serialize};

use crate::analytics::metrics::compare_branches;
use crate::errors::AppError;
use crate::models::catalog::{Branch, Catalog, Course, Project};
use crate::state::AppState;

/// Interest codes offered by the suggestion form and the branch each one points to.
pub const INTERESTS: [(&str, &str); 6] = [
    ("1", "Computer Science"),
    ("2", "Mechanical"),
    ("3", "Civil"),
    ("4", "Electronics"),
    ("5", "Chemical"),
    ("6", "Aerospace"),
];

#[derive(Debug, Default, Deserialize)]
pub struct CompareForm {
    pub branch1: Option<String>,
    pub branch2: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ComparePage {
    pub branches: Vec<Branch>,
    pub branch1: Option<Branch>,
    pub branch2: Option<Branch>,
    pub score1: f64,
    pub score2: f64,
    pub winner: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SuggestionForm {
    pub interest: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Interest {
    pub id: &'static str,
    pub branch: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SuggestionPage {
    pub interests: Vec<Interest>,
    pub suggested_branch: Option<Branch>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CatalogFilter {
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub platform: String,
}

#[derive(Debug, Serialize)]
pub struct CoursesPage {
    pub branches: Vec<Branch>,
    pub courses: Vec<Course>,
    pub branch_filter: String,
    pub platform_filter: String,
}

#[derive(Debug, Serialize)]
pub struct ProjectsPage {
    pub branches: Vec<Branch>,
    pub projects: Vec<Project>,
    pub branch_filter: String,
}

fn parse_branch_id(field: &str, raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("{field} must be a branch id")))
}

fn find_branch(catalog: &Catalog, id: i64) -> Result<Branch, AppError> {
    catalog
        .branch(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Branch {id} not found")))
}

/// Scores the two selected branches. Missing or identical selections get the plain listing.
fn compare_page(catalog: Catalog, form: CompareForm) -> Result<ComparePage, AppError> {
    let selection = match (form.branch1.as_deref(), form.branch2.as_deref()) {
        (Some(a), Some(b)) if !a.trim().is_empty() && !b.trim().is_empty() && a != b => {
            Some((parse_branch_id("branch1", a)?, parse_branch_id("branch2", b)?))
        }
        _ => None,
    };

    let mut page = ComparePage {
        branches: Vec::new(),
        branch1: None,
        branch2: None,
        score1: 0.0,
        score2: 0.0,
        winner: None,
    };

    if let Some((id1, id2)) = selection {
        let first = find_branch(&catalog, id1)?;
        let second = find_branch(&catalog, id2)?;
        let result = compare_branches(&first, &second);
        page.score1 = result.first_score;
        page.score2 = result.second_score;
        page.winner = Some(result.winner.name.clone());
        page.branch1 = Some(first);
        page.branch2 = Some(second);
    }

    page.branches = catalog.branches;
    Ok(page)
}

/// GET /compare/
pub async fn handle_compare_form(
    State(state): State<AppState>,
) -> Result<Json<ComparePage>, AppError> {
    let catalog = state.store.snapshot().await?;
    Ok(Json(compare_page(catalog, CompareForm::default())?))
}

/// POST /compare/
pub async fn handle_compare(
    State(state): State<AppState>,
    Form(form): Form<CompareForm>,
) -> Result<Json<ComparePage>, AppError> {
    let catalog = state.store.snapshot().await?;
    Ok(Json(compare_page(catalog, form)?))
}

fn suggestion_page(catalog: &Catalog, interest: Option<&str>) -> SuggestionPage {
    let suggested_branch = interest
        .and_then(|code| INTERESTS.iter().find(|(id, _)| *id == code.trim()))
        .and_then(|(_, name)| catalog.branch_named(name))
        .cloned();
    SuggestionPage {
        interests: INTERESTS
            .iter()
            .map(|&(id, branch)| Interest { id, branch })
            .collect(),
        suggested_branch,
    }
}

/// GET /suggestion/
pub async fn handle_suggestion_form(
    State(state): State<AppState>,
) -> Result<Json<SuggestionPage>, AppError> {
    let catalog = state.store.snapshot().await?;
    Ok(Json(suggestion_page(&catalog, None)))
}

/// POST /suggestion/
pub async fn handle_suggestion(
    State(state): State<AppState>,
    Form(form): Form<SuggestionForm>,
) -> Result<Json<SuggestionPage>, AppError> {
    let catalog = state.store.snapshot().await?;
    Ok(Json(suggestion_page(&catalog, form.interest.as_deref())))
}

fn branch_id_named(catalog: &Catalog, name: &str) -> Option<i64> {
    catalog.branch_named(name).map(|b| b.id)
}

/// GET /courses/?branch=&platform=
pub async fn handle_courses(
    State(state): State<AppState>,
    Query(filter): Query<CatalogFilter>,
) -> Result<Json<CoursesPage>, AppError> {
    let catalog = state.store.snapshot().await?;
    let branch_id = branch_id_named(&catalog, &filter.branch);

    let courses = catalog
        .courses
        .iter()
        .filter(|c| filter.branch.is_empty() || Some(c.branch_id) == branch_id)
        .filter(|c| filter.platform.is_empty() || c.platform.as_str() == filter.platform)
        .cloned()
        .collect();

    Ok(Json(CoursesPage {
        branches: catalog.branches,
        courses,
        branch_filter: filter.branch,
        platform_filter: filter.platform,
    }))
}

/// GET /projects/?branch=
pub async fn handle_projects(
    State(state): State<AppState>,
    Query(filter): Query<CatalogFilter>,
) -> Result<Json<ProjectsPage>, AppError> {
    let catalog = state.store.snapshot().await?;
    let branch_id = branch_id_named(&catalog, &filter.branch);

    let projects = catalog
        .projects
        .iter()
        .filter(|p| filter.branch.is_empty() || Some(p.branch_id) == branch_id)
        .cloned()
        .collect();

    Ok(Json(ProjectsPage {
        branches: catalog.branches,
        projects,
        branch_filter: filter.branch,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::metrics::tests::branch;

    fn catalog() -> Catalog {
        Catalog {
            branches: vec![
                branch(1, "Computer Science", 88, 91, 9.2),
                branch(2, "Mechanical", 72, 75, 6.5),
            ],
            ..Catalog::default()
        }
    }

    fn form(a: Option<&str>, b: Option<&str>) -> CompareForm {
        CompareForm {
            branch1: a.map(str::to_string),
            branch2: b.map(str::to_string),
        }
    }

    #[test]
    fn test_compare_scores_two_branches() {
        let page = compare_page(catalog(), form(Some("2"), Some("1"))).unwrap();
        assert_eq!(page.branch1.unwrap().name, "Mechanical");
        assert!((page.score1 - 124.0).abs() < 1e-9);
        assert!((page.score2 - 161.6).abs() < 1e-9);
        assert_eq!(page.winner.as_deref(), Some("Computer Science"));
        assert_eq!(page.branches.len(), 2);
    }

    #[test]
    fn test_compare_same_or_missing_is_unscored() {
        for f in [
            form(Some("1"), Some("1")),
            form(Some("1"), None),
            form(None, None),
            form(Some(""), Some("2")),
        ] {
            let page = compare_page(catalog(), f).unwrap();
            assert!(page.branch1.is_none() && page.branch2.is_none());
            assert_eq!(page.score1, 0.0);
            assert!(page.winner.is_none());
        }
    }

    #[test]
    fn test_compare_unknown_id_is_not_found() {
        let err = compare_page(catalog(), form(Some("1"), Some("99"))).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_compare_non_numeric_id_is_validation_error() {
        let err = compare_page(catalog(), form(Some("cs"), Some("2"))).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_suggestion_maps_interest_to_branch() {
        let page = suggestion_page(&catalog(), Some("2"));
        assert_eq!(page.suggested_branch.unwrap().name, "Mechanical");
        assert_eq!(page.interests.len(), 6);
    }

    #[test]
    fn test_suggestion_unknown_or_absent_branch() {
        assert!(suggestion_page(&catalog(), Some("9")).suggested_branch.is_none());
        // "3" is Civil, which this catalog does not have
        assert!(suggestion_page(&catalog(), Some("3")).suggested_branch.is_none());
        assert!(suggestion_page(&catalog(), None).suggested_branch.is_none());
    }
}
