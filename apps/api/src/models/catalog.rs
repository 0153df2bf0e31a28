use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An engineering discipline with its placement and salary statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Branch {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub description: String,
    /// Placement rate (%) for 2024.
    pub placement_2024: i32,
    /// Projected placement rate (%) for 2026.
    pub placement_2026: i32,
    /// Average package in lakhs per annum.
    pub salary_2024: f64,
    pub future_trends: String,
    pub future_skills: String,
    pub icon: String,
}

impl Branch {
    /// Percentage-point change between the 2024 and 2026 placement rates.
    pub fn placement_growth(&self) -> i32 {
        self.placement_2026 - self.placement_2024
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub branch_id: i64,
    pub description: String,
    pub website: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Platform {
    #[serde(rename = "NPTEL")]
    Nptel,
    Coursera,
    #[serde(rename = "edX")]
    EdX,
    Udemy,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Nptel => "NPTEL",
            Platform::Coursera => "Coursera",
            Platform::EdX => "edX",
            Platform::Udemy => "Udemy",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Returned when a stored label does not name a known variant.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for Platform {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NPTEL" => Ok(Platform::Nptel),
            "Coursera" => Ok(Platform::Coursera),
            "edX" => Ok(Platform::EdX),
            "Udemy" => Ok(Platform::Udemy),
            other => Err(UnknownVariant {
                kind: "platform",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for Level {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Beginner" => Ok(Level::Beginner),
            "Intermediate" => Ok(Level::Intermediate),
            "Advanced" => Ok(Level::Advanced),
            other => Err(UnknownVariant {
                kind: "level",
                value: other.to_string(),
            }),
        }
    }
}

impl FromStr for Difficulty {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" => Ok(Difficulty::Easy),
            "Medium" => Ok(Difficulty::Medium),
            "Hard" => Ok(Difficulty::Hard),
            other => Err(UnknownVariant {
                kind: "difficulty",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub platform: Platform,
    pub branch_id: i64,
    pub level: Level,
    pub duration: String,
    pub is_free: bool,
    pub free_details: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub branch_id: i64,
    pub description: String,
    pub difficulty: Difficulty,
}

/// Point-in-time copy of every catalog table, each in insertion order.
///
/// The responder and the aggregation functions only ever see a snapshot, so a
/// concurrent reseed can never hand them a half-loaded dataset.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    pub branches: Vec<Branch>,
    pub companies: Vec<Company>,
    pub courses: Vec<Course>,
    pub projects: Vec<Project>,
}

impl Catalog {
    pub fn branch(&self, id: i64) -> Option<&Branch> {
        self.branches.iter().find(|b| b.id == id)
    }

    pub fn branch_named(&self, name: &str) -> Option<&Branch> {
        self.branches.iter().find(|b| b.name == name)
    }

    pub fn companies_for(&self, branch_id: i64) -> impl Iterator<Item = &Company> {
        self.companies.iter().filter(move |c| c.branch_id == branch_id)
    }

    pub fn courses_for(&self, branch_id: i64) -> impl Iterator<Item = &Course> {
        self.courses.iter().filter(move |c| c.branch_id == branch_id)
    }

    pub fn projects_for(&self, branch_id: i64) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(move |p| p.branch_id == branch_id)
    }

    pub fn counts(&self) -> CatalogCounts {
        CatalogCounts {
            branches: self.branches.len(),
            companies: self.companies.len(),
            courses: self.courses.len(),
            projects: self.projects.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogCounts {
    pub branches: usize,
    pub companies: usize,
    pub courses: usize,
    pub projects: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_round_trips_display_spelling() {
        for label in ["NPTEL", "Coursera", "edX", "Udemy"] {
            let platform: Platform = label.parse().unwrap();
            assert_eq!(platform.as_str(), label);
        }
    }

    #[test]
    fn test_platform_serializes_with_display_spelling() {
        assert_eq!(serde_json::to_string(&Platform::EdX).unwrap(), "\"edX\"");
        assert_eq!(serde_json::to_string(&Platform::Nptel).unwrap(), "\"NPTEL\"");
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let err = "Expert".parse::<Level>().unwrap_err();
        assert_eq!(err.to_string(), "unknown level 'Expert'");
    }

    #[test]
    fn test_difficulty_defaults_to_medium() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }
}
