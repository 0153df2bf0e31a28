use serde::Serialize;

use crate::models::catalog::Branch;

/// Default length of a full salary bar, in characters.
pub const SALARY_BAR_SCALE: u32 = 20;

/// Weight applied to salary (LPA) when ranking two branches against each other.
pub const SALARY_WEIGHT: f64 = 8.0;

/// Formats an amount the way the figures are quoted: whole numbers keep one decimal ("6.0"),
/// everything else prints its shortest form ("9.2").
pub fn format_amount(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

pub fn growth(branch: &Branch) -> i32 {
    branch.placement_growth()
}

/// Branches sorted by growth, highest first. Ties keep iteration order.
pub fn top_growth(branches: &[Branch], n: usize) -> Vec<&Branch> {
    let mut ranked: Vec<&Branch> = branches.iter().collect();
    // sort_by is stable
    ranked.sort_by(|a, b| growth(b).cmp(&growth(a)));
    ranked.truncate(n);
    ranked
}

/// Branch with the highest 2024 placement rate; the first one wins a tie.
pub fn best_placement(branches: &[Branch]) -> Option<&Branch> {
    first_max_by(branches, |b| f64::from(b.placement_2024))
}

/// Branch with the highest 2024 salary; the first one wins a tie.
pub fn highest_salary(branches: &[Branch]) -> Option<&Branch> {
    first_max_by(branches, |b| b.salary_2024)
}

fn first_max_by(branches: &[Branch], key: impl Fn(&Branch) -> f64) -> Option<&Branch> {
    let mut best: Option<&Branch> = None;
    for branch in branches {
        match best {
            Some(current) if key(branch) <= key(current) => {}
            _ => best = Some(branch),
        }
    }
    best
}

/// placement_2024 + salary_2024 × 8
pub fn compare_score(branch: &Branch) -> f64 {
    f64::from(branch.placement_2024) + branch.salary_2024 * SALARY_WEIGHT
}

/// Largest 2024 salary, or 1.0 for an empty collection so bar lengths never divide by zero.
pub fn max_salary(branches: &[Branch]) -> f64 {
    branches
        .iter()
        .map(|b| b.salary_2024)
        .fold(None, |acc: Option<f64>, s| Some(acc.map_or(s, |m| m.max(s))))
        .unwrap_or(1.0)
}

pub fn salary_bar(branch: &Branch, max_salary: f64, scale: u32) -> u32 {
    if max_salary <= 0.0 {
        return 0;
    }
    let length = (branch.salary_2024 / max_salary * f64::from(scale)).floor();
    length.clamp(0.0, f64::from(scale)) as u32
}

pub fn growth_icon(growth: i32) -> &'static str {
    if growth > 0 {
        "📈"
    } else {
        "📉"
    }
}

/// One-line recommendation shown on a branch's detail page.
pub fn verdict(branch: &Branch) -> &'static str {
    if branch.placement_2024 >= 80 {
        "Excellent choice! High demand field! 🎯"
    } else if branch.placement_2024 >= 70 {
        "Good choice with growing opportunities! 👍"
    } else {
        "Stable field with niche opportunities! 🔧"
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Comparison<'a> {
    pub first: &'a Branch,
    pub second: &'a Branch,
    pub first_score: f64,
    pub second_score: f64,
    pub winner: &'a Branch,
}

/// Scores two branches. The first only wins when strictly ahead.
pub fn compare_branches<'a>(first: &'a Branch, second: &'a Branch) -> Comparison<'a> {
    let first_score = compare_score(first);
    let second_score = compare_score(second);
    let winner = if first_score > second_score {
        first
    } else {
        second
    };
    Comparison {
        first,
        second,
        first_score,
        second_score,
        winner,
    }
}
