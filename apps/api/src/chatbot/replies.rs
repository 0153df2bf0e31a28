//! Reply templates. Each function renders one intent from a catalog snapshot.

use crate::analytics::metrics::{compare_branches, format_amount, growth, highest_salary, top_growth};
use crate::models::catalog::{Branch, Catalog};

/// Courses listed when a branch is named.
pub const BRANCH_COURSE_LIMIT: usize = 4;
/// Courses listed when no branch is named.
pub const POPULAR_COURSE_LIMIT: usize = 5;
pub const BRANCH_PROJECT_LIMIT: usize = 4;
/// Branches and projects per branch in the project overview.
pub const OVERVIEW_BRANCHES: usize = 3;
pub const OVERVIEW_PROJECTS: usize = 2;
/// Branches listed under "Fastest Growing".
pub const FASTEST_GROWING: usize = 2;

pub const GREETING: &str = "👋 Hello! I'm your Engineering Career Assistant. Ask me about placements, salaries, courses, or specific branches!";

pub const HELP: &str = "🤖 **I can help you with:**
• Placement rates - Ask \"placement rates\" or \"placements\"
• Salary information - Ask \"salaries\" or \"salary packages\"
• Branch details - Ask \"about Computer Science\" or \"tell me about Mechanical\"
• Course recommendations - Ask \"courses for Electronics\" or \"NPTEL courses\"
• Project ideas - Ask \"projects for Civil\" or \"project ideas\"
• Comparisons - Ask \"compare CS and Mechanical\"
• Future trends - Ask \"future trends\" or \"growing fields\"
• In-demand skills - Ask \"skills for 2026\"

Just type your question! 🎯";

pub const FALLBACK: &str = "I'm not sure I understand. Try asking about:
• Placement rates
• Salary packages
• Specific branches (like \"Computer Science\")
• Courses or projects
• Future trends

Type 'help' for more options! 🤖";

pub fn placement_rates(catalog: &Catalog) -> String {
    let mut response = String::from("📊 **Placement Rates 2024:**\n\n");
    for branch in &catalog.branches {
        response.push_str(&format!("• {}: {}%\n", branch.name, branch.placement_2024));
    }
    response.push_str("\n📈 **Fastest Growing:**\n");
    for branch in top_growth(&catalog.branches, FASTEST_GROWING) {
        response.push_str(&format!("• {}: {:+}% growth\n", branch.name, growth(branch)));
    }
    response
}

pub fn salary_packages(catalog: &Catalog) -> String {
    let mut response = String::from("💰 **Average Salary Packages 2024:**\n\n");
    for branch in &catalog.branches {
        response.push_str(&format!(
            "• {}: ₹{} LPA\n",
            branch.name,
            format_amount(branch.salary_2024)
        ));
    }
    if let Some(top) = highest_salary(&catalog.branches) {
        response.push_str(&format!(
            "\n🏆 **Highest:** {} with ₹{} LPA",
            top.name,
            format_amount(top.salary_2024)
        ));
    }
    response
}

pub fn future_trends(catalog: &Catalog) -> String {
    let mut response = String::from("🔮 **Future Trends & Growing Fields:**\n\n");
    for branch in &catalog.branches {
        response.push_str(&format!("• **{}:** {}\n", branch.name, branch.future_trends));
    }
    response
}

pub fn future_skills(catalog: &Catalog) -> String {
    let mut response = String::from("🔧 **In-Demand Skills for 2026:**\n\n");
    for branch in &catalog.branches {
        response.push_str(&format!("• **{}:** {}\n", branch.name, branch.future_skills));
    }
    response
}

pub fn branch_courses(catalog: &Catalog, branch: &Branch) -> String {
    let courses: Vec<_> = catalog
        .courses_for(branch.id)
        .take(BRANCH_COURSE_LIMIT)
        .collect();
    if courses.is_empty() {
        return format!("No courses found for {} yet.", branch.name);
    }
    let mut response = format!("🎓 **Recommended Courses for {}:**\n\n", branch.name);
    for course in courses {
        let free_icon = if course.is_free { "🆓" } else { "💰" };
        response.push_str(&format!(
            "• **{}**\n  {} {} | {} | {}\n",
            course.name, free_icon, course.platform, course.level, course.duration
        ));
    }
    response
}

pub fn popular_courses(catalog: &Catalog) -> String {
    let mut response = String::from("🎓 **Popular Courses:**\n\n");
    for course in catalog.courses.iter().take(POPULAR_COURSE_LIMIT) {
        let branch_name = catalog
            .branch(course.branch_id)
            .map_or("", |b| b.name.as_str());
        response.push_str(&format!(
            "• **{}** ({}) - {}\n",
            course.name, course.platform, branch_name
        ));
    }
    response
}

pub fn branch_projects(catalog: &Catalog, branch: &Branch) -> String {
    let projects: Vec<_> = catalog
        .projects_for(branch.id)
        .take(BRANCH_PROJECT_LIMIT)
        .collect();
    if projects.is_empty() {
        return format!("No projects found for {} yet.", branch.name);
    }
    let mut response = format!("🔧 **Project Ideas for {}:**\n\n", branch.name);
    for project in projects {
        response.push_str(&format!("• {} ({})\n", project.name, project.difficulty));
    }
    response
}

pub fn project_overview(catalog: &Catalog) -> String {
    let mut response = String::from("🔧 **Project Ideas by Branch:**\n\n");
    for branch in catalog.branches.iter().take(OVERVIEW_BRANCHES) {
        let mut projects = catalog.projects_for(branch.id).take(OVERVIEW_PROJECTS).peekable();
        if projects.peek().is_none() {
            continue;
        }
        response.push_str(&format!("**{}:**\n", branch.name));
        for project in projects {
            response.push_str(&format!("  • {}\n", project.name));
        }
        response.push('\n');
    }
    response
}

pub fn branch_profile(branch: &Branch) -> String {
    format!(
        "📚 **{name} Engineering {icon}**

**Placement 2024:** {p24}%
**Placement 2026:** {p26}% ({growth:+.1}% growth)
**Salary:** ₹{salary} LPA

**Future Trend:** {trends}

**Key Skills:** {skills}

Ask me about courses or projects for {name}!",
        name = branch.name,
        icon = branch.icon,
        p24 = branch.placement_2024,
        p26 = branch.placement_2026,
        growth = f64::from(growth(branch)),
        salary = format_amount(branch.salary_2024),
        trends = branch.future_trends,
        skills = branch.future_skills,
    )
}

pub fn comparison(first: &Branch, second: &Branch) -> String {
    let result = compare_branches(first, second);
    format!(
        "🔄 **Comparison: {a} vs {b}**

**Placement 2024:** {pa}% vs {pb}%
**Salary:** ₹{sa}L vs ₹{sb}L
**Growth:** {ga:+}% vs {gb:+}%

**Winner:** {winner}",
        a = first.name,
        b = second.name,
        pa = first.placement_2024,
        pb = second.placement_2024,
        sa = format_amount(first.salary_2024),
        sb = format_amount(second.salary_2024),
        ga = growth(first),
        gb = growth(second),
        winner = result.winner.name,
    )
}
