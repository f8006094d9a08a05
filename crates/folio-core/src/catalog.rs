//! Project gallery helpers: category filters, lookup, start-date labels.

use crate::models::Project;

/// Category filter value that matches every project.
pub const ALL_CATEGORIES: &str = "All";

/// Filter tabs, in display order.
pub const ORDERED_CATEGORIES: [&str; 5] = [
    ALL_CATEGORIES,
    "Research",
    "Hardware",
    "Artistic",
    "Coursework",
];

/// Filter tabs worth showing for `projects`.
///
/// `All` is always present; every other category appears only when at least
/// one project carries it. Categories outside [`ORDERED_CATEGORIES`] are
/// reachable through [`filter_by_category`] but get no tab.
pub fn available_categories(projects: &[Project]) -> Vec<&'static str> {
    ORDERED_CATEGORIES
        .into_iter()
        .filter(|cat| *cat == ALL_CATEGORIES || projects.iter().any(|p| p.category == *cat))
        .collect()
}

/// Projects in `category`, in supplied order. `All` returns every project.
pub fn filter_by_category<'a>(projects: &'a [Project], category: &str) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| category == ALL_CATEGORIES || p.category == category)
        .collect()
}

pub fn find_project<'a>(projects: &'a [Project], id: &str) -> Option<&'a Project> {
    projects.iter().find(|p| p.id == id)
}

/// Start-date label, marked approximate when the precision says so and the
/// label does not already.
pub fn format_start(label: &str, precision: &str) -> String {
    if precision == "approx" && !label.to_lowercase().contains("approx") {
        format!("{} (approx.)", label)
    } else {
        label.to_string()
    }
}
