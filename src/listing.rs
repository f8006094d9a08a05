//! Plain-text views of the portfolio: projects, timeline, publications,
//! and the profile.
//!
//! The `render_*` functions build the text; the `run_*` wrappers print it.

use anyhow::{bail, Result};
use std::fmt::Write;

use folio_core::catalog::{self, ORDERED_CATEGORIES};
use folio_core::models::{Profile, Project, TimelineItem};
use folio_core::timeline;

/// Map a user-typed category onto its canonical spelling.
///
/// Known categories match case-insensitively; anything else is kept as
/// typed so custom categories can still be filtered.
pub fn normalize_category(input: &str) -> String {
    ORDERED_CATEGORIES
        .iter()
        .find(|c| c.eq_ignore_ascii_case(input.trim()))
        .map(|c| c.to_string())
        .unwrap_or_else(|| input.trim().to_string())
}

pub fn render_projects(projects: &[Project], category: &str) -> String {
    let mut out = String::new();
    let tabs = catalog::available_categories(projects);
    let _ = writeln!(out, "categories: {}", tabs.join(", "));

    let visible = catalog::filter_by_category(projects, category);
    if visible.is_empty() {
        let _ = writeln!(out, "No projects.");
        return out;
    }

    let _ = writeln!(
        out,
        "{:<16} {:<28} {:<12} {:<12} START",
        "ID", "TITLE", "CATEGORY", "STATUS"
    );
    for p in visible {
        let _ = writeln!(
            out,
            "{:<16} {:<28} {:<12} {:<12} {}",
            p.id,
            p.title,
            p.category,
            p.status,
            catalog::format_start(&p.start_date.label, &p.start_date.precision)
        );
    }
    out
}

pub fn render_project(p: &Project) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", p.title);
    let _ = writeln!(out, "    category: {}", p.category);
    let _ = writeln!(out, "    status: {}", p.status);
    let _ = writeln!(
        out,
        "    start: {}",
        catalog::format_start(&p.start_date.label, &p.start_date.precision)
    );
    let _ = writeln!(out, "    location: {}", p.location);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", p.summary);
    if !p.problem.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Problem: {}", p.problem);
    }
    write_list(&mut out, "Contributions", &p.contributions);
    if !p.tech_stack.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Stack: {}", p.tech_stack.join(", "));
    }
    write_list(&mut out, "Outcomes", &p.outcomes);

    let _ = writeln!(out);
    let _ = writeln!(out, "Links:");
    for (kind, url) in p.links.entries() {
        let _ = writeln!(out, "    {}: {}", kind, url.unwrap_or("(none)"));
    }

    let _ = writeln!(out);
    if p.gallery.is_empty() {
        let _ = writeln!(out, "Gallery: (image placeholder)");
    } else {
        let _ = writeln!(out, "Gallery:");
        for image in &p.gallery {
            let _ = writeln!(out, "    {} — {}", image.src, image.alt);
        }
    }
    out
}

fn write_list(out: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}:", heading);
    for item in items {
        let _ = writeln!(out, "  - {}", item);
    }
}

fn render_timeline_entries<'a>(items: impl Iterator<Item = &'a TimelineItem>) -> String {
    let mut out = String::new();
    for item in items {
        let _ = writeln!(out, "{} - {}", item.year, item.kind);
        let _ = writeln!(out, "    {}", item.title);
        if !item.details.is_empty() {
            let _ = writeln!(out, "    {}", item.details);
        }
        if !item.location.is_empty() {
            let _ = writeln!(out, "    {}", item.location);
        }
    }
    if out.is_empty() {
        out.push_str("No entries.\n");
    }
    out
}

/// Talks, exhibitions, awards and other non-publication events.
pub fn render_timeline(items: &[TimelineItem]) -> String {
    render_timeline_entries(timeline::events(items))
}

pub fn render_publications(items: &[TimelineItem]) -> String {
    render_timeline_entries(timeline::publications(items))
}

pub fn render_profile(profile: &Profile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} - {}", profile.name, profile.program);
    if !profile.location.is_empty() {
        let _ = writeln!(out, "    location: {}", profile.location);
    }
    if !profile.email.is_empty() {
        let _ = writeln!(out, "    email: {}", profile.email);
    }
    if !profile.website.is_empty() {
        let _ = writeln!(
            out,
            "    website: {}",
            profile.website.trim_start_matches("https://")
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Research interests: {}",
        profile.research_interests.join(", ")
    );
    let _ = writeln!(out, "Core skills: {}", profile.core_skills().join(", "));
    write_list(&mut out, "Affiliations", &profile.affiliations);
    write_list(&mut out, "Coursework", &profile.coursework);
    out
}

pub fn run_projects(projects: &[Project], category: Option<&str>) -> Result<()> {
    let category = category
        .map(normalize_category)
        .unwrap_or_else(|| catalog::ALL_CATEGORIES.to_string());
    print!("{}", render_projects(projects, &category));
    Ok(())
}

pub fn run_show(projects: &[Project], id: &str) -> Result<()> {
    match catalog::find_project(projects, id) {
        Some(project) => {
            print!("{}", render_project(project));
            Ok(())
        }
        None => bail!("No project with id '{}'", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::models::{GalleryImage, Links, StartDate};

    fn mocap() -> Project {
        Project {
            id: "mocap".into(),
            title: "Mesquite MoCap".into(),
            category: "Research".into(),
            status: "Active".into(),
            start_date: StartDate {
                label: "Fall 2023".into(),
                precision: "approx".into(),
            },
            summary: "Wireless IMU nodes.".into(),
            contributions: vec!["Firmware".into()],
            tech_stack: vec!["C++".into(), "BLE".into()],
            links: Links {
                github: Some("https://github.com/x/mocap".into()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_normalize_category() {
        assert_eq!(normalize_category("research"), "Research");
        assert_eq!(normalize_category(" ALL "), "All");
        assert_eq!(normalize_category("Workshop"), "Workshop");
    }

    #[test]
    fn test_render_projects_table() {
        let out = render_projects(&[mocap()], "All");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "categories: All, Research");
        assert!(lines[1].starts_with("ID"));
        assert!(lines[2].starts_with("mocap"));
        assert!(lines[2].ends_with("Fall 2023 (approx.)"));
    }

    #[test]
    fn test_render_projects_empty_filter() {
        let out = render_projects(&[mocap()], "Hardware");
        assert!(out.ends_with("No projects.\n"));
    }

    #[test]
    fn test_render_project_links_and_gallery() {
        let mut p = mocap();
        let out = render_project(&p);
        assert!(out.contains("    github: https://github.com/x/mocap\n"));
        assert!(out.contains("    demo: (none)\n"));
        assert!(out.contains("Gallery: (image placeholder)"));
        assert!(out.contains("Stack: C++, BLE"));

        p.gallery.push(GalleryImage {
            src: "/img/rig.jpg".into(),
            alt: "The rig".into(),
        });
        assert!(render_project(&p).contains("/img/rig.jpg — The rig"));
    }

    #[test]
    fn test_render_timeline_partitions() {
        let items = vec![
            TimelineItem {
                kind: "Thesis".into(),
                year: "2022".into(),
                title: "Gesture Sensing".into(),
                ..Default::default()
            },
            TimelineItem {
                kind: "Talk".into(),
                year: "2023".into(),
                title: "Sensors in Motion".into(),
                location: "Denver".into(),
                ..Default::default()
            },
        ];
        assert_eq!(
            render_timeline(&items),
            "2023 - Talk\n    Sensors in Motion\n    Denver\n"
        );
        assert_eq!(
            render_publications(&items),
            "2022 - Thesis\n    Gesture Sensing\n"
        );
        assert_eq!(render_publications(&[]), "No entries.\n");
    }

    #[test]
    fn test_render_profile() {
        let profile = Profile {
            name: "Ada Byron".into(),
            program: "PhD".into(),
            website: "https://ada.dev".into(),
            research_interests: vec!["sensing".into(), "XR".into()],
            ..Default::default()
        };
        let out = render_profile(&profile);
        assert!(out.starts_with("Ada Byron - PhD\n    website: ada.dev\n"));
        assert!(out.contains("Research interests: sensing, XR\n"));
        assert!(!out.contains("Affiliations"));
    }
}
