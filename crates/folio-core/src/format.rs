//! Answer templates.
//!
//! Pure string builders used by the responder. None of them fail: empty
//! lists simply produce empty joins.

use crate::models::{Profile, Project, TimelineItem};
use crate::timeline;

/// Reply for a question with no usable tokens.
pub const EMPTY_QUESTION_REPLY: &str =
    "Try asking about a specific project, publication, or research interest.";

/// Contributions shown in a project answer.
const PROJECT_CONTRIBUTIONS: usize = 2;
/// Events shown in the timeline summary.
const TIMELINE_EVENTS: usize = 4;
/// Programming/data skills shown in the profile summary.
const PROFILE_SKILLS: usize = 3;

/// `"<title> (<category>) - <summary> Contributions: ... Outcomes: ..."`
pub fn project(project: &Project) -> String {
    let contributions: Vec<&str> = project
        .contributions
        .iter()
        .take(PROJECT_CONTRIBUTIONS)
        .map(String::as_str)
        .collect();
    format!(
        "{} ({}) - {} Contributions: {}. Outcomes: {}.",
        project.title,
        project.category,
        project.summary,
        contributions.join("; "),
        project.outcomes.join("; ")
    )
}

/// Every publication and thesis as `"<title> - <details> (<year>)."`.
///
/// Returns an empty string when there are none.
pub fn publications(items: &[TimelineItem]) -> String {
    timeline::publications(items)
        .map(|item| format!("{} - {} ({}).", item.title, item.details, item.year))
        .collect::<Vec<_>>()
        .join(" ")
}

/// The first four non-publication events as `"<year>: <title> (<location>)."`.
pub fn timeline(items: &[TimelineItem]) -> String {
    timeline::events(items)
        .take(TIMELINE_EVENTS)
        .map(|item| format!("{}: {} ({}).", item.year, item.title, item.location))
        .collect::<Vec<_>>()
        .join(" ")
}

/// `"<title> (<type>, <year>) - <details>"`
pub fn timeline_item(item: &TimelineItem) -> String {
    format!(
        "{} ({}, {}) - {}",
        item.title, item.kind, item.year, item.details
    )
}

pub fn profile(profile: &Profile) -> String {
    let skills: Vec<&str> = profile
        .skills
        .programming_data
        .iter()
        .take(PROFILE_SKILLS)
        .map(String::as_str)
        .collect();
    format!(
        "{}. Research interests include {}. Skills include {}.",
        profile.program,
        profile.research_interests.join(", "),
        skills.join(", ")
    )
}

/// Reply when nothing matched: the full list of research interests.
pub fn fallback(profile: &Profile) -> String {
    let owner = match profile.first_name() {
        Some(first) => format!("{}'s", first),
        None => "The portfolio owner's".to_string(),
    };
    format!(
        "{} work spans {}. You can ask about a specific project or publication for more detail.",
        owner,
        profile.research_interests.join(", ")
    )
}

/// Opening line of a chat session.
pub fn greeting(profile: &Profile) -> String {
    format!(
        "Ask me about {}'s research, projects, or publications.",
        profile.name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Skills;

    fn item(kind: &str, year: &str, title: &str) -> TimelineItem {
        TimelineItem {
            kind: kind.into(),
            year: year.into(),
            title: title.into(),
            details: format!("{} details", title),
            location: format!("{} city", title),
        }
    }

    #[test]
    fn test_project_format() {
        let p = Project {
            title: "Mesquite MoCap".into(),
            category: "Research".into(),
            summary: "Wireless IMU nodes for motion capture.".into(),
            contributions: vec!["Firmware".into(), "Calibration".into(), "Docs".into()],
            outcomes: vec!["Demo".into(), "Paper draft".into()],
            ..Default::default()
        };
        assert_eq!(
            project(&p),
            "Mesquite MoCap (Research) - Wireless IMU nodes for motion capture. \
             Contributions: Firmware; Calibration. Outcomes: Demo; Paper draft."
        );
    }

    #[test]
    fn test_project_format_empty_lists() {
        let p = Project {
            title: "T".into(),
            category: "C".into(),
            summary: "S.".into(),
            ..Default::default()
        };
        assert_eq!(project(&p), "T (C) - S. Contributions: . Outcomes: .");
    }

    #[test]
    fn test_publications_format() {
        let items = vec![
            item("Publication", "2024", "Paper A"),
            item("Talk", "2023", "Talk B"),
            item("Thesis", "2022", "Thesis C"),
        ];
        assert_eq!(
            publications(&items),
            "Paper A - Paper A details (2024). Thesis C - Thesis C details (2022)."
        );
    }

    #[test]
    fn test_publications_none_is_empty() {
        let items = vec![item("Talk", "2023", "Talk B")];
        assert_eq!(publications(&items), "");
    }

    #[test]
    fn test_timeline_takes_first_four_events() {
        let items = vec![
            item("Talk", "2024", "A"),
            item("Publication", "2024", "P"),
            item("Award", "2023", "B"),
            item("Exhibition", "2022", "C"),
            item("Talk", "2021", "D"),
            item("Award", "2020", "E"),
        ];
        assert_eq!(
            timeline(&items),
            "2024: A (A city). 2023: B (B city). 2022: C (C city). 2021: D (D city)."
        );
    }

    #[test]
    fn test_timeline_item_format() {
        let t = item("Award", "2023", "Best Demo");
        assert_eq!(
            timeline_item(&t),
            "Best Demo (Award, 2023) - Best Demo details"
        );
    }

    #[test]
    fn test_profile_format() {
        let p = Profile {
            program: "PhD in Computer Science".into(),
            research_interests: vec!["embodied AI".into(), "XR".into()],
            skills: Skills {
                programming_data: vec!["Rust".into(), "Python".into(), "SQL".into(), "R".into()],
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(
            profile(&p),
            "PhD in Computer Science. Research interests include embodied AI, XR. \
             Skills include Rust, Python, SQL."
        );
    }

    #[test]
    fn test_fallback_uses_first_name() {
        let p = Profile {
            name: "Ada Byron".into(),
            research_interests: vec!["sensing".into(), "XR".into()],
            ..Default::default()
        };
        assert_eq!(
            fallback(&p),
            "Ada's work spans sensing, XR. You can ask about a specific project or publication for more detail."
        );
    }

    #[test]
    fn test_fallback_without_name() {
        let p = Profile::default();
        assert!(fallback(&p).starts_with("The portfolio owner's work spans ."));
    }

    #[test]
    fn test_greeting() {
        let p = Profile {
            name: "Ada Byron".into(),
            ..Default::default()
        };
        assert_eq!(
            greeting(&p),
            "Ask me about Ada Byron's research, projects, or publications."
        );
    }
}
