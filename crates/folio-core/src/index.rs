//! Lowercase search text for each portfolio entity.
//!
//! Each entity is flattened into a single string by joining a fixed set of
//! its fields with single spaces and lowercasing the result. Empty fields
//! are skipped. The index is built once per [`Assistant`](crate::assistant::Assistant)
//! and never changes afterwards.

use crate::models::{Profile, Project, TimelineItem};

/// Precomputed search text for one entity.
///
/// `position` is the entity's index in the collection it was built from,
/// so supplied order is recoverable for tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub position: usize,
    pub text: String,
}

/// Search text for the profile: name, program, location, interests,
/// affiliations, coursework and all three skill groups.
pub fn profile_text(profile: &Profile) -> String {
    let fields = [&profile.name, &profile.program, &profile.location]
        .into_iter()
        .chain(&profile.research_interests)
        .chain(&profile.affiliations)
        .chain(&profile.coursework)
        .chain(&profile.skills.programming_data)
        .chain(&profile.skills.embedded_hardware)
        .chain(&profile.skills.imaging_3d_xr);
    join_lowercase(fields)
}

/// Search text for a project: identity, prose, and the ordered lists.
pub fn project_text(project: &Project) -> String {
    let fields = [
        &project.title,
        &project.category,
        &project.status,
        &project.summary,
        &project.problem,
        &project.location,
    ]
    .into_iter()
    .chain(&project.contributions)
    .chain(&project.tech_stack)
    .chain(&project.outcomes);
    join_lowercase(fields)
}

/// Search text for a timeline entry: type, title, details, location, year.
pub fn timeline_text(item: &TimelineItem) -> String {
    join_lowercase([
        &item.kind,
        &item.title,
        &item.details,
        &item.location,
        &item.year,
    ])
}

/// Build index entries for a collection, preserving supplied order.
pub fn build<T>(items: &[T], text_of: impl Fn(&T) -> String) -> Vec<IndexEntry> {
    items
        .iter()
        .enumerate()
        .map(|(position, item)| IndexEntry {
            position,
            text: text_of(item),
        })
        .collect()
}

fn join_lowercase<'a>(fields: impl IntoIterator<Item = &'a String>) -> String {
    fields
        .into_iter()
        .map(|f| f.as_str())
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
