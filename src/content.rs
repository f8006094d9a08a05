//! Load portfolio content from the JSON files bundled with the site.
//!
//! The three files are parsed independently and assembled into an
//! [`AssistantContext`]. Missing or malformed files fail with the offending
//! path in the error chain.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

use folio_core::assistant::AssistantContext;
use folio_core::models::{Profile, Project, TimelineItem};

use crate::config::ContentConfig;

/// Read `profile`, `projects` and `timeline` as configured.
pub fn load_content(config: &ContentConfig) -> Result<AssistantContext> {
    let profile: Profile = read_json(&config.profile_path())?;
    let projects: Vec<Project> = read_json(&config.projects_path())?;
    let timeline: Vec<TimelineItem> = read_json(&config.timeline_path())?;

    tracing::info!(
        dir = %config.dir.display(),
        projects = projects.len(),
        timeline = timeline.len(),
        "loaded portfolio content"
    );

    let context = AssistantContext::builder()
        .profile(profile)
        .projects(projects)
        .timeline(timeline)
        .build()?;
    Ok(context)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read content file: {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse content file: {}", path.display()))
}
