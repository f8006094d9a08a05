//! Portfolio content models.
//!
//! These types mirror the JSON content bundled with the site
//! (`profile.json`, `projects.json`, `timeline.json`). Field names on the
//! wire are camelCase. Every field defaults to empty when absent so that
//! sparse content degrades to "no text" instead of failing to load.

use serde::{Deserialize, Serialize};

/// The portfolio owner's profile. One per session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub website: String,
    pub location: String,
    pub program: String,
    pub research_interests: Vec<String>,
    pub affiliations: Vec<String>,
    pub coursework: Vec<String>,
    pub skills: Skills,
}

/// The three named skill groups shown on the profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skills {
    pub programming_data: Vec<String>,
    pub embedded_hardware: Vec<String>,
    #[serde(rename = "imaging3DXR")]
    pub imaging_3d_xr: Vec<String>,
}

impl Profile {
    /// First whitespace-separated word of the name, or `None` for an empty name.
    pub fn first_name(&self) -> Option<&str> {
        self.name.split_whitespace().next()
    }

    /// The first two skills of each group, in group order.
    pub fn core_skills(&self) -> Vec<&str> {
        [
            &self.skills.programming_data,
            &self.skills.embedded_hardware,
            &self.skills.imaging_3d_xr,
        ]
        .into_iter()
        .flat_map(|group| group.iter().take(2).map(String::as_str))
        .collect()
    }
}

/// A portfolio project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: String,
    pub title: String,
    /// `Research`, `Hardware`, `Artistic`, `Coursework`, or any other label.
    pub category: String,
    pub status: String,
    pub start_date: StartDate,
    pub location: String,
    pub summary: String,
    pub problem: String,
    pub contributions: Vec<String>,
    pub tech_stack: Vec<String>,
    pub outcomes: Vec<String>,
    pub links: Links,
    pub gallery: Vec<GalleryImage>,
}

/// When a project started, with how exact the label is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartDate {
    pub label: String,
    /// `approx`, `exact`, or free text.
    pub precision: String,
}

/// External links for a project. Each kind is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    pub github: Option<String>,
    pub demo: Option<String>,
    pub paper: Option<String>,
}

impl Links {
    /// `(kind, url)` pairs in display order; `url` is `None` when absent.
    pub fn entries(&self) -> [(&'static str, Option<&str>); 3] {
        [
            ("github", self.github.as_deref()),
            ("demo", self.demo.as_deref()),
            ("paper", self.paper.as_deref()),
        ]
    }
}

/// One gallery image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

/// A dated entry on the timeline: publication, thesis, talk, award, etc.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub year: String,
    pub title: String,
    pub details: String,
    pub location: String,
}

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single chat message, as rendered in the assistant panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantMessage {
    pub role: Role,
    pub content: String,
}

impl AssistantMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}
