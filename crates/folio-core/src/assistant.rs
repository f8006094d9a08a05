//! The local portfolio assistant.
//!
//! [`Assistant`] indexes the profile, projects and timeline once at
//! construction and then answers free-text questions by keyword overlap.
//! No state changes after construction, so [`Assistant::answer`] is a pure
//! function of the content and the question and is safe to call from many
//! tasks at once.
//!
//! # Routing
//!
//! 1. A question with no usable tokens gets [`EMPTY_QUESTION_REPLY`].
//! 2. Intent rules ([`INTENT_RULES`]) are checked in order against the
//!    lowercased question; the first whose keyword occurs wins.
//! 3. The best project answers if its score is at least the profile score
//!    and the best timeline score.
//! 4. Otherwise the best timeline item answers, if it scored at all.
//! 5. Otherwise the generic fallback lists the research interests.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::ContextError;
use crate::format::{self, EMPTY_QUESTION_REPLY};
use crate::index::{self, IndexEntry};
use crate::models::{Profile, Project, TimelineItem};
use crate::search::{score_text, tokenize, top_score, Scored};

/// The content an [`Assistant`] answers from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssistantContext {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub timeline: Vec<TimelineItem>,
}

impl AssistantContext {
    pub fn new(profile: Profile, projects: Vec<Project>, timeline: Vec<TimelineItem>) -> Self {
        Self {
            profile,
            projects,
            timeline,
        }
    }

    /// Start a builder that checks every collection was supplied.
    pub fn builder() -> AssistantContextBuilder {
        AssistantContextBuilder::default()
    }
}

/// Assembles an [`AssistantContext`] from parts that arrive separately.
///
/// All three parts are required. Empty lists are fine.
#[derive(Debug, Default)]
pub struct AssistantContextBuilder {
    profile: Option<Profile>,
    projects: Option<Vec<Project>>,
    timeline: Option<Vec<TimelineItem>>,
}

impl AssistantContextBuilder {
    pub fn profile(mut self, profile: Profile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn projects(mut self, projects: Vec<Project>) -> Self {
        self.projects = Some(projects);
        self
    }

    pub fn timeline(mut self, timeline: Vec<TimelineItem>) -> Self {
        self.timeline = Some(timeline);
        self
    }

    pub fn build(self) -> Result<AssistantContext, ContextError> {
        Ok(AssistantContext {
            profile: self
                .profile
                .ok_or(ContextError::MissingCollection("profile"))?,
            projects: self
                .projects
                .ok_or(ContextError::MissingCollection("projects"))?,
            timeline: self
                .timeline
                .ok_or(ContextError::MissingCollection("timeline"))?,
        })
    }
}

/// Question categories answered by keyword before any scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Publications,
    Events,
    Profile,
}

/// A keyword-triggered rule: if the question contains any keyword,
/// `respond` produces the answer.
pub struct IntentRule {
    pub intent: Intent,
    pub keywords: &'static [&'static str],
    pub respond: fn(&AssistantContext) -> String,
}

impl IntentRule {
    fn matches(&self, query: &str) -> bool {
        self.keywords.iter().any(|kw| query.contains(kw))
    }
}

/// Intent rules, checked top to bottom.
pub const INTENT_RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::Publications,
        keywords: &["publication", "paper", "thesis"],
        respond: |ctx| format::publications(&ctx.timeline),
    },
    IntentRule {
        intent: Intent::Events,
        keywords: &["talk", "exhibition", "award"],
        respond: |ctx| format::timeline(&ctx.timeline),
    },
    IntentRule {
        intent: Intent::Profile,
        keywords: &["skill", "interest", "research"],
        respond: |ctx| format::profile(&ctx.profile),
    },
];

/// Which branch produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Route {
    EmptyQuestion,
    Intent { intent: Intent },
    Project { position: usize },
    TimelineItem { position: usize },
    Fallback,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::EmptyQuestion => write!(f, "empty-question"),
            Route::Intent { intent } => write!(f, "intent:{:?}", intent),
            Route::Project { position } => write!(f, "project#{}", position),
            Route::TimelineItem { position } => write!(f, "timeline#{}", position),
            Route::Fallback => write!(f, "fallback"),
        }
    }
}

/// Scoring breakdown for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreExplanation {
    pub tokens: Vec<String>,
    pub profile_score: usize,
    /// `(position, score)` of the best project, if any scored above zero.
    pub top_project: Option<(usize, usize)>,
    /// `(position, score)` of the best timeline item, if any scored above zero.
    pub top_timeline: Option<(usize, usize)>,
}

/// A reply with the branch that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub text: String,
    pub route: Route,
    /// Absent when the question had no usable tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explain: Option<ScoreExplanation>,
}

/// Keyword-matching assistant over immutable portfolio content.
#[derive(Debug, Clone)]
pub struct Assistant {
    context: AssistantContext,
    profile_text: String,
    project_index: Vec<IndexEntry>,
    timeline_index: Vec<IndexEntry>,
}

impl Assistant {
    /// Build the search indices. Runs once; never fails.
    pub fn new(context: AssistantContext) -> Self {
        let profile_text = index::profile_text(&context.profile);
        let project_index = index::build(&context.projects, index::project_text);
        let timeline_index = index::build(&context.timeline, index::timeline_text);
        debug!(
            projects = project_index.len(),
            timeline = timeline_index.len(),
            "built assistant index"
        );
        Self {
            context,
            profile_text,
            project_index,
            timeline_index,
        }
    }

    pub fn context(&self) -> &AssistantContext {
        &self.context
    }

    /// Answer a question with a plain string.
    pub fn answer(&self, question: &str) -> String {
        self.respond(question).text
    }

    /// Answer a question, reporting the route taken and the scores seen.
    pub fn respond(&self, question: &str) -> Answer {
        let query = question.trim().to_lowercase();
        let tokens = tokenize(&query);

        if tokens.is_empty() {
            return self.finish(Route::EmptyQuestion, EMPTY_QUESTION_REPLY.to_string(), None);
        }

        let top_project = top_score(&score_index(&tokens, &self.project_index));
        let top_timeline = top_score(&score_index(&tokens, &self.timeline_index));
        let profile_score = score_text(&tokens, &self.profile_text);

        let explain = ScoreExplanation {
            profile_score,
            top_project: top_project.map(|s| (s.item, s.score)),
            top_timeline: top_timeline.map(|s| (s.item, s.score)),
            tokens,
        };

        if let Some(rule) = INTENT_RULES.iter().find(|rule| rule.matches(&query)) {
            let text = (rule.respond)(&self.context);
            return self.finish(Route::Intent { intent: rule.intent }, text, Some(explain));
        }

        let timeline_score = top_timeline.map_or(0, |t| t.score);

        if let Some(best) = top_project {
            if best.score >= profile_score.max(timeline_score) {
                let text = format::project(&self.context.projects[best.item]);
                return self.finish(Route::Project { position: best.item }, text, Some(explain));
            }
        }

        if let Some(best) = top_timeline {
            let text = format::timeline_item(&self.context.timeline[best.item]);
            return self.finish(
                Route::TimelineItem {
                    position: best.item,
                },
                text,
                Some(explain),
            );
        }

        let text = format::fallback(&self.context.profile);
        self.finish(Route::Fallback, text, Some(explain))
    }

    fn finish(&self, route: Route, text: String, explain: Option<ScoreExplanation>) -> Answer {
        debug!(%route, "answered question");
        Answer {
            text,
            route,
            explain,
        }
    }
}

/// Score every entry; the item is the entry's position in its collection.
fn score_index(tokens: &[String], entries: &[IndexEntry]) -> Vec<Scored<usize>> {
    entries
        .iter()
        .map(|entry| Scored {
            item: entry.position,
            score: score_text(tokens, &entry.text),
        })
        .collect()
}
