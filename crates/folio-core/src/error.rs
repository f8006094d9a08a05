use thiserror::Error;

/// Construction errors for [`AssistantContext`](crate::assistant::AssistantContext).
///
/// These indicate a caller bug (a collection was never supplied), not bad
/// user input. Empty collections are valid and never produce an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContextError {
    #[error("assistant context is missing the `{0}` collection")]
    MissingCollection(&'static str),
}
