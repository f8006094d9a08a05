//! Keyword tokenizer, term-overlap scorer, and top-score selection.
//!
//! # Scoring Algorithm
//!
//! 1. Lowercase the query and split it on whitespace runs.
//! 2. Strip every character outside `a-z`, `0-9`, `-` from each piece.
//! 3. Drop pieces of two characters or fewer.
//! 4. An entity's score is the number of tokens (repeats included) that
//!    occur as substrings of its indexed text.
//! 5. The winner is the highest score, earliest entity first on ties, and
//!    only if that score is above zero.
//!
//! There is no length normalization and no term weighting, so entities
//! with longer indexed text are favored.

/// Minimum token length kept by [`tokenize`] (exclusive).
const MIN_TOKEN_LEN: usize = 2;

/// An entity paired with its score for one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scored<T> {
    pub item: T,
    pub score: usize,
}

/// Split a question into normalized match tokens.
///
/// Order is preserved and duplicates are kept: a word repeated in the
/// question is counted once per occurrence by [`score_text`].
///
/// ```rust
/// use folio_core::search::tokenize;
///
/// assert_eq!(tokenize("What is Mesquite MoCap?"), vec!["what", "mesquite", "mocap"]);
/// assert!(tokenize("   ").is_empty());
/// ```
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(|piece| {
            piece
                .chars()
                .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
                .collect::<String>()
        })
        .filter(|token| token.len() > MIN_TOKEN_LEN)
        .collect()
}

/// Count the tokens that appear as substrings of `text`.
///
/// `text` is expected to be lowercase already (see [`crate::index`]).
pub fn score_text(tokens: &[String], text: &str) -> usize {
    tokens
        .iter()
        .filter(|token| text.contains(token.as_str()))
        .count()
}

/// Return the highest-scoring entry, or `None` if every score is zero.
///
/// Ties resolve to the earliest entry, matching a stable descending sort.
pub fn top_score<T: Copy>(items: &[Scored<T>]) -> Option<Scored<T>> {
    let mut best: Option<Scored<T>> = None;
    for candidate in items {
        match best {
            Some(current) if candidate.score <= current.score => {}
            _ => best = Some(*candidate),
        }
    }
    best.filter(|b| b.score > 0)
}
