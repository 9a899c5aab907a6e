//! Merge engine for journal fragments
//!
//! Combines a newly submitted fragment into an existing day's entry without
//! losing anything an earlier submission contributed. All functions are pure
//! and deterministic.
//!
//! **Title:** order-preserving token union, existing tokens first. The
//! placeholder title [`SENTINEL_TITLE`] is dropped whenever real content
//! exists and kept only when it is the sole content.
//!
//! **Tags:** set union, incoming tags first.
//!
//! **Body:** incoming fragment prepended, so fragments accumulate newest-first.

use std::collections::HashSet;
use std::fmt;

/// Placeholder title meaning "no real title yet"
pub const SENTINEL_TITLE: &str = "journal";

/// Accepted title token separators: ASCII comma and full-width comma
pub const TITLE_SEPARATORS: [char; 2] = [',', '、'];

/// Separator used when writing a merged title
pub const TITLE_JOINER: &str = "、";

/// Outcome of a title merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergedTitle {
    /// Neither side had any tokens
    Empty,
    /// Only placeholder tokens were present
    Sentinel,
    /// Real tokens in merge order, placeholder removed
    Tokens(Vec<String>),
}

impl MergedTitle {
    pub fn into_title(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MergedTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergedTitle::Empty => Ok(()),
            MergedTitle::Sentinel => f.write_str(SENTINEL_TITLE),
            MergedTitle::Tokens(tokens) => {
                for (i, token) in tokens.iter().enumerate() {
                    if i > 0 {
                        f.write_str(TITLE_JOINER)?;
                    }
                    f.write_str(token)?;
                }
                Ok(())
            }
        }
    }
}

/// Split a title on either separator, dropping only empty tokens
///
/// Whitespace-only tokens are kept as-is.
fn title_tokens(title: &str) -> impl Iterator<Item = &str> {
    title
        .split(&TITLE_SEPARATORS[..])
        .filter(|token| !token.is_empty())
}

/// Classify the union of both titles' tokens
pub fn merge_title_tokens(existing: &str, incoming: &str) -> MergedTitle {
    let mut seen = HashSet::new();
    let union: Vec<&str> = title_tokens(existing)
        .chain(title_tokens(incoming))
        .filter(|token| seen.insert(*token))
        .collect();

    if union.is_empty() {
        return MergedTitle::Empty;
    }

    let tokens: Vec<String> = union
        .into_iter()
        .filter(|token| *token != SENTINEL_TITLE)
        .map(str::to_string)
        .collect();

    if tokens.is_empty() {
        MergedTitle::Sentinel
    } else {
        MergedTitle::Tokens(tokens)
    }
}

/// Merge two titles into one, joined with the full-width comma
pub fn merge_title(existing: &str, incoming: &str) -> String {
    merge_title_tokens(existing, incoming).into_title()
}

/// Union of tag lists, incoming tags first
///
/// Each group keeps its own order; later duplicates are dropped.
pub fn merge_tags<S: AsRef<str>>(existing: &[S], incoming: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    incoming
        .iter()
        .chain(existing.iter())
        .map(|s| s.as_ref())
        .filter(|tag| seen.insert(*tag))
        .map(str::to_string)
        .collect()
}

/// Prepend a body fragment to the stored body
pub fn merge_body(existing: &str, incoming: &str) -> String {
    if incoming.is_empty() {
        return existing.to_string();
    }
    format!("{}\n{}", incoming, existing)
}
