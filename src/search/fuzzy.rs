//! Fuzzy suggestions from the fuzzy-search index.
//!
//! Similarity is `rapidfuzz`'s normalized indel ratio, counted in chars and
//! scaled to 0..=100. It is symmetric and `ratio(a, a) == 100` for every
//! `a`, including the empty string.

use std::cmp::Ordering;

use crate::model::DatasetVersion;
use crate::store::{AnnotationStore, FuzzyEntry};
use crate::Result;
use super::normalize;

/// Minimum score a word needs to be suggested.
pub const DEFAULT_THRESHOLD: f64 = 80.0;

/// Upper bound on returned suggestions.
pub const MAX_SUGGESTIONS: usize = 5;

/// A suggested label and its similarity to the query.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub label: String,
    pub score: f64,
}

/// Similarity ratio between two strings, 0.0 to 100.0.
pub fn ratio(a: &str, b: &str) -> f64 {
    rapidfuzz::fuzz::ratio(a.chars(), b.chars()) * 100.0
}

/// Score every entry against the query and keep the best `MAX_SUGGESTIONS`.
///
/// Duplicate (label, score) pairs collapse to one. Ordering is by
/// descending score, then by label.
pub fn rank(query: &str, entries: &[FuzzyEntry], threshold: f64) -> Vec<Suggestion> {
    let query = normalize(query);

    let mut scored: Vec<Suggestion> = entries
        .iter()
        .filter_map(|e| {
            let score = ratio(&query, &normalize(&e.word));
            (score >= threshold).then(|| Suggestion { label: e.label.clone(), score })
        })
        .collect();

    scored.sort_by(|x, y| match y.score.total_cmp(&x.score) {
        Ordering::Equal => x.label.cmp(&y.label),
        other => other,
    });
    scored.dedup();
    scored.truncate(MAX_SUGGESTIONS);
    scored
}

/// Up to `MAX_SUGGESTIONS` labels similar to `query`, best first.
pub async fn suggest<S: AnnotationStore + ?Sized>(
    store: &S,
    query: &str,
    version: DatasetVersion,
    threshold: f64,
) -> Result<Vec<String>> {
    let entries = store.fuzzy_entries(version).await?;
    let ranked = rank(query, &entries, threshold);

    tracing::debug!(
        query = %query,
        %version,
        indexed = entries.len(),
        kept = ranked.len(),
        "fuzzy suggestions"
    );
    Ok(ranked.into_iter().map(|s| s.label).collect())
}
