//! Exact match of a Vietnamese query against the exact-search index.

use std::collections::BTreeSet;

use crate::model::{DatasetVersion, SynsetId};
use crate::store::AnnotationStore;
use crate::Result;
use super::normalize;

/// Synset ids of every index row whose normalized word equals the
/// normalized query. No match is an empty set.
pub async fn exact_match<S: AnnotationStore + ?Sized>(
    store: &S,
    query: &str,
    version: DatasetVersion,
) -> Result<BTreeSet<SynsetId>> {
    let query = normalize(query);
    let entries = store.exact_entries(version).await?;

    let hits: BTreeSet<SynsetId> = entries
        .into_iter()
        .filter(|e| normalize(&e.word) == query)
        .map(|e| e.synset_id)
        .collect();

    tracing::debug!(query = %query, %version, hits = hits.len(), "exact match");
    Ok(hits)
}
