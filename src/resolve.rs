//! Seed resolution: user query → candidate synset ids.
//!
//! ```text
//! query ─┬─ contains id marker ──► lexicon.synset(id) ──► Resolved{id} | Unresolved
//!        └─ free text ──► exact Vietnamese ∪ English noun lemmas
//!                           ├─ non-empty ──► Resolved{union}
//!                           └─ empty ──► fuzzy suggestions ──► Unresolved
//! ```

use std::collections::BTreeSet;

use crate::config::BrowserConfig;
use crate::lexicon::Lexicon;
use crate::model::{DatasetVersion, QueryResolution, SynsetId};
use crate::search::{exact_match, suggest};
use crate::store::AnnotationStore;
use crate::Result;

/// Resolve `query` against the lexicon and the `version` indexes.
///
/// "Not found" and "no match" are `Unresolved` values. Only failures of
/// the lexicon or the store surface as `Err`.
pub async fn resolve<L, S>(
    lexicon: &L,
    store: &S,
    query: &str,
    version: DatasetVersion,
    config: &BrowserConfig,
) -> Result<QueryResolution>
where
    L: Lexicon + ?Sized,
    S: AnnotationStore + ?Sized,
{
    let trimmed = query.trim();

    if trimmed.contains(config.id_marker.as_str()) {
        let id = SynsetId::new(trimmed);
        return Ok(match lexicon.synset(&id).await? {
            Some(_) => {
                tracing::debug!(synset = %id, "resolved explicit id");
                QueryResolution::Resolved { candidates: BTreeSet::from([id]) }
            }
            None => {
                tracing::debug!(synset = %id, "explicit id not in lexicon");
                QueryResolution::unresolved(format!("identifier {id} does not exist"), Vec::new())
            }
        });
    }

    let mut candidates = BTreeSet::new();

    for id in exact_match(store, query, version).await? {
        match lexicon.synset(&id).await? {
            Some(synset) => {
                candidates.insert(synset.id);
            }
            None => tracing::warn!(synset = %id, %version, "exact-search hit missing from lexicon"),
        }
    }
    let vietnamese = candidates.len();

    for synset in lexicon.synsets(trimmed, Some(config.seed_pos)).await? {
        candidates.insert(synset.id);
    }

    tracing::debug!(
        query = %trimmed,
        %version,
        vietnamese,
        total = candidates.len(),
        "seed candidates"
    );

    if let Some(resolved) = QueryResolution::resolved(candidates) {
        return Ok(resolved);
    }

    let mut suggestions = suggest(store, query, version, config.fuzzy_threshold).await?;
    suggestions.truncate(config.max_suggestions);
    let message = format!("try searching for: {}", suggestions.join(" | "));
    Ok(QueryResolution::unresolved(message, suggestions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::MemoryLexicon;
    use crate::model::{PartOfSpeech, Synset};
    use crate::store::{ExactEntry, FuzzyEntry, MemoryStore};
    use pretty_assertions::assert_eq;

    const DOG: &str = "oewn-02086723-n";

    fn fixtures() -> (MemoryLexicon, MemoryStore) {
        let lex = MemoryLexicon::new();
        lex.insert(Synset::new(DOG, PartOfSpeech::Noun).with_lemmas(["dog", "domestic_dog"]));
        lex.insert(Synset::new("oewn-10133978-n", PartOfSpeech::Noun).with_lemmas(["dog", "frump"]));
        lex.insert(Synset::new("oewn-02005890-v", PartOfSpeech::Verb).with_lemmas(["dog"]));

        let store = MemoryStore::new();
        store.add_exact(DatasetVersion::V1, ExactEntry::new("con chó", DOG));
        store.add_exact(DatasetVersion::V1, ExactEntry::new("dog", DOG));
        store.add_exact(DatasetVersion::V1, ExactEntry::new("chó sói", "oewn-99999999-n"));
        store.add_fuzzy(DatasetVersion::V1, FuzzyEntry::new("con chó", "con chó"));
        store.add_fuzzy(DatasetVersion::V1, FuzzyEntry::new("con cho", "con cho"));
        (lex, store)
    }

    fn ids(res: &QueryResolution) -> Vec<&str> {
        res.candidates().unwrap().iter().map(|id| id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_explicit_id() {
        let (lex, store) = fixtures();
        let config = BrowserConfig::default();

        let res = resolve(&lex, &store, &format!(" {DOG} "), DatasetVersion::V1, &config).await.unwrap();
        assert_eq!(ids(&res), vec![DOG]);

        let res = resolve(&lex, &store, "oewn-00000000-n", DatasetVersion::V1, &config).await.unwrap();
        assert_eq!(res.message(), Some("identifier oewn-00000000-n does not exist"));
        assert!(res.suggestions().is_empty());
    }

    #[tokio::test]
    async fn test_union_is_deduplicated() {
        let (lex, store) = fixtures();
        // "dog" hits the exact index and two English noun senses; DOG overlaps.
        let res = resolve(&lex, &store, "Dog", DatasetVersion::V1, &BrowserConfig::default())
            .await
            .unwrap();
        assert_eq!(ids(&res), vec![DOG, "oewn-10133978-n"]);
    }

    #[tokio::test]
    async fn test_vietnamese_exact() {
        let (lex, store) = fixtures();
        let res = resolve(&lex, &store, "CON CHÓ", DatasetVersion::V1, &BrowserConfig::default())
            .await
            .unwrap();
        assert_eq!(ids(&res), vec![DOG]);
    }

    #[tokio::test]
    async fn test_exact_hit_missing_from_lexicon_is_skipped() {
        let (lex, store) = fixtures();
        let res = resolve(&lex, &store, "chó sói", DatasetVersion::V1, &BrowserConfig::default())
            .await
            .unwrap();
        assert!(!res.is_resolved());
    }

    #[tokio::test]
    async fn test_fuzzy_fallback() {
        let (lex, store) = fixtures();
        let res = resolve(&lex, &store, "con chó!", DatasetVersion::V1, &BrowserConfig::default())
            .await
            .unwrap();
        assert_eq!(res.suggestions(), ["con chó".to_string(), "con cho".to_string()]);
        assert_eq!(res.message(), Some("try searching for: con chó | con cho"));
    }

    #[tokio::test]
    async fn test_no_suggestions() {
        let (lex, store) = fixtures();
        let res = resolve(&lex, &store, "xe đạp", DatasetVersion::V1, &BrowserConfig::default())
            .await
            .unwrap();
        assert!(res.suggestions().is_empty());
        assert_eq!(res.message(), Some("try searching for: "));
    }

    #[tokio::test]
    async fn test_max_suggestions_caps_report() {
        let (lex, store) = fixtures();
        let config = BrowserConfig { max_suggestions: 1, fuzzy_threshold: 50.0, ..Default::default() };
        let res = resolve(&lex, &store, "con ch", DatasetVersion::V1, &config).await.unwrap();
        assert_eq!(res.suggestions().len(), 1);
    }
}
