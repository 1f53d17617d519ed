//! Annotation lookup: aggregate a synset's Vietnamese rows into one record.

use crate::model::{AnnotationRecord, AnnotationRow, DatasetVersion, SynsetId};
use crate::store::AnnotationStore;
use crate::Result;

/// Fetch and aggregate the annotation of `id` at `version`.
///
/// No rows is an all-`None` record, not an error. Every call reads the
/// store again.
pub async fn lookup<S: AnnotationStore + ?Sized>(
    store: &S,
    id: &SynsetId,
    version: DatasetVersion,
) -> Result<AnnotationRecord> {
    let rows = store.annotation_rows(id, version).await?;
    tracing::trace!(synset = %id, %version, rows = rows.len(), "annotation lookup");
    Ok(aggregate(&rows))
}

/// Fold rows, in store order, into the display record.
///
/// Definitions are numbered per row, so a null definition still takes a
/// number. Examples are numbered over the non-null ones only.
pub fn aggregate(rows: &[AnnotationRow]) -> AnnotationRecord {
    if rows.is_empty() {
        return AnnotationRecord::default();
    }

    let lemmas = rows.iter().map(|r| r.lemma.as_str()).collect::<Vec<_>>().join(", ");

    let definitions: String = rows
        .iter()
        .enumerate()
        .map(|(i, row)| format!("{}. {} | ", i + 1, row.definition.as_deref().unwrap_or_default()))
        .collect();

    let examples: String = rows
        .iter()
        .filter_map(|r| r.example.as_deref())
        .enumerate()
        .map(|(n, example)| format!("{}. {example} | ", n + 1))
        .collect();

    let mut flags = rows.iter().filter_map(|r| r.is_same).peekable();
    let is_same = flags.peek().is_some().then(|| flags.all(|same| same));

    AnnotationRecord {
        lemmas: Some(lemmas),
        definitions: Some(definitions),
        examples: Some(examples),
        is_same,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_two_rows_one_null_example() {
        let rows = vec![
            AnnotationRow::new("s", "chó").with_definition("A"),
            AnnotationRow::new("s", "cẩu").with_definition("B").with_example("ex1"),
        ];
        let rec = aggregate(&rows);
        assert_eq!(rec.lemmas.as_deref(), Some("chó, cẩu"));
        assert_eq!(rec.definitions.as_deref(), Some("1. A | 2. B | "));
        assert_eq!(rec.examples.as_deref(), Some("1. ex1 | "));
        assert_eq!(rec.is_same, None);
    }

    #[test]
    fn test_null_definition_keeps_its_number() {
        let rows = vec![
            AnnotationRow::new("s", "a"),
            AnnotationRow::new("s", "b").with_definition("B"),
        ];
        let rec = aggregate(&rows);
        assert_eq!(rec.definitions.as_deref(), Some("1.  | 2. B | "));
        assert_eq!(rec.examples.as_deref(), Some(""));
    }

    #[test]
    fn test_example_counter_skips_nulls() {
        let rows = vec![
            AnnotationRow::new("s", "a").with_example("x"),
            AnnotationRow::new("s", "b"),
            AnnotationRow::new("s", "c").with_example("y"),
        ];
        assert_eq!(aggregate(&rows).examples.as_deref(), Some("1. x | 2. y | "));
    }

    #[test]
    fn test_lemmas_not_deduplicated() {
        let rows = vec![AnnotationRow::new("s", "chó"), AnnotationRow::new("s", "chó")];
        assert_eq!(aggregate(&rows).lemmas.as_deref(), Some("chó, chó"));
    }

    #[test]
    fn test_numbering_runs_past_nine() {
        let rows: Vec<AnnotationRow> = (1..=11)
            .map(|i| AnnotationRow::new("s", format!("w{i}")).with_definition(format!("d{i}")))
            .collect();
        let rec = aggregate(&rows);
        let definitions = rec.definitions.unwrap();
        assert!(definitions.starts_with("1. d1 | 2. d2 | "));
        assert!(definitions.ends_with("10. d10 | 11. d11 | "));
        assert_eq!(rec.examples.as_deref(), Some(""));
    }

    #[test]
    fn test_is_same_requires_every_flag() {
        let all = vec![
            AnnotationRow::new("s", "a").with_is_same(true),
            AnnotationRow::new("s", "b"),
        ];
        assert_eq!(aggregate(&all).is_same, Some(true));

        let mixed = vec![
            AnnotationRow::new("s", "a").with_is_same(true),
            AnnotationRow::new("s", "b").with_is_same(false),
        ];
        assert_eq!(aggregate(&mixed).is_same, Some(false));
    }

    #[tokio::test]
    async fn test_lookup_missing_is_empty_record() {
        let store = MemoryStore::new();
        let rec = lookup(&store, &"oewn-1-n".into(), DatasetVersion::V1).await.unwrap();
        assert!(rec.is_empty());
        assert_eq!(rec, AnnotationRecord::default());
    }

    #[tokio::test]
    async fn test_lookup_is_idempotent() {
        let store = MemoryStore::new();
        store.add_row(DatasetVersion::V2, AnnotationRow::new("s", "mèo").with_definition("D"));
        let first = lookup(&store, &"s".into(), DatasetVersion::V2).await.unwrap();
        let second = lookup(&store, &"s".into(), DatasetVersion::V2).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.definitions.as_deref(), Some("1. D | "));
    }
}
