//! Vietnamese annotation attached to a synset.

use serde::{Deserialize, Serialize};
use super::SynsetId;

/// One raw row of the annotation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationRow {
    pub synset_id: SynsetId,
    pub lemma: String,
    pub definition: Option<String>,
    pub example: Option<String>,
    pub is_same: Option<bool>,
}

impl AnnotationRow {
    pub fn new(synset_id: impl Into<SynsetId>, lemma: impl Into<String>) -> Self {
        Self {
            synset_id: synset_id.into(),
            lemma: lemma.into(),
            definition: None,
            example: None,
            is_same: None,
        }
    }

    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = Some(definition.into());
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    pub fn with_is_same(mut self, is_same: bool) -> Self {
        self.is_same = Some(is_same);
        self
    }
}

/// Aggregated annotation for one synset at one dataset version.
///
/// All fields are `None` when the store holds no row for the synset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    /// Row lemmas joined with `", "`.
    pub lemmas: Option<String>,
    /// `"1. def | 2. def | "`, one entry per row.
    pub definitions: Option<String>,
    /// `"1. ex | "`, numbered over non-null examples only.
    pub examples: Option<String>,
    pub is_same: Option<bool>,
}

impl AnnotationRecord {
    pub fn is_empty(&self) -> bool {
        self.lemmas.is_none()
            && self.definitions.is_none()
            && self.examples.is_none()
            && self.is_same.is_none()
    }

    /// Confidence of the sense mapping: 1.0 for an exact match, 0.8 otherwise.
    pub fn confidence(&self) -> Option<f32> {
        self.is_same.map(|same| if same { 1.0 } else { 0.8 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence() {
        let mut rec = AnnotationRecord::default();
        assert!(rec.is_empty());
        assert_eq!(rec.confidence(), None);
        rec.is_same = Some(true);
        assert_eq!(rec.confidence(), Some(1.0));
        rec.is_same = Some(false);
        assert_eq!(rec.confidence(), Some(0.8));
        assert!(!rec.is_empty());
    }
}
