//! Synset: one word sense in the English-anchored graph.

use serde::{Deserialize, Serialize};

/// Globally unique synset identifier (e.g. `"oewn-02084071-n"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynsetId(pub String);

impl SynsetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SynsetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SynsetId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SynsetId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// WordNet part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    #[serde(rename = "n")]
    Noun,
    #[serde(rename = "v")]
    Verb,
    #[serde(rename = "a")]
    Adjective,
    #[serde(rename = "s")]
    AdjectiveSatellite,
    #[serde(rename = "r")]
    Adverb,
    #[serde(rename = "x")]
    Other,
}

impl PartOfSpeech {
    /// Parse a WordNet tag. Unknown tags map to `Other`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "n" => PartOfSpeech::Noun,
            "v" => PartOfSpeech::Verb,
            "a" => PartOfSpeech::Adjective,
            "s" => PartOfSpeech::AdjectiveSatellite,
            "r" => PartOfSpeech::Adverb,
            _ => PartOfSpeech::Other,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "n",
            PartOfSpeech::Verb => "v",
            PartOfSpeech::Adjective => "a",
            PartOfSpeech::AdjectiveSatellite => "s",
            PartOfSpeech::Adverb => "r",
            PartOfSpeech::Other => "x",
        }
    }
}

impl std::fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// A synset as handed out by a [`Lexicon`](crate::Lexicon).
///
/// Relations are not stored here; they are enumerated through the
/// lexicon so backends can resolve targets lazily.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Synset {
    pub id: SynsetId,
    pub pos: PartOfSpeech,
    pub lemmas: Vec<String>,
    pub definition: String,
    #[serde(default)]
    pub examples: Vec<String>,
}

impl Synset {
    pub fn new(id: impl Into<SynsetId>, pos: PartOfSpeech) -> Self {
        Self {
            id: id.into(),
            pos,
            lemmas: Vec::new(),
            definition: String::new(),
            examples: Vec::new(),
        }
    }

    pub fn with_lemmas(mut self, lemmas: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.lemmas = lemmas.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = definition.into();
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    /// Lemmas joined with `", "`, in lexicon order.
    pub fn lemma_text(&self) -> String {
        self.lemmas.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_tags() {
        assert_eq!(PartOfSpeech::from_tag("n"), PartOfSpeech::Noun);
        assert_eq!(PartOfSpeech::from_tag(" s "), PartOfSpeech::AdjectiveSatellite);
        assert_eq!(PartOfSpeech::from_tag("p"), PartOfSpeech::Other);
        assert_eq!(PartOfSpeech::Verb.to_string(), "v");
    }

    #[test]
    fn test_lemma_text() {
        let s = Synset::new("oewn-02084071-n", PartOfSpeech::Noun)
            .with_lemmas(["dog", "domestic dog", "Canis familiaris"]);
        assert_eq!(s.lemma_text(), "dog, domestic dog, Canis familiaris");
        assert_eq!(s.id.to_string(), "oewn-02084071-n");
    }
}
