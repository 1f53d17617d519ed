//! Browser configuration.
//!
//! Nothing here is global: a `BrowserConfig` only supplies defaults to a
//! [`Browser`](crate::Browser), and every operation can be called with
//! explicit values instead.

use std::io::Read;
use serde::{Deserialize, Serialize};

use crate::model::{DatasetVersion, PartOfSpeech, RelationKind};
use crate::search::{DEFAULT_THRESHOLD, MAX_SUGGESTIONS};
use crate::{Error, Result};

/// Deepest expansion a browser will accept.
pub const MAX_DEPTH_LIMIT: usize = 10;

/// Defaults for resolution and expansion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Expansion depth, 1..=`MAX_DEPTH_LIMIT`.
    pub max_depth: usize,
    /// Fuzzy score a suggestion needs, 0..=100.
    pub fuzzy_threshold: f64,
    /// Suggestions reported on failure, 1..=`MAX_SUGGESTIONS`.
    pub max_suggestions: usize,
    /// Substring marking a query as an explicit synset id.
    pub id_marker: String,
    /// Part of speech for English lemma lookup.
    pub seed_pos: PartOfSpeech,
    /// Relation and version `Browser::search_default` expands with.
    pub relation: RelationKind,
    pub version: DatasetVersion,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            fuzzy_threshold: DEFAULT_THRESHOLD,
            max_suggestions: MAX_SUGGESTIONS,
            id_marker: "oewn-".to_string(),
            seed_pos: PartOfSpeech::Noun,
            relation: RelationKind::Hypernym,
            version: DatasetVersion::V1,
        }
    }
}

impl BrowserConfig {
    /// Parse and validate. Missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        check_depth(self.max_depth)?;
        if !(0.0..=100.0).contains(&self.fuzzy_threshold) {
            return Err(Error::InvalidConfig(format!(
                "fuzzy_threshold {} outside 0..=100",
                self.fuzzy_threshold
            )));
        }
        if !(1..=MAX_SUGGESTIONS).contains(&self.max_suggestions) {
            return Err(Error::InvalidConfig(format!(
                "max_suggestions {} outside 1..={MAX_SUGGESTIONS}",
                self.max_suggestions
            )));
        }
        if self.id_marker.trim().is_empty() {
            return Err(Error::InvalidConfig("id_marker is empty".into()));
        }
        Ok(())
    }
}

pub(crate) fn check_depth(max_depth: usize) -> Result<()> {
    if (1..=MAX_DEPTH_LIMIT).contains(&max_depth) {
        Ok(())
    } else {
        Err(Error::InvalidConfig(format!(
            "max_depth {max_depth} outside 1..={MAX_DEPTH_LIMIT}"
        )))
    }
}
