//! Semantic relation kinds walked by the tree builder.

use serde::{Deserialize, Serialize};
use crate::Error;

/// Directed, labeled edge type between synsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    /// is-a parent
    Hypernym,
    /// is-a child
    Hyponym,
    /// part-of
    Meronym,
    /// has-part
    Holonym,
}

impl RelationKind {
    pub const ALL: [RelationKind; 4] = [
        RelationKind::Hypernym,
        RelationKind::Hyponym,
        RelationKind::Meronym,
        RelationKind::Holonym,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RelationKind::Hypernym => "hypernym",
            RelationKind::Hyponym => "hyponym",
            RelationKind::Meronym => "meronym",
            RelationKind::Holonym => "holonym",
        }
    }

    /// The kind that points back along the same edge.
    pub fn inverse(self) -> Self {
        match self {
            RelationKind::Hypernym => RelationKind::Hyponym,
            RelationKind::Hyponym => RelationKind::Hypernym,
            RelationKind::Meronym => RelationKind::Holonym,
            RelationKind::Holonym => RelationKind::Meronym,
        }
    }
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for RelationKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        RelationKind::ALL
            .into_iter()
            .find(|k| k.name() == wanted)
            .ok_or_else(|| Error::InvalidRelation(s.to_string()))
    }
}

/// Selects one of the two parallel annotation datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetVersion {
    /// Translations without an evaluation step.
    V1,
    /// Translations rated on a four-level scale; `is_same` is curated.
    V2,
}

impl DatasetVersion {
    pub fn name(self) -> &'static str {
        match self {
            DatasetVersion::V1 => "v1",
            DatasetVersion::V2 => "v2",
        }
    }
}

impl std::fmt::Display for DatasetVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for DatasetVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "v1" | "1" => Ok(DatasetVersion::V1),
            "v2" | "2" => Ok(DatasetVersion::V2),
            _ => Err(Error::InvalidVersion(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_relation() {
        assert_eq!("hyponym".parse::<RelationKind>().unwrap(), RelationKind::Hyponym);
        assert_eq!(" Holonym ".parse::<RelationKind>().unwrap(), RelationKind::Holonym);
        assert!(matches!(
            "antonym".parse::<RelationKind>(),
            Err(Error::InvalidRelation(s)) if s == "antonym"
        ));
    }

    #[test]
    fn test_inverse_is_involution() {
        for kind in RelationKind::ALL {
            assert_eq!(kind.inverse().inverse(), kind);
            assert_ne!(kind.inverse(), kind);
        }
    }

    #[test]
    fn test_parse_version() {
        assert_eq!("v1".parse::<DatasetVersion>().unwrap(), DatasetVersion::V1);
        assert_eq!("V2".parse::<DatasetVersion>().unwrap(), DatasetVersion::V2);
        assert!("v3".parse::<DatasetVersion>().is_err());
        assert_eq!(DatasetVersion::V2.to_string(), "v2");
    }
}
