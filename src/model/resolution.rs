//! Outcome of resolving a user query to seed synsets.

use std::collections::BTreeSet;
use serde::{Deserialize, Serialize};
use super::SynsetId;

/// Either a non-empty candidate set or a failure message with suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum QueryResolution {
    Resolved {
        candidates: BTreeSet<SynsetId>,
    },
    Unresolved {
        message: String,
        suggestions: Vec<String>,
    },
}

impl QueryResolution {
    /// Build a `Resolved` value; an empty set is not a resolution.
    pub fn resolved(candidates: BTreeSet<SynsetId>) -> Option<Self> {
        if candidates.is_empty() {
            None
        } else {
            Some(QueryResolution::Resolved { candidates })
        }
    }

    pub fn unresolved(message: impl Into<String>, suggestions: Vec<String>) -> Self {
        QueryResolution::Unresolved {
            message: message.into(),
            suggestions,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, QueryResolution::Resolved { .. })
    }

    pub fn candidates(&self) -> Option<&BTreeSet<SynsetId>> {
        match self {
            QueryResolution::Resolved { candidates } => Some(candidates),
            QueryResolution::Unresolved { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            QueryResolution::Resolved { .. } => None,
            QueryResolution::Unresolved { message, .. } => Some(message),
        }
    }

    pub fn suggestions(&self) -> &[String] {
        match self {
            QueryResolution::Resolved { .. } => &[],
            QueryResolution::Unresolved { suggestions, .. } => suggestions,
        }
    }
}
