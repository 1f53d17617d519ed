//! # Annotation Store Trait
//!
//! The contract between the browser core and the Vietnamese annotation
//! data. Two parallel datasets exist; every call names the one it reads.
//!
//! ## Implementations
//!
//! | Backend | Module | Feature | Description |
//! |---------|--------|---------|-------------|
//! | `MemoryStore` | `memory` | (default) | In-memory tables for testing/embedding |
//! | `SqliteStore` | `sqlite` | `sqlite` | One SQLite database per dataset version |

pub mod memory;
#[cfg(feature = "sqlite")]
pub mod sqlite;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::model::*;
use crate::Result;

pub use memory::MemoryStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

// ============================================================================
// Index rows
// ============================================================================

/// Row of the exact-search index: a Vietnamese word mapped to a synset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExactEntry {
    pub word: String,
    pub synset_id: SynsetId,
}

impl ExactEntry {
    pub fn new(word: impl Into<String>, synset_id: impl Into<SynsetId>) -> Self {
        Self { word: word.into(), synset_id: synset_id.into() }
    }
}

/// Row of the fuzzy-search index: the text compared against the query and
/// the label offered back as a suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuzzyEntry {
    pub word: String,
    pub label: String,
}

impl FuzzyEntry {
    pub fn new(word: impl Into<String>, label: impl Into<String>) -> Self {
        Self { word: word.into(), label: label.into() }
    }
}

// ============================================================================
// AnnotationStore Trait
// ============================================================================

/// Read-only, version-selected annotation data.
///
/// Missing rows are empty vectors. `Err` means the backing store could not
/// be opened or read, and must not be folded into "no data".
#[async_trait]
pub trait AnnotationStore: Send + Sync + 'static {
    /// The whole exact-search index of `version`.
    async fn exact_entries(&self, version: DatasetVersion) -> Result<Vec<ExactEntry>>;

    /// The whole fuzzy-search index of `version`.
    async fn fuzzy_entries(&self, version: DatasetVersion) -> Result<Vec<FuzzyEntry>>;

    /// Annotation rows for one synset, in store iteration order.
    async fn annotation_rows(
        &self,
        id: &SynsetId,
        version: DatasetVersion,
    ) -> Result<Vec<AnnotationRow>>;
}
