//! # Lexicon Trait
//!
//! The contract between the browser core and the English synset graph.
//! The core only reads: identifier lookup, lemma lookup and outgoing
//! relation enumeration.
//!
//! ## Implementations
//!
//! | Backend | Module | Description |
//! |---------|--------|-------------|
//! | `MemoryLexicon` | `memory` | In-memory graph, loadable from a JSON snapshot |

pub mod memory;

use async_trait::async_trait;
use crate::model::*;
use crate::Result;

pub use memory::MemoryLexicon;

/// Read-only synset graph provider.
///
/// `Ok(None)` / empty vectors mean "no such data" and are normal values.
/// `Err` is reserved for a provider that cannot be reached or read.
#[async_trait]
pub trait Lexicon: Send + Sync + 'static {
    /// Look up one synset by identifier.
    async fn synset(&self, id: &SynsetId) -> Result<Option<Synset>>;

    /// All synsets carrying `lemma`, optionally restricted to one part of speech.
    async fn synsets(&self, lemma: &str, pos: Option<PartOfSpeech>) -> Result<Vec<Synset>>;

    /// Targets of the outgoing `kind` relations of `synset`, in the
    /// provider's native order.
    async fn related(&self, synset: &Synset, kind: RelationKind) -> Result<Vec<Synset>>;

    /// Total number of synsets.
    async fn synset_count(&self) -> Result<u64>;
}
