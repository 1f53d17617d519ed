//! In-memory lexicon.
//!
//! This is the reference implementation of `Lexicon`.
//! It uses hashbrown maps protected by RwLock.
//!
//! ## Limitations
//!
//! - **Population only through `insert`/`relate`/`from_json`**: the browser
//!   core never writes; mutation exists to build fixtures and snapshots.
//! - **Lemma index is exact after folding**: lemmas are lower-cased and `_`
//!   is read as a space. No morphological lookup.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;
use async_trait::async_trait;
use hashbrown::HashMap;
use parking_lot::RwLock;
use serde::Deserialize;
use smallvec::SmallVec;

use crate::model::*;
use crate::{Error, Result};
use super::Lexicon;

/// Most synsets carry a handful of edges per relation kind.
type Targets = SmallVec<[SynsetId; 4]>;

// ============================================================================
// MemoryLexicon
// ============================================================================

/// In-memory synset graph.
#[derive(Clone, Default)]
pub struct MemoryLexicon {
    inner: Arc<LexiconInner>,
}

#[derive(Default)]
struct LexiconInner {
    synsets: RwLock<HashMap<SynsetId, Synset>>,
    /// folded lemma → synset ids, in insertion order
    lemma_index: RwLock<HashMap<String, Vec<SynsetId>>>,
    /// (source, kind) → targets, in insertion order
    relations: RwLock<HashMap<(SynsetId, RelationKind), Targets>>,
}

/// Fold a lemma the way the index stores it.
fn fold_lemma(lemma: &str) -> String {
    lemma.trim().to_lowercase().replace('_', " ")
}

impl MemoryLexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a synset and index its lemmas.
    pub fn insert(&self, synset: Synset) {
        {
            let mut idx = self.inner.lemma_index.write();
            for lemma in &synset.lemmas {
                let ids = idx.entry(fold_lemma(lemma)).or_default();
                if !ids.contains(&synset.id) {
                    ids.push(synset.id.clone());
                }
            }
        }
        self.inner.synsets.write().insert(synset.id.clone(), synset);
    }

    /// Add a `kind` edge from `src` to `dst`. Both synsets must exist.
    pub fn relate(&self, src: &SynsetId, kind: RelationKind, dst: &SynsetId) -> Result<()> {
        {
            let synsets = self.inner.synsets.read();
            for id in [src, dst] {
                if !synsets.contains_key(id) {
                    return Err(Error::NotFound(format!("Synset {id}")));
                }
            }
        }
        self.inner
            .relations
            .write()
            .entry((src.clone(), kind))
            .or_default()
            .push(dst.clone());
        Ok(())
    }

    /// Load a snapshot of the form
    /// `{"synsets": [{"id", "pos", "lemmas", "definition", "examples", "relations": [["hyponym", [ids]]]}]}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_reader(reader)?;
        Self::from_snapshot(snapshot)
    }

    /// Load a snapshot file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    fn from_snapshot(snapshot: Snapshot) -> Result<Self> {
        let lexicon = Self::new();
        let mut edges = Vec::new();
        for entry in snapshot.synsets {
            for (kind, targets) in entry.relations {
                edges.push((entry.synset.id.clone(), kind, targets));
            }
            lexicon.insert(entry.synset);
        }
        // Targets may be declared after their sources.
        for (src, kind, targets) in edges {
            for dst in &targets {
                lexicon.relate(&src, kind, dst)?;
            }
        }
        tracing::debug!(synsets = lexicon.len(), "lexicon snapshot loaded");
        Ok(lexicon)
    }

    pub fn len(&self) -> usize {
        self.inner.synsets.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Deserialize)]
struct Snapshot {
    synsets: Vec<SnapshotSynset>,
}

#[derive(Deserialize)]
struct SnapshotSynset {
    #[serde(flatten)]
    synset: Synset,
    /// Relation kinds in document order; target order is preserved.
    #[serde(default)]
    relations: Vec<(RelationKind, Vec<SynsetId>)>,
}

// ============================================================================
// Lexicon impl
// ============================================================================

#[async_trait]
impl Lexicon for MemoryLexicon {
    async fn synset(&self, id: &SynsetId) -> Result<Option<Synset>> {
        Ok(self.inner.synsets.read().get(id).cloned())
    }

    async fn synsets(&self, lemma: &str, pos: Option<PartOfSpeech>) -> Result<Vec<Synset>> {
        let idx = self.inner.lemma_index.read();
        let synsets = self.inner.synsets.read();

        let ids = idx.get(&fold_lemma(lemma)).cloned().unwrap_or_default();
        Ok(ids
            .iter()
            .filter_map(|id| synsets.get(id))
            .filter(|s| pos.is_none_or(|p| s.pos == p))
            .cloned()
            .collect())
    }

    async fn related(&self, synset: &Synset, kind: RelationKind) -> Result<Vec<Synset>> {
        let rels = self.inner.relations.read();
        let synsets = self.inner.synsets.read();

        let Some(targets) = rels.get(&(synset.id.clone(), kind)) else {
            return Ok(Vec::new());
        };
        Ok(targets.iter().filter_map(|id| synsets.get(id).cloned()).collect())
    }

    async fn synset_count(&self) -> Result<u64> {
        Ok(self.inner.synsets.read().len() as u64)
    }
}

// ============================================================================
// Tests
// ============================================================================
