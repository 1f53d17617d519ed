//! In-memory annotation store.
//!
//! Reference implementation of `AnnotationStore`: one set of tables per
//! dataset version, rows kept in insertion order.

use std::sync::Arc;
use async_trait::async_trait;
use hashbrown::HashMap;
use parking_lot::RwLock;

use crate::model::*;
use crate::Result;
use super::{AnnotationStore, ExactEntry, FuzzyEntry};

/// In-memory annotation tables.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<HashMap<DatasetVersion, Tables>>>,
}

#[derive(Default)]
struct Tables {
    exact: Vec<ExactEntry>,
    fuzzy: Vec<FuzzyEntry>,
    /// synset id → rows
    data: HashMap<SynsetId, Vec<AnnotationRow>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_exact(&self, version: DatasetVersion, entry: ExactEntry) {
        self.inner.write().entry(version).or_default().exact.push(entry);
    }

    pub fn add_fuzzy(&self, version: DatasetVersion, entry: FuzzyEntry) {
        self.inner.write().entry(version).or_default().fuzzy.push(entry);
    }

    pub fn add_row(&self, version: DatasetVersion, row: AnnotationRow) {
        self.inner
            .write()
            .entry(version)
            .or_default()
            .data
            .entry(row.synset_id.clone())
            .or_default()
            .push(row);
    }
}

#[async_trait]
impl AnnotationStore for MemoryStore {
    async fn exact_entries(&self, version: DatasetVersion) -> Result<Vec<ExactEntry>> {
        Ok(self.inner.read().get(&version).map(|t| t.exact.clone()).unwrap_or_default())
    }

    async fn fuzzy_entries(&self, version: DatasetVersion) -> Result<Vec<FuzzyEntry>> {
        Ok(self.inner.read().get(&version).map(|t| t.fuzzy.clone()).unwrap_or_default())
    }

    async fn annotation_rows(
        &self,
        id: &SynsetId,
        version: DatasetVersion,
    ) -> Result<Vec<AnnotationRow>> {
        Ok(self
            .inner
            .read()
            .get(&version)
            .and_then(|t| t.data.get(id).cloned())
            .unwrap_or_default())
    }
}
