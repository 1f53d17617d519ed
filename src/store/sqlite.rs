//! SQLite annotation store.
//!
//! Each dataset version lives in its own database file holding three
//! tables:
//!
//! ```text
//! VIETNET_EXACT_SEARCH (tieng, synset_id)
//! VIETNET_FUZZ_SEARCH  (tieng, word)
//! VIETNET_DATA         (synset_id, viet_word, viet_definition, viet_example, is_same)
//! ```
//!
//! Databases are opened read-only. Any connection or query failure is
//! reported as `Error::StoreUnavailable`.

use std::path::Path;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;

use crate::model::*;
use crate::{Error, Result};
use super::{AnnotationStore, ExactEntry, FuzzyEntry};

const MAX_CONNECTIONS: u32 = 4;

/// Annotation store backed by one SQLite pool per dataset version.
#[derive(Clone)]
pub struct SqliteStore {
    v1: SqlitePool,
    v2: SqlitePool,
}

impl SqliteStore {
    /// Open both dataset databases read-only.
    pub async fn open(v1_path: impl AsRef<Path>, v2_path: impl AsRef<Path>) -> Result<Self> {
        let v1 = connect(v1_path.as_ref()).await?;
        let v2 = connect(v2_path.as_ref()).await?;
        Ok(Self { v1, v2 })
    }

    /// Wrap already-open pools.
    pub fn from_pools(v1: SqlitePool, v2: SqlitePool) -> Self {
        Self { v1, v2 }
    }

    fn pool(&self, version: DatasetVersion) -> &SqlitePool {
        match version {
            DatasetVersion::V1 => &self.v1,
            DatasetVersion::V2 => &self.v2,
        }
    }
}

async fn connect(path: &Path) -> Result<SqlitePool> {
    let opts = SqliteConnectOptions::new()
        .filename(path)
        .read_only(true)
        .create_if_missing(false);
    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(opts)
        .await
        .map_err(|e| Error::StoreUnavailable(format!("{}: {e}", path.display())))?;
    tracing::debug!(path = %path.display(), "annotation database opened");
    Ok(pool)
}

fn unavailable(version: DatasetVersion, table: &str, e: sqlx::Error) -> Error {
    Error::StoreUnavailable(format!("{table} ({version}): {e}"))
}

/// `true`/`yes`/`1` (any case, any numeric spelling of one) mean an exact match.
fn parse_flag(raw: &str) -> bool {
    let raw = raw.trim().to_lowercase();
    matches!(raw.as_str(), "true" | "yes") || raw.parse::<f64>().is_ok_and(|v| v == 1.0)
}

#[async_trait]
impl AnnotationStore for SqliteStore {
    async fn exact_entries(&self, version: DatasetVersion) -> Result<Vec<ExactEntry>> {
        let rows = sqlx::query("SELECT tieng, synset_id FROM VIETNET_EXACT_SEARCH")
            .fetch_all(self.pool(version))
            .await
            .map_err(|e| unavailable(version, "VIETNET_EXACT_SEARCH", e))?;

        let mut entries = Vec::with_capacity(rows.len());
        for row in rows {
            let word: Option<String> = row.try_get("tieng")
                .map_err(|e| unavailable(version, "VIETNET_EXACT_SEARCH", e))?;
            let id: Option<String> = row.try_get("synset_id")
                .map_err(|e| unavailable(version, "VIETNET_EXACT_SEARCH", e))?;
            if let (Some(word), Some(id)) = (word, id) {
                entries.push(ExactEntry::new(word, id));
            }
        }
        Ok(entries)
    }

    async fn fuzzy_entries(&self, version: DatasetVersion) -> Result<Vec<FuzzyEntry>> {
        let rows = sqlx::query("SELECT tieng, word FROM VIETNET_FUZZ_SEARCH")
            .fetch_all(self.pool(version))
            .await
            .map_err(|e| unavailable(version, "VIETNET_FUZZ_SEARCH", e))?;

        let mut entries = Vec::with_capacity(rows.len());
        for row in rows {
            let word: Option<String> = row.try_get("tieng")
                .map_err(|e| unavailable(version, "VIETNET_FUZZ_SEARCH", e))?;
            let label: Option<String> = row.try_get("word")
                .map_err(|e| unavailable(version, "VIETNET_FUZZ_SEARCH", e))?;
            if let (Some(word), Some(label)) = (word, label) {
                entries.push(FuzzyEntry::new(word, label));
            }
        }
        Ok(entries)
    }

    async fn annotation_rows(
        &self,
        id: &SynsetId,
        version: DatasetVersion,
    ) -> Result<Vec<AnnotationRow>> {
        let rows = sqlx::query(
            "SELECT viet_word, viet_definition, viet_example, CAST(is_same AS TEXT) AS is_same \
             FROM VIETNET_DATA WHERE synset_id = ? ORDER BY rowid",
        )
        .bind(id.as_str())
        .fetch_all(self.pool(version))
        .await
        .map_err(|e| unavailable(version, "VIETNET_DATA", e))?;

        rows.into_iter()
            .map(|row| -> std::result::Result<AnnotationRow, sqlx::Error> {
                let lemma: Option<String> = row.try_get("viet_word")?;
                let is_same: Option<String> = row.try_get("is_same")?;
                Ok(AnnotationRow {
                    synset_id: id.clone(),
                    lemma: lemma.unwrap_or_default(),
                    definition: row.try_get("viet_definition")?,
                    example: row.try_get("viet_example")?,
                    is_same: is_same.as_deref().map(parse_flag),
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| unavailable(version, "VIETNET_DATA", e))
    }
}
