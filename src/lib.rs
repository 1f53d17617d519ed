//! # vietnet: Bilingual WordNet Browser Core
//!
//! Resolves a user's query to synsets of an English-anchored WordNet and
//! expands each one into a depth-bounded tree along a single semantic
//! relation, annotating every node with its Vietnamese translation.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `Lexicon` and `AnnotationStore` are the contracts
//!    between the core and its data
//! 2. **Clean DTOs**: `Synset`, `TreeNode`, `Forest` cross all boundaries
//! 3. **No hidden state**: dataset version and depth are explicit arguments;
//!    `BrowserConfig` only supplies defaults
//! 4. **No data is not an error**: missing annotations, empty relations and
//!    failed matches are ordinary values
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vietnet::{Browser, DatasetVersion, RelationKind, SearchOutcome};
//!
//! # async fn example() -> vietnet::Result<()> {
//! let browser = Browser::open_memory();
//!
//! match browser.search("con chó", RelationKind::Hypernym, DatasetVersion::V2).await? {
//!     SearchOutcome::Forest(forest) => {
//!         for node in forest.nodes() {
//!             println!("{}{}: {:?}", "  ".repeat(node.depth), node.lemma_text(), node.annotation.lemmas);
//!         }
//!     }
//!     SearchOutcome::Unresolved { message, .. } => println!("{message}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Backends
//!
//! | Backend | Feature | Description |
//! |---------|---------|-------------|
//! | `MemoryLexicon` | (default) | In-memory synset graph, JSON snapshots |
//! | `MemoryStore` | (default) | In-memory annotation tables |
//! | `SqliteStore` | `sqlite` | One SQLite database per dataset version |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod lexicon;
pub mod store;
pub mod search;
pub mod annotate;
pub mod resolve;
pub mod forest;
pub mod config;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    Synset, SynsetId, PartOfSpeech,
    RelationKind, DatasetVersion,
    AnnotationRow, AnnotationRecord,
    QueryResolution, TreeNode, Forest,
};

// ============================================================================
// Re-exports: Backends
// ============================================================================

pub use lexicon::{Lexicon, MemoryLexicon};
pub use store::{AnnotationStore, ExactEntry, FuzzyEntry, MemoryStore};
#[cfg(feature = "sqlite")]
pub use store::SqliteStore;

pub use config::BrowserConfig;

// ============================================================================
// Top-level Browser handle
// ============================================================================

/// Result of a full query: a forest, or the reason there is none.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Forest(Forest),
    Unresolved { message: String, suggestions: Vec<String> },
}

/// The primary entry point. A `Browser` wraps a lexicon and an annotation
/// store and runs resolution and expansion against them.
pub struct Browser<L: Lexicon, S: AnnotationStore> {
    lexicon: L,
    store: S,
    config: BrowserConfig,
}

impl<L: Lexicon, S: AnnotationStore> Browser<L, S> {
    /// Create a browser with the default configuration.
    pub fn with_backends(lexicon: L, store: S) -> Self {
        Self { lexicon, store, config: BrowserConfig::default() }
    }

    /// Replace the configuration after validating it.
    pub fn with_config(mut self, config: BrowserConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Resolve a query to seed synsets.
    pub async fn resolve(&self, query: &str, version: DatasetVersion) -> Result<QueryResolution> {
        resolve::resolve(&self.lexicon, &self.store, query, version, &self.config).await
    }

    /// Expand seeds into a forest. `max_depth` must be within
    /// `1..=config::MAX_DEPTH_LIMIT`.
    pub async fn build<'s, I>(
        &self,
        seeds: I,
        relation: RelationKind,
        version: DatasetVersion,
        max_depth: usize,
    ) -> Result<Forest>
    where
        I: IntoIterator<Item = &'s SynsetId>,
    {
        config::check_depth(max_depth)?;
        forest::build(&self.lexicon, &self.store, seeds, relation, version, max_depth).await
    }

    /// Resolve and expand at the configured depth.
    pub async fn search(
        &self,
        query: &str,
        relation: RelationKind,
        version: DatasetVersion,
    ) -> Result<SearchOutcome> {
        match self.resolve(query, version).await? {
            QueryResolution::Resolved { candidates } => {
                let forest = self.build(&candidates, relation, version, self.config.max_depth).await?;
                Ok(SearchOutcome::Forest(forest))
            }
            QueryResolution::Unresolved { message, suggestions } => {
                tracing::info!(query = %query, %version, "query unresolved");
                Ok(SearchOutcome::Unresolved { message, suggestions })
            }
        }
    }

    /// Resolve and expand with the configured relation, version and depth.
    pub async fn search_default(&self, query: &str) -> Result<SearchOutcome> {
        self.search(query, self.config.relation, self.config.version).await
    }

    /// Aggregated annotation of one synset.
    pub async fn annotation(&self, id: &SynsetId, version: DatasetVersion) -> Result<AnnotationRecord> {
        annotate::lookup(&self.store, id, version).await
    }

    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }
}

/// In-memory browser for testing and embedding.
impl Browser<MemoryLexicon, MemoryStore> {
    pub fn open_memory() -> Self {
        Self::with_backends(MemoryLexicon::new(), MemoryStore::new())
    }
}

/// Browser over SQLite annotation databases.
#[cfg(feature = "sqlite")]
impl<L: Lexicon> Browser<L, SqliteStore> {
    pub async fn open_sqlite(
        lexicon: L,
        v1_path: impl AsRef<std::path::Path>,
        v2_path: impl AsRef<std::path::Path>,
    ) -> Result<Self> {
        let store = SqliteStore::open(v1_path, v2_path).await?;
        Ok(Self::with_backends(lexicon, store))
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Annotation store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Lexicon unavailable: {0}")]
    LexiconUnavailable(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown relation kind: {0}")]
    InvalidRelation(String),

    #[error("Unknown dataset version: {0}")]
    InvalidVersion(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
