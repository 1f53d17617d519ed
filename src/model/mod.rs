//! # Lexical Model
//!
//! Plain DTOs shared by the lexicon, the annotation store, the resolver
//! and the tree builder.
//!
//! Design rule: no backend types here. This module is pure data: no I/O,
//! no state, no async.

pub mod synset;
pub mod relation;
pub mod annotation;
pub mod resolution;
pub mod tree;

pub use synset::{Synset, SynsetId, PartOfSpeech};
pub use relation::{RelationKind, DatasetVersion};
pub use annotation::{AnnotationRow, AnnotationRecord};
pub use resolution::QueryResolution;
pub use tree::{TreeNode, Forest, Walk};
