//! Expansion trees: enriched synsets positioned by depth.

use serde::{Deserialize, Serialize};
use super::{AnnotationRecord, DatasetVersion, RelationKind, Synset, SynsetId};

/// One vertex of an expansion tree.
///
/// A node owns its children exclusively. The same synset may appear as
/// several distinct nodes, in different branches or along one path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: SynsetId,
    pub lemmas: Vec<String>,
    pub definition: String,
    pub examples: Vec<String>,
    pub annotation: AnnotationRecord,
    /// 0 at a seed, +1 per expansion step.
    pub depth: usize,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(synset: Synset, annotation: AnnotationRecord, depth: usize) -> Self {
        Self {
            id: synset.id,
            lemmas: synset.lemmas,
            definition: synset.definition,
            examples: synset.examples,
            annotation,
            depth,
            children: Vec::new(),
        }
    }

    pub fn lemma_text(&self) -> String {
        self.lemmas.join(", ")
    }

    pub fn is_terminal(&self) -> bool {
        self.children.is_empty()
    }

    /// Pre-order traversal: self, then each child subtree in order.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    pub fn node_count(&self) -> usize {
        self.walk().count()
    }

    /// Number of edges on the longest downward path.
    pub fn height(&self) -> usize {
        self.children.iter().map(|c| c.height() + 1).max().unwrap_or(0)
    }
}

/// Pre-order iterator over a [`TreeNode`] subtree.
pub struct Walk<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Ordered roots, one per seed, all expanded along one relation at one
/// dataset version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forest {
    pub relation: RelationKind,
    pub version: DatasetVersion,
    pub max_depth: usize,
    pub roots: Vec<TreeNode>,
}

impl Forest {
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TreeNode> {
        self.roots.iter()
    }

    /// Every node of every tree, root by root in pre-order.
    pub fn nodes(&self) -> impl Iterator<Item = &TreeNode> {
        self.roots.iter().flat_map(TreeNode::walk)
    }

    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// Deepest depth actually present (0 for an empty forest).
    pub fn max_depth_reached(&self) -> usize {
        self.nodes().map(|n| n.depth).max().unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a Forest {
    type Item = &'a TreeNode;
    type IntoIter = std::slice::Iter<'a, TreeNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.iter()
    }
}
