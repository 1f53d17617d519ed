//! Tree construction: expand each seed along one relation kind.
//!
//! Expansion is depth-first and sequential. Children keep the lexicon's
//! relation order. There is no cycle detection: a synset reachable from
//! itself reappears as a fresh node on every lap, and only `max_depth`
//! bounds the walk.

use std::future::Future;
use std::pin::Pin;

use crate::annotate;
use crate::lexicon::Lexicon;
use crate::model::*;
use crate::store::AnnotationStore;
use crate::{Error, Result};

type BoxedNode<'e> = Pin<Box<dyn Future<Output = Result<TreeNode>> + Send + 'e>>;

/// Everything one expansion reads; shared by every recursive step.
struct Expansion<'a, L: ?Sized, S: ?Sized> {
    lexicon: &'a L,
    store: &'a S,
    relation: RelationKind,
    version: DatasetVersion,
    max_depth: usize,
}

impl<'a, L, S> Expansion<'a, L, S>
where
    L: Lexicon + ?Sized,
    S: AnnotationStore + ?Sized,
{
    fn expand<'e>(&'e self, synset: Synset, depth: usize) -> BoxedNode<'e> {
        Box::pin(async move {
            let annotation = annotate::lookup(self.store, &synset.id, self.version).await?;
            let targets = if depth < self.max_depth {
                self.lexicon.related(&synset, self.relation).await?
            } else {
                Vec::new()
            };

            let mut node = TreeNode::new(synset, annotation, depth);
            node.children.reserve(targets.len());
            for target in targets {
                node.children.push(self.expand(target, depth + 1).await?);
            }
            Ok(node)
        })
    }
}

/// Build one tree per seed, in seed order.
///
/// Every node is annotated at `version`; no node is deeper than
/// `max_depth`. A seed missing from the lexicon is `Error::NotFound`.
pub async fn build<'s, L, S, I>(
    lexicon: &L,
    store: &S,
    seeds: I,
    relation: RelationKind,
    version: DatasetVersion,
    max_depth: usize,
) -> Result<Forest>
where
    L: Lexicon + ?Sized,
    S: AnnotationStore + ?Sized,
    I: IntoIterator<Item = &'s SynsetId>,
{
    let expansion = Expansion { lexicon, store, relation, version, max_depth };

    let mut roots = Vec::new();
    for id in seeds {
        let synset = lexicon
            .synset(id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Synset {id}")))?;
        roots.push(expansion.expand(synset, 0).await?);
    }

    let forest = Forest { relation, version, max_depth, roots };
    tracing::debug!(
        %relation,
        %version,
        max_depth,
        roots = forest.len(),
        nodes = forest.node_count(),
        "forest built"
    );
    Ok(forest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::MemoryLexicon;
    use crate::store::MemoryStore;
    use pretty_assertions::assert_eq;

    fn noun(id: &str) -> Synset {
        Synset::new(id, PartOfSpeech::Noun).with_lemmas([id])
    }

    /// animal → {dog, cat}; dog → {puppy}
    fn lexicon() -> MemoryLexicon {
        let lex = MemoryLexicon::new();
        for id in ["animal", "dog", "cat", "puppy"] {
            lex.insert(noun(id));
        }
        lex.relate(&"animal".into(), RelationKind::Hyponym, &"dog".into()).unwrap();
        lex.relate(&"animal".into(), RelationKind::Hyponym, &"cat".into()).unwrap();
        lex.relate(&"dog".into(), RelationKind::Hyponym, &"puppy".into()).unwrap();
        lex
    }

    fn shape(node: &TreeNode) -> Vec<(String, usize)> {
        node.walk().map(|n| (n.id.0.clone(), n.depth)).collect()
    }

    #[tokio::test]
    async fn test_depth_one_stops_at_children() {
        let lex = lexicon();
        let store = MemoryStore::new();
        let seeds = [SynsetId::from("animal")];

        let forest = build(&lex, &store, &seeds, RelationKind::Hyponym, DatasetVersion::V1, 1)
            .await
            .unwrap();
        assert_eq!(forest.len(), 1);
        let root = &forest.roots[0];
        assert_eq!(root.depth, 0);
        assert_eq!(root.children.len(), 2);
        assert!(root.children.iter().all(|c| c.depth == 1 && c.is_terminal()));
    }

    #[tokio::test]
    async fn test_children_keep_relation_order() {
        let lex = lexicon();
        let store = MemoryStore::new();
        let seeds = [SynsetId::from("animal")];

        let forest = build(&lex, &store, &seeds, RelationKind::Hyponym, DatasetVersion::V1, 3)
            .await
            .unwrap();
        assert_eq!(
            shape(&forest.roots[0]),
            vec![
                ("animal".to_string(), 0),
                ("dog".to_string(), 1),
                ("puppy".to_string(), 2),
                ("cat".to_string(), 1),
            ]
        );
    }

    #[tokio::test]
    async fn test_no_relation_of_kind_is_terminal() {
        let lex = lexicon();
        let store = MemoryStore::new();
        let seeds = [SynsetId::from("animal")];

        let forest = build(&lex, &store, &seeds, RelationKind::Meronym, DatasetVersion::V1, 5)
            .await
            .unwrap();
        assert!(forest.roots[0].is_terminal());
    }

    #[tokio::test]
    async fn test_cycle_is_bounded_by_depth() {
        let lex = MemoryLexicon::new();
        lex.insert(noun("a"));
        lex.insert(noun("b"));
        lex.relate(&"a".into(), RelationKind::Hypernym, &"b".into()).unwrap();
        lex.relate(&"b".into(), RelationKind::Hypernym, &"a".into()).unwrap();
        let store = MemoryStore::new();

        let forest = build(&lex, &store, &[SynsetId::from("a")], RelationKind::Hypernym, DatasetVersion::V1, 4)
            .await
            .unwrap();
        let ids: Vec<&str> = forest.nodes().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "a", "b", "a"]);
        assert_eq!(forest.max_depth_reached(), 4);
    }

    #[tokio::test]
    async fn test_every_node_annotated_at_forest_version() {
        let lex = lexicon();
        let store = MemoryStore::new();
        store.add_row(DatasetVersion::V1, AnnotationRow::new("dog", "chó (v1)"));
        store.add_row(DatasetVersion::V2, AnnotationRow::new("dog", "chó (v2)"));
        store.add_row(DatasetVersion::V2, AnnotationRow::new("animal", "động vật"));

        let forest = build(&lex, &store, &[SynsetId::from("animal")], RelationKind::Hyponym, DatasetVersion::V2, 2)
            .await
            .unwrap();
        let root = &forest.roots[0];
        assert_eq!(root.annotation.lemmas.as_deref(), Some("động vật"));
        assert_eq!(root.children[0].annotation.lemmas.as_deref(), Some("chó (v2)"));
        assert!(root.children[1].annotation.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_seed_is_not_found() {
        let lex = lexicon();
        let store = MemoryStore::new();
        let err = build(&lex, &store, &[SynsetId::from("ghost")], RelationKind::Hyponym, DatasetVersion::V1, 1)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_depth_zero_is_roots_only() {
        let lex = lexicon();
        let store = MemoryStore::new();
        let forest = build(&lex, &store, &[SynsetId::from("animal")], RelationKind::Hyponym, DatasetVersion::V1, 0)
            .await
            .unwrap();
        assert_eq!(forest.node_count(), 1);
    }
}
