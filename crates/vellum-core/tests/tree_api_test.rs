//! Integration tests for tree construction, mutation and serialization.

use proptest::prelude::*;

use vellum_core::{Attributes, NodeId, Tree, TreeError};

/// Builds a tree where node `i + 1` is created under node `parents[i] % (i + 1)`.
fn build_tree(parents: &[usize]) -> (Tree, Vec<NodeId>) {
    let mut tree = Tree::new(100, 100);
    let mut ids = vec![tree.root()];
    for (i, p) in parents.iter().enumerate() {
        let parent = ids[p % (i + 1)];
        let attrs = Attributes::new().with("data-index", i);
        ids.push(tree.group(parent, Some(&attrs)));
    }
    (tree, ids)
}

fn check_add_ancestor_is_rejected(parents: Vec<usize>, pick: usize) -> Result<(), TestCaseError> {
    let (mut tree, ids) = build_tree(&parents);
    let node = ids[pick % ids.len()];
    let before = tree.to_svg_string();

    let mut current = tree[node].parent();
    while let Some(ancestor) = current {
        let result = tree.add(node, ancestor);
        prop_assert_eq!(
            result,
            Err(TreeError::WouldCycle {
                parent: node,
                other: ancestor
            })
        );
        current = tree[ancestor].parent();
    }

    prop_assert_eq!(tree.to_svg_string(), before);
    Ok(())
}

fn check_insert_descendant_is_rejected(
    parents: Vec<usize>,
    pick: usize,
) -> Result<(), TestCaseError> {
    let (mut tree, ids) = build_tree(&parents);
    let before = tree.to_svg_string();

    let descendant = ids[1 + pick % (ids.len() - 1)];
    let result = tree.insert(tree.root(), descendant);
    prop_assert_eq!(
        result,
        Err(TreeError::AlreadyDescendant {
            parent: tree.root(),
            other: descendant
        })
    );
    prop_assert_eq!(tree.to_svg_string(), before);
    Ok(())
}

fn check_search_finds_every_group(parents: Vec<usize>) -> Result<(), TestCaseError> {
    let (tree, ids) = build_tree(&parents);
    let groups = tree.find_all_by_tag(tree.root(), "g");
    prop_assert_eq!(groups.len(), ids.len() - 1);
    for id in &ids {
        prop_assert!(tree.contains(tree.root(), *id));
    }
    Ok(())
}

proptest! {
    #[test]
    fn add_ancestor_is_rejected(
        parents in prop::collection::vec(0usize..64, 1..24),
        pick in 0usize..64,
    ) {
        check_add_ancestor_is_rejected(parents, pick)?;
    }

    #[test]
    fn insert_descendant_is_rejected(
        parents in prop::collection::vec(0usize..64, 1..24),
        pick in 0usize..64,
    ) {
        check_insert_descendant_is_rejected(parents, pick)?;
    }

    #[test]
    fn search_finds_every_group(parents in prop::collection::vec(0usize..64, 0..24)) {
        check_search_finds_every_group(parents)?;
    }
}

#[test]
fn test_add_across_detached_trees() {
    let mut tree = Tree::new(100, 100);
    let detached = tree.create_element("g", None);
    let inner = tree.circle(detached, 1.0, 1.0, 1.0, None);
    let before = tree.to_svg_string();

    // `detached` is an ancestor of `inner`.
    assert!(tree.add(inner, detached).is_err());
    assert_eq!(tree.to_svg_string(), before);

    tree.add(tree.root(), detached).unwrap();
    assert!(tree.contains(tree.root(), inner));
    assert!(tree.is_ancestor(inner, tree.root()));
}

#[test]
fn test_self_closing_then_container() {
    let mut tree = Tree::new(40, 20);
    let svg = tree.to_svg_string();
    assert!(svg.trim_end().ends_with("/>"));
    assert!(!svg.contains("</svg>"));

    tree.rect(tree.root(), 0.0, 0.0, 40.0, 20.0, None);
    let svg = tree.to_svg_string();
    assert!(svg.contains("\">\n\t<rect height=\"20\" width=\"40\" x=\"0\" y=\"0\" />\n</svg>\n"));
}
