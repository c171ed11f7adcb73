//! Depth-first, pre-order lookups over a [`Tree`].
//!
//! The layout code uses these to read back geometry it wrote earlier.

use crate::tree::{NodeId, Tree};

/// Pre-order iterator over a subtree, starting with the subtree root.
///
/// Elements shared through [`Tree::add`] are visited once per occurrence.
#[derive(Debug)]
pub struct Descendants<'a> {
    tree: &'a Tree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        if let Some(element) = self.tree.get(id) {
            self.stack.extend(element.children().iter().rev());
        }
        Some(id)
    }
}

impl Tree {
    /// Iterates over `from` and everything below it in document order.
    pub fn descendants(&self, from: NodeId) -> Descendants<'_> {
        Descendants {
            tree: self,
            stack: vec![from],
        }
    }

    /// Returns the first element, in document order, whose `id` attribute is `id`.
    pub fn find_by_id(&self, from: NodeId, id: &str) -> Option<NodeId> {
        self.descendants(from)
            .find(|&node| self[node].attributes().get_str("id") == Some(id))
    }

    /// Returns every element with tag `tag`, in document order.
    pub fn find_all_by_tag(&self, from: NodeId, tag: &str) -> Vec<NodeId> {
        self.descendants(from)
            .filter(|&node| self[node].tag() == tag)
            .collect()
    }

    /// Returns `true` if `node` is `from` or reachable from it through child lists.
    pub fn contains(&self, from: NodeId, node: NodeId) -> bool {
        self.descendants(from).any(|id| id == node)
    }
}
