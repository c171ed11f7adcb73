//! The element tree: an arena of [`Element`]s addressed by [`NodeId`].
//!
//! # Architecture
//!
//! - [`NodeId`]: Index of an element inside its [`Tree`]
//! - [`Element`]: Tag, attributes, text payload, ordered children, comments and
//!   a non-owning parent index
//! - [`Tree`]: Owns every element; the root is an `<svg>` element
//!
//! Children are listed by id. The parent index is only consulted for ancestor
//! checks and never drives rendering.
//!
//! # Shared subtrees
//!
//! [`Tree::add`] accepts a node that already hangs somewhere else in the tree,
//! so one element may appear in several child lists. Such a structure is a DAG
//! and the shared subtree is written once per occurrence. [`Tree::insert`] is
//! stricter and rejects nodes that are already below the target.

use std::{fmt, mem, ops::Index};

use log::{debug, warn};

use crate::{
    attributes::{AttrValue, Attributes, MergeMode},
    error::TreeError,
};

/// Index of an element in a [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the element in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One element of the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attributes: Attributes,
    text: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    comments: Vec<String>,
}

impl Element {
    fn new(tag: &str, attributes: Option<&Attributes>) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: attributes.cloned().unwrap_or_default(),
            text: String::new(),
            children: Vec::new(),
            parent: None,
            comments: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Shorthand for `attributes().get(key)`.
    pub fn attr(&self, key: &str) -> Option<&AttrValue> {
        self.attributes.get(key)
    }

    /// Inline text payload; empty for container elements.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The element this one was created under, if any.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn is_text_leaf(&self) -> bool {
        !self.text.is_empty()
    }
}

/// An arena-backed element tree rooted at an `<svg>` element.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    nodes: Vec<Element>,
    root: NodeId,
    stylesheet: Option<String>,
}

impl Tree {
    /// Creates a tree whose root spans a `width` x `height` page.
    pub fn new(width: u32, height: u32) -> Self {
        let attributes = Attributes::new()
            .with("preserveAspectRatio", "xMinYMin meet")
            .with("viewBox", format!("0 0 {width} {height}"))
            .with("xmlns", "http://www.w3.org/2000/svg")
            .with("xmlns:xlink", "http://www.w3.org/1999/xlink");

        Self {
            nodes: vec![Element::new("svg", Some(&attributes))],
            root: NodeId(0),
            stylesheet: None,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of elements in the arena, detached ones included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the element for `id`, or `None` if `id` is not from this tree.
    pub fn get(&self, id: NodeId) -> Option<&Element> {
        self.nodes.get(id.0)
    }

    fn check(&self, id: NodeId) -> Result<(), TreeError> {
        if id.0 < self.nodes.len() {
            Ok(())
        } else {
            Err(TreeError::UnknownNode(id))
        }
    }

    /// External stylesheet referenced from the document prologue.
    pub fn stylesheet(&self) -> Option<&str> {
        self.stylesheet.as_deref()
    }

    pub fn set_stylesheet(&mut self, href: impl Into<String>) {
        self.stylesheet = Some(href.into());
    }

    /// Creates an element that is not attached anywhere yet.
    ///
    /// Attach it later with [`Tree::add`] or [`Tree::insert`].
    pub fn create_element(&mut self, tag: &str, attributes: Option<&Attributes>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Element::new(tag, attributes));
        id
    }

    /// Creates an element as the last child of `parent`.
    ///
    /// The attributes are copied. If `parent` was a text leaf it gives up its
    /// text, since an element is either a text leaf or a container.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this tree.
    pub fn new_child(
        &mut self,
        parent: NodeId,
        tag: &str,
        attributes: Option<&Attributes>,
    ) -> NodeId {
        let id = self.create_element(tag, attributes);
        self.nodes[id.0].parent = Some(parent);

        let parent_node = &mut self.nodes[parent.0];
        if parent_node.is_text_leaf() {
            warn!(parent:% = parent, tag; "Text leaf receives a child element, dropping its text");
            parent_node.text.clear();
        }
        parent_node.children.push(id);
        id
    }

    /// Sets the inline text of `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::ContainerText`] if the element already has children.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) -> Result<(), TreeError> {
        self.check(id)?;
        let node = &mut self.nodes[id.0];
        if !node.children.is_empty() {
            return Err(TreeError::ContainerText(id));
        }
        node.text = text.into();
        Ok(())
    }

    /// Sets a single attribute, replacing any previous value.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    pub fn set_attr(&mut self, id: NodeId, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.nodes[id.0].attributes.set(key, value);
    }

    /// Merges `attributes` into the element's attributes.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    pub fn add_attributes(&mut self, id: NodeId, attributes: &Attributes, mode: MergeMode) {
        self.nodes[id.0].attributes.merge(attributes, mode);
    }

    /// Sets the `id` attribute.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    pub fn set_id(&mut self, id: NodeId, identifier: &str) {
        self.set_attr(id, "id", identifier);
    }

    /// Adds a comment written right before the element's opening tag.
    ///
    /// `--` sequences are spaced apart on output so the comment stays
    /// well-formed.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    pub fn comment(&mut self, id: NodeId, comment: impl Into<String>) {
        self.nodes[id.0].comments.push(comment.into());
    }

    /// Walks the parent chain of `node` looking for `candidate`.
    ///
    /// A node is not its own ancestor.
    pub fn is_ancestor(&self, node: NodeId, candidate: NodeId) -> bool {
        let mut current = self.get(node).and_then(Element::parent);
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.nodes[id.0].parent;
        }
        false
    }

    /// Appends `other` as the last child of `parent`.
    ///
    /// `other` may already be attached elsewhere, including below `parent`;
    /// it then appears in more than one child list. A detached `other`
    /// records `parent` as its parent.
    ///
    /// # Errors
    ///
    /// - [`TreeError::UnknownNode`] if either id is not from this tree
    /// - [`TreeError::WouldCycle`] if `other` is `parent`, an ancestor of
    ///   `parent`, or otherwise reaches `parent` through its children
    /// - [`TreeError::TextNodeChildren`] if `parent` holds text
    pub fn add(&mut self, parent: NodeId, other: NodeId) -> Result<(), TreeError> {
        self.check(parent)?;
        self.check(other)?;

        if other == parent || self.is_ancestor(parent, other) || self.contains(other, parent) {
            warn!(parent:% = parent, other:% = other; "Rejected add: would create a cycle");
            return Err(TreeError::WouldCycle { parent, other });
        }
        if self.nodes[parent.0].is_text_leaf() {
            return Err(TreeError::TextNodeChildren(parent));
        }

        if self.nodes[other.0].parent.is_none() {
            self.nodes[other.0].parent = Some(parent);
        }
        self.nodes[parent.0].children.push(other);
        debug!(parent:% = parent, other:% = other; "Added node");
        Ok(())
    }

    /// Splices `other` between `parent` and its children.
    ///
    /// `other` adopts all children of `parent`, which is left with the single
    /// child `other`. Returns `other`.
    ///
    /// # Errors
    ///
    /// - [`TreeError::UnknownNode`] if either id is not from this tree
    /// - [`TreeError::WouldCycle`] if `other` is `parent`, an ancestor of
    ///   `parent`, or reaches `parent` through its children
    /// - [`TreeError::AlreadyDescendant`] if `other` is already below `parent`
    /// - [`TreeError::TextNodeChildren`] if `parent` or `other` holds text
    pub fn insert(&mut self, parent: NodeId, other: NodeId) -> Result<NodeId, TreeError> {
        self.check(parent)?;
        self.check(other)?;

        if other == parent || self.is_ancestor(parent, other) || self.contains(other, parent) {
            warn!(parent:% = parent, other:% = other; "Rejected insert: would create a cycle");
            return Err(TreeError::WouldCycle { parent, other });
        }
        if self.contains(parent, other) {
            warn!(parent:% = parent, other:% = other; "Rejected insert: already a descendant");
            return Err(TreeError::AlreadyDescendant { parent, other });
        }
        if self.nodes[parent.0].is_text_leaf() {
            return Err(TreeError::TextNodeChildren(parent));
        }
        if self.nodes[other.0].is_text_leaf() && !self.nodes[parent.0].children.is_empty() {
            return Err(TreeError::TextNodeChildren(other));
        }

        let adopted = mem::take(&mut self.nodes[parent.0].children);
        for &child in &adopted {
            if self.nodes[child.0].parent == Some(parent) {
                self.nodes[child.0].parent = Some(other);
            }
        }
        self.nodes[other.0].children.extend(adopted);
        self.nodes[parent.0].children.push(other);
        if self.nodes[other.0].parent.is_none() {
            self.nodes[other.0].parent = Some(parent);
        }

        debug!(parent:% = parent, other:% = other; "Inserted node");
        Ok(other)
    }
}

impl Index<NodeId> for Tree {
    type Output = Element;

    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}
