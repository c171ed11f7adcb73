//! Element factories.
//!
//! Each method creates one element as the last child of `parent`, applies the
//! caller's attribute overrides first and its own geometry attributes on top,
//! and returns the new element's id for further chaining.
//!
//! ```
//! # use vellum_core::{attributes::Attributes, tree::Tree};
//! let mut tree = Tree::new(200, 100);
//! let group = tree.group_with_id(tree.root(), "shapes", None);
//! tree.rect(group, 0.0, 0.0, 200.0, 100.0, Some(&Attributes::from([("fill", "white")])));
//! tree.circle(group, 50.0, 50.0, 10.0, None);
//! assert_eq!(tree.find_all_by_tag(tree.root(), "circle").len(), 1);
//! ```

use crate::{
    attributes::{Attributes, MergeMode},
    error::TreeError,
    tree::{NodeId, Tree},
};

impl Tree {
    /// Nested `<svg>` viewport. Ref <http://www.w3.org/TR/SVG11/struct.html#SVGElement>
    pub fn svg(
        &mut self,
        parent: NodeId,
        width: f64,
        height: f64,
        attrs: Option<&Attributes>,
    ) -> NodeId {
        let id = self.new_child(parent, "svg", attrs);
        self.set_attr(id, "width", width);
        self.set_attr(id, "height", height);
        id
    }

    /// Nested `<svg>` viewport with its own `viewBox`.
    #[allow(clippy::too_many_arguments)]
    pub fn svg_with_view_box(
        &mut self,
        parent: NodeId,
        width: f64,
        height: f64,
        min_x: f64,
        min_y: f64,
        view_width: f64,
        view_height: f64,
        attrs: Option<&Attributes>,
    ) -> NodeId {
        let id = self.svg(parent, width, height, attrs);
        self.add_attributes(
            id,
            &Attributes::view_box(min_x, min_y, view_width, view_height),
            MergeMode::Override,
        );
        id
    }

    pub fn symbol(&mut self, parent: NodeId, id: &str, attrs: Option<&Attributes>) -> NodeId {
        let node = self.new_child(parent, "symbol", attrs);
        self.set_id(node, id);
        node
    }

    pub fn symbol_with_view_box(
        &mut self,
        parent: NodeId,
        id: &str,
        view_box: (f64, f64, f64, f64),
        attrs: Option<&Attributes>,
    ) -> NodeId {
        let node = self.symbol(parent, id, attrs);
        let (min_x, min_y, width, height) = view_box;
        self.add_attributes(
            node,
            &Attributes::view_box(min_x, min_y, width, height),
            MergeMode::Override,
        );
        node
    }

    /// `<use>` instance of the element whose `id` is `id`.
    pub fn use_ref(&mut self, parent: NodeId, id: &str, attrs: Option<&Attributes>) -> NodeId {
        let node = self.new_child(parent, "use", attrs);
        self.set_attr(node, "xlink:href", format!("#{id}"));
        node
    }

    /// `<title>` holding `title` as text.
    pub fn title(&mut self, parent: NodeId, title: &str) -> NodeId {
        self.text_leaf(parent, "title", title, None)
    }

    /// `<desc>` holding `description` as text.
    pub fn desc(&mut self, parent: NodeId, description: &str) -> NodeId {
        self.text_leaf(parent, "desc", description, None)
    }

    pub fn defs(&mut self, parent: NodeId) -> NodeId {
        self.new_child(parent, "defs", None)
    }

    pub fn marker(&mut self, parent: NodeId, id: &str, attrs: Option<&Attributes>) -> NodeId {
        let node = self.new_child(parent, "marker", attrs);
        self.set_id(node, id);
        node
    }

    pub fn group(&mut self, parent: NodeId, attrs: Option<&Attributes>) -> NodeId {
        self.new_child(parent, "g", attrs)
    }

    pub fn group_with_id(
        &mut self,
        parent: NodeId,
        id: &str,
        attrs: Option<&Attributes>,
    ) -> NodeId {
        let node = self.group(parent, attrs);
        self.set_id(node, id);
        node
    }

    /// Group translating its content by `(x, y)`.
    pub fn translate(&mut self, parent: NodeId, x: f64, y: f64) -> NodeId {
        self.group(parent, Some(&Attributes::translate(x, y)))
    }

    /// Group scaling its content by `(x, y)`.
    pub fn scale(&mut self, parent: NodeId, x: f64, y: f64) -> NodeId {
        self.group(parent, Some(&Attributes::scale(x, y)))
    }

    /// Makes everything below `node` a hyperlink to `url`.
    ///
    /// The children of `node` are wrapped in a new `<a>` element via
    /// [`Tree::insert`].
    pub fn link(&mut self, node: NodeId, url: &str) -> Result<NodeId, TreeError> {
        let attrs = Attributes::new()
            .with("xlink:href", url)
            .with("xlink:show", "replace")
            .with("target", "_parent");
        let anchor = self.create_element("a", Some(&attrs));
        self.insert(node, anchor)
    }

    pub fn circle(
        &mut self,
        parent: NodeId,
        cx: f64,
        cy: f64,
        r: f64,
        attrs: Option<&Attributes>,
    ) -> NodeId {
        let node = self.new_child(parent, "circle", attrs);
        self.set_attr(node, "cx", cx);
        self.set_attr(node, "cy", cy);
        self.set_attr(node, "r", r);
        node
    }

    pub fn rect(
        &mut self,
        parent: NodeId,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        attrs: Option<&Attributes>,
    ) -> NodeId {
        let node = self.new_child(parent, "rect", attrs);
        let mut geometry = Attributes::new();
        geometry.set_position(x, y);
        geometry.set_size(width, height);
        self.add_attributes(node, &geometry, MergeMode::Override);
        node
    }

    pub fn line(
        &mut self,
        parent: NodeId,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        attrs: Option<&Attributes>,
    ) -> NodeId {
        let node = self.new_child(parent, "line", attrs);
        self.set_attr(node, "x1", x1);
        self.set_attr(node, "y1", y1);
        self.set_attr(node, "x2", x2);
        self.set_attr(node, "y2", y2);
        node
    }

    /// Polyline through every `(xs[i], ys[i])` pair, in order.
    ///
    /// Points are written with six decimals: `"0.000000,1.500000 1.000000,2.000000"`.
    ///
    /// # Errors
    ///
    /// Fails without touching the tree if the slices differ in length, are
    /// empty, or hold a non-finite value.
    pub fn polyline(
        &mut self,
        parent: NodeId,
        xs: &[f64],
        ys: &[f64],
        attrs: Option<&Attributes>,
    ) -> Result<NodeId, TreeError> {
        if xs.len() != ys.len() {
            return Err(TreeError::PolylineLengthMismatch {
                x: xs.len(),
                y: ys.len(),
            });
        }
        if xs.is_empty() {
            return Err(TreeError::EmptyPolyline);
        }
        if let Some(index) = xs
            .iter()
            .zip(ys)
            .position(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(TreeError::NonFiniteCoordinate { index });
        }

        let points = xs
            .iter()
            .zip(ys)
            .map(|(x, y)| format!("{x:.6},{y:.6}"))
            .collect::<Vec<_>>()
            .join(" ");

        let node = self.new_child(parent, "polyline", attrs);
        self.set_attr(node, "points", points);
        Ok(node)
    }

    /// `<text>` at `(x, y)` holding `text`.
    pub fn text(
        &mut self,
        parent: NodeId,
        x: f64,
        y: f64,
        text: &str,
        attrs: Option<&Attributes>,
    ) -> NodeId {
        let node = self.text_leaf(parent, "text", text, attrs);
        self.set_attr(node, "x", x);
        self.set_attr(node, "y", y);
        node
    }

    #[allow(clippy::too_many_arguments)]
    pub fn image(
        &mut self,
        parent: NodeId,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        href: &str,
        attrs: Option<&Attributes>,
    ) -> NodeId {
        let node = self.new_child(parent, "image", attrs);
        let mut geometry = Attributes::new().with("xlink:href", href);
        geometry.set_position(x, y);
        geometry.set_size(width, height);
        self.add_attributes(node, &geometry, MergeMode::Override);
        node
    }

    fn text_leaf(
        &mut self,
        parent: NodeId,
        tag: &str,
        text: &str,
        attrs: Option<&Attributes>,
    ) -> NodeId {
        let node = self.new_child(parent, tag, attrs);
        // A fresh element has no children, so this cannot fail.
        let _ = self.set_text(node, text);
        node
    }
}
