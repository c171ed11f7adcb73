//! Geometry a diagram records about itself for later overlays.
//!
//! [`Diagram`](super::Diagram) keeps a [`PlotFrame`] so legends can be
//! placed without looking at emitted markup. For a diagram root known only
//! by its [`NodeId`], [`PlotFrame::recover`] reads the same numbers back
//! from the tree: the integer `height` of the root and the
//! `translate(a, b)` transform of its `plot` group.

use log::debug;

use vellum_core::{AttrValue, NodeId, Tree, TreeError};

use crate::{error::LayoutError, geometry::Point};

/// Id attribute of a diagram root.
pub const DIAGRAM_ID: &str = "diagram";
/// Id attribute of the group holding labels and the plot viewport.
pub const PLOT_ID: &str = "plot";
/// Id attribute of the scaled group holding the series polylines.
pub const DATA_ID: &str = "data";

/// Page height and plot area offset of a diagram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotFrame {
    page_height: u32,
    plot_origin: Point,
}

impl PlotFrame {
    pub fn new(page_height: u32, plot_origin: Point) -> Self {
        Self {
            page_height,
            plot_origin,
        }
    }

    /// Height of the whole diagram page.
    pub fn page_height(&self) -> u32 {
        self.page_height
    }

    /// Top-left corner of the plot group, relative to the diagram root.
    ///
    /// `x` is the width of the left label band, `y` the title height.
    pub fn plot_origin(&self) -> Point {
        self.plot_origin
    }

    /// Reads the frame back from an emitted diagram rooted at `root`.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::NotADiagram`] if `root` is not a diagram root
    /// - [`LayoutError::MissingElement`] if there is no `plot` group
    /// - [`LayoutError::MissingTransform`] if the plot group has no transform
    /// - [`LayoutError::UnparseableTransform`] if it does not start with `translate(a, b)`
    /// - [`LayoutError::MissingPageHeight`] if the root has no integer height
    pub fn recover(tree: &Tree, root: NodeId) -> Result<Self, LayoutError> {
        let element = tree.get(root).ok_or(TreeError::UnknownNode(root))?;
        if element.attributes().get_str("id") != Some(DIAGRAM_ID) {
            return Err(LayoutError::NotADiagram);
        }

        let plot = tree
            .find_by_id(root, PLOT_ID)
            .ok_or(LayoutError::MissingElement(PLOT_ID))?;
        let transform = match tree[plot].attr("transform") {
            Some(AttrValue::Str(transform)) => transform.as_str(),
            Some(other) => return Err(LayoutError::UnparseableTransform(other.to_string())),
            None => return Err(LayoutError::MissingTransform),
        };
        let plot_origin = parse_translate(transform)
            .ok_or_else(|| LayoutError::UnparseableTransform(transform.to_string()))?;

        let page_height = element
            .attr("height")
            .and_then(AttrValue::as_int)
            .and_then(|h| u32::try_from(h).ok())
            .ok_or(LayoutError::MissingPageHeight)?;

        debug!(page_height, x = plot_origin.x(), y = plot_origin.y(); "Recovered plot frame");
        Ok(Self::new(page_height, plot_origin))
    }
}

/// Parses the leading `translate(a, b)` of a transform list.
fn parse_translate(transform: &str) -> Option<Point> {
    let args = transform.trim_start().strip_prefix("translate(")?;
    let (args, _) = args.split_once(')')?;
    let (x, y) = args.split_once(',')?;
    let x = x.trim().parse().ok()?;
    let y = y.trim().parse().ok()?;
    Some(Point::new(x, y))
}
