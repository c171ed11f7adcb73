//! Series legends.
//!
//! A legend sits in the left label band, below the title. It is split into
//! one row per series; each row holds a swatch in the series' stroke color
//! and the series description rotated by 90 degrees.

use log::debug;

use vellum_core::{AttrValue, Attributes, NodeId, Tree, TreeError};

use crate::{
    config::{LayoutConfig, StyleConfig},
    error::LayoutError,
};

use super::frame::{DIAGRAM_ID, PlotFrame};

/// Id of the swatch rectangle shared by all legend rows.
pub const LEGEND_RECT_ID: &str = "legendRect";

/// Adds a legend to the diagram rooted at `diagram`.
///
/// `descriptions[i]` describes the `i`-th polyline below the diagram in
/// document order. The plot offsets and page height are read back from the
/// emitted tree with [`PlotFrame::recover`].
///
/// # Errors
///
/// - [`LayoutError::NotADiagram`] if `diagram` lacks `id="diagram"`
/// - [`LayoutError::DescriptionCountMismatch`] naming both counts when the
///   number of descriptions differs from the number of series
/// - [`LayoutError::NoSeries`] if the diagram holds no series at all
/// - [`LayoutError::MissingStroke`] / [`LayoutError::InvalidStroke`] if a
///   series has no string `stroke` attribute
/// - any error of [`PlotFrame::recover`]
///
/// Nothing is emitted on error.
pub fn legend<S: AsRef<str>>(
    tree: &mut Tree,
    diagram: NodeId,
    descriptions: &[S],
    layout: &LayoutConfig,
    style: &StyleConfig,
) -> Result<NodeId, LayoutError> {
    let strokes = series_strokes(tree, diagram, descriptions)?;
    let frame = PlotFrame::recover(tree, diagram)?;
    emit(tree, diagram, frame, &strokes, descriptions, layout, style)
}

/// Like [`legend`], with the frame supplied by the caller.
pub(crate) fn legend_in_frame<S: AsRef<str>>(
    tree: &mut Tree,
    diagram: NodeId,
    frame: PlotFrame,
    descriptions: &[S],
    layout: &LayoutConfig,
    style: &StyleConfig,
) -> Result<NodeId, LayoutError> {
    let strokes = series_strokes(tree, diagram, descriptions)?;
    emit(tree, diagram, frame, &strokes, descriptions, layout, style)
}

/// Collects the stroke color of every series, in document order.
fn series_strokes<S: AsRef<str>>(
    tree: &Tree,
    diagram: NodeId,
    descriptions: &[S],
) -> Result<Vec<String>, LayoutError> {
    let root = tree.get(diagram).ok_or(TreeError::UnknownNode(diagram))?;
    if root.attributes().get_str("id") != Some(DIAGRAM_ID) {
        return Err(LayoutError::NotADiagram);
    }

    let lines = tree.find_all_by_tag(diagram, "polyline");
    if lines.len() != descriptions.len() {
        return Err(LayoutError::DescriptionCountMismatch {
            series: lines.len(),
            descriptions: descriptions.len(),
            given: descriptions.iter().map(|d| d.as_ref().to_string()).collect(),
        });
    }
    if lines.is_empty() {
        return Err(LayoutError::NoSeries);
    }

    lines
        .iter()
        .enumerate()
        .map(|(index, &line)| match tree[line].attr("stroke") {
            Some(AttrValue::Str(stroke)) => Ok(stroke.clone()),
            Some(_) => Err(LayoutError::InvalidStroke { index }),
            None => Err(LayoutError::MissingStroke { index }),
        })
        .collect()
}

fn emit<S: AsRef<str>>(
    tree: &mut Tree,
    diagram: NodeId,
    frame: PlotFrame,
    strokes: &[String],
    descriptions: &[S],
    layout: &LayoutConfig,
    style: &StyleConfig,
) -> Result<NodeId, LayoutError> {
    let text_color = style.text_color().map_err(LayoutError::InvalidColor)?;

    let margin = layout.legend_margin();
    let origin = frame.plot_origin();
    let width = ((origin.x() - 2.0 * margin) / 3.0).floor();
    let height = f64::from(frame.page_height()) - origin.y() - 2.0 * margin;
    let row = (height / strokes.len() as f64).floor();
    if width <= 0.0 || row <= 0.0 {
        return Err(LayoutError::NoLegendRoom { width, height });
    }

    let group = tree.group_with_id(
        diagram,
        "legend",
        Some(&Attributes::translate(margin, origin.y() + margin)),
    );
    let defs = tree.defs(group);
    tree.rect(
        defs,
        0.0,
        0.0,
        width,
        row,
        Some(&Attributes::from([("id", LEGEND_RECT_ID)])),
    );

    let pivot = layout.text_height() / 2.0;
    for (i, (stroke, description)) in strokes.iter().zip(descriptions).enumerate() {
        let y = row * i as f64;
        tree.use_ref(
            group,
            LEGEND_RECT_ID,
            Some(&Attributes::new().with("fill", stroke).with("y", y)),
        );
        tree.text(
            group,
            pivot + row / 2.0,
            y,
            description.as_ref(),
            Some(
                &Attributes::rotate(90.0, pivot, y)
                    .with("text-anchor", "middle")
                    .with("fill", &text_color),
            ),
        );
    }

    debug!(rows = strokes.len(), width, row; "Legend built");
    Ok(group)
}
