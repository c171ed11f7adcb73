//! Additional series on an existing diagram.

use log::debug;

use vellum_core::{Attributes, ColorSource, MergeMode, NodeId, Tree, TreeError};

use crate::{error::LayoutError, series::Series};

use super::frame::{DATA_ID, DIAGRAM_ID};

/// Adds `series` as another polyline of the diagram rooted at `diagram`.
///
/// The polyline goes into the diagram's `data` group and therefore shares
/// the axes of the first series; values outside the first series' range are
/// drawn outside the plot area. The line defaults to no fill and a
/// non-scaling stroke. A stroke color is taken from `colors` only when
/// `attrs` does not set one; `attrs` override everything else.
///
/// # Errors
///
/// - [`LayoutError::NotADiagram`] if `diagram` lacks `id="diagram"`
/// - [`LayoutError::NoSeries`] if the diagram holds no polyline yet
/// - [`LayoutError::MissingElement`] if its `data` group is gone
pub fn add_plot(
    tree: &mut Tree,
    diagram: NodeId,
    series: &Series,
    attrs: Option<&Attributes>,
    colors: &mut dyn ColorSource,
) -> Result<NodeId, LayoutError> {
    let root = tree.get(diagram).ok_or(TreeError::UnknownNode(diagram))?;
    if root.attributes().get_str("id") != Some(DIAGRAM_ID) {
        return Err(LayoutError::NotADiagram);
    }
    if tree.find_all_by_tag(diagram, "polyline").is_empty() {
        return Err(LayoutError::NoSeries);
    }
    let data = tree
        .find_by_id(diagram, DATA_ID)
        .ok_or(LayoutError::MissingElement(DATA_ID))?;

    let mut line_attrs = Attributes::new()
        .with("fill", "none")
        .with("vector-effect", "non-scaling-stroke");
    if !attrs.is_some_and(|attrs| attrs.contains_key("stroke")) {
        line_attrs.set("stroke", colors.next_color());
    }
    if let Some(attrs) = attrs {
        line_attrs.merge(attrs, MergeMode::Override);
    }

    let line = tree.polyline(data, series.x(), series.y(), Some(&line_attrs))?;
    debug!(line:% = line, points = series.len(); "Added plot");
    Ok(line)
}

#[cfg(test)]
mod tests {
    use vellum_core::ColorCycle;

    use super::*;
    use crate::layout::DiagramBuilder;

    fn diagram(tree: &mut Tree) -> NodeId {
        let root = tree.root();
        let series = Series::new(vec![0.0, 1.0, 2.0], vec![1.0, 2.0, 3.0]).unwrap();
        DiagramBuilder::new(500, 300)
            .build(tree, root, &series, &mut ColorCycle::starting_at(0))
            .unwrap()
            .root()
    }

    fn second() -> Series {
        Series::new(vec![0.0, 2.0], vec![3.0, 1.0]).unwrap()
    }

    #[test]
    fn test_add_plot_shares_data_group() {
        let mut tree = Tree::new(500, 300);
        let root = diagram(&mut tree);
        let mut colors = ColorCycle::starting_at(10);

        let line = add_plot(&mut tree, root, &second(), None, &mut colors).unwrap();

        let lines = tree.find_all_by_tag(root, "polyline");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], line);
        assert_eq!(tree[line].parent(), tree[lines[0]].parent());

        let attrs = tree[line].attributes();
        assert_eq!(attrs.get_str("stroke"), Some("blueviolet"));
        assert_eq!(attrs.get_str("fill"), Some("none"));
        assert_eq!(attrs.get_str("vector-effect"), Some("non-scaling-stroke"));
    }

    #[test]
    fn test_caller_attributes_win() {
        let mut tree = Tree::new(500, 300);
        let root = diagram(&mut tree);
        let mut colors = ColorCycle::starting_at(0);
        let attrs = Attributes::from([("stroke", "red"), ("fill", "pink")]);

        let line = add_plot(&mut tree, root, &second(), Some(&attrs), &mut colors).unwrap();

        assert_eq!(tree[line].attributes().get_str("stroke"), Some("red"));
        assert_eq!(tree[line].attributes().get_str("fill"), Some("pink"));
        // No color was drawn.
        assert_eq!(colors.cursor(), 0);
    }

    #[test]
    fn test_add_plot_requires_diagram() {
        let mut tree = Tree::new(500, 300);
        let root = tree.root();
        let mut colors = ColorCycle::starting_at(0);
        assert_eq!(
            add_plot(&mut tree, root, &second(), None, &mut colors),
            Err(LayoutError::NotADiagram)
        );

        let empty = tree.group_with_id(root, DIAGRAM_ID, None);
        assert_eq!(
            add_plot(&mut tree, empty, &second(), None, &mut colors),
            Err(LayoutError::NoSeries)
        );
    }

    #[test]
    fn test_add_plot_requires_data_group() {
        let mut tree = Tree::new(500, 300);
        let root = tree.root();
        let shell = tree.group_with_id(root, DIAGRAM_ID, None);
        tree.polyline(shell, &[0.0], &[0.0], None).unwrap();

        let before = tree.to_svg_string();
        assert_eq!(
            add_plot(&mut tree, shell, &second(), None, &mut ColorCycle::starting_at(0)),
            Err(LayoutError::MissingElement(DATA_ID))
        );
        assert_eq!(tree.to_svg_string(), before);
    }
}
