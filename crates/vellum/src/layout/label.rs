//! Value labels along an arbitrary line.

use log::trace;

use vellum_core::{Attributes, NodeId, Tree};

use crate::{error::LayoutError, geometry::Point, series::value_range};

/// Writes `count + 1` value labels evenly spaced from `from` to `to`.
///
/// The first label shows `min(values)`, the last `max(values)`, each with two
/// decimals. Label positions are rounded to whole pixels. The labels live in
/// a new group with class `label`; `attrs` override the default black fill.
///
/// # Errors
///
/// Fails with [`LayoutError::EmptyData`] for no values and
/// [`LayoutError::ZeroGridCount`] for `count == 0`.
pub fn label(
    tree: &mut Tree,
    parent: NodeId,
    from: Point,
    to: Point,
    values: &[f64],
    count: u32,
    attrs: Option<&Attributes>,
) -> Result<NodeId, LayoutError> {
    if values.is_empty() {
        return Err(LayoutError::EmptyData);
    }
    if count == 0 {
        return Err(LayoutError::ZeroGridCount);
    }

    let (min, max) = value_range(values);
    let steps = f64::from(count);
    let value_incr = (max - min) / steps;

    let diff = to.sub_point(from);
    let angle = if diff == Point::default() {
        0.0
    } else {
        diff.y().atan2(diff.x())
    };
    let step = from.distance(to) / steps;
    let (x_incr, y_incr) = (step * angle.cos(), step * angle.sin());
    trace!(angle, step, value_incr; "Placing labels");

    let defaults = Attributes::new().with("class", "label").with("fill", "black");
    let group_attrs = match attrs {
        Some(attrs) => Attributes::sum(&[&defaults, attrs]),
        None => defaults,
    };
    let group = tree.group(parent, Some(&group_attrs));

    for i in 0..=count {
        let i = f64::from(i);
        let x = (from.x() + x_incr * i).round();
        let y = (from.y() + y_incr * i).round();
        let value = min + value_incr * i;
        tree.text(group, x, y, &format!("{value:.2}"), None);
    }

    Ok(group)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tree: &Tree, group: NodeId) -> Vec<(f64, f64, String)> {
        tree[group]
            .children()
            .iter()
            .map(|&id| {
                let element = &tree[id];
                let x = element.attr("x").and_then(|v| v.as_float()).unwrap();
                let y = element.attr("y").and_then(|v| v.as_float()).unwrap();
                (x, y, element.text().to_string())
            })
            .collect()
    }

    #[test]
    fn test_horizontal_labels() {
        let mut tree = Tree::new(500, 300);
        let root = tree.root();
        let group = label(
            &mut tree,
            root,
            Point::new(0.0, 262.0),
            Point::new(430.0, 262.0),
            &[0.0, 1.0, 2.0, 3.0],
            3,
            None,
        )
        .unwrap();

        let labels = texts(&tree, group);
        assert_eq!(labels.len(), 4);
        assert_eq!(labels[0], (0.0, 262.0, "0.00".to_string()));
        assert_eq!(labels[1], (143.0, 262.0, "1.00".to_string()));
        assert_eq!(labels[3], (430.0, 262.0, "3.00".to_string()));
    }

    #[test]
    fn test_vertical_labels_run_upward() {
        let mut tree = Tree::new(500, 300);
        let root = tree.root();
        let group = label(
            &mut tree,
            root,
            Point::new(-5.0, 252.0),
            Point::new(-5.0, 0.0),
            &[0.0, 5.0, 2.0, 8.0],
            4,
            Some(&Attributes::from([("text-anchor", "end")])),
        )
        .unwrap();

        let labels = texts(&tree, group);
        assert_eq!(labels.len(), 5);
        assert_eq!(labels[0], (-5.0, 252.0, "0.00".to_string()));
        assert_eq!(labels[2], (-5.0, 126.0, "4.00".to_string()));
        assert_eq!(labels[4], (-5.0, 0.0, "8.00".to_string()));
        assert_eq!(tree[group].attributes().get_str("text-anchor"), Some("end"));
        assert_eq!(tree[group].attributes().get_str("fill"), Some("black"));
    }

    #[test]
    fn test_diagonal_labels_reach_the_end() {
        let mut tree = Tree::new(100, 100);
        let root = tree.root();
        let group = label(
            &mut tree,
            root,
            Point::new(0.0, 0.0),
            Point::new(40.0, 30.0),
            &[1.0, 2.0],
            2,
            None,
        )
        .unwrap();

        let labels = texts(&tree, group);
        assert_eq!(labels[1], (20.0, 15.0, "1.50".to_string()));
        assert_eq!(labels[2], (40.0, 30.0, "2.00".to_string()));
    }

    #[test]
    fn test_degenerate_line_stacks_labels() {
        let mut tree = Tree::new(100, 100);
        let point = Point::new(7.0, 7.0);
        let root = tree.root();
        let group = label(&mut tree, root, point, point, &[4.0], 2, None).unwrap();

        let labels = texts(&tree, group);
        assert!(labels.iter().all(|(x, y, text)| *x == 7.0 && *y == 7.0 && text == "4.00"));
    }

    #[test]
    fn test_label_preconditions() {
        let mut tree = Tree::new(100, 100);
        let root = tree.root();
        let (a, b) = (Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        assert_eq!(
            label(&mut tree, root, a, b, &[], 10, None),
            Err(LayoutError::EmptyData)
        );
        assert_eq!(
            label(&mut tree, root, a, b, &[1.0], 0, None),
            Err(LayoutError::ZeroGridCount)
        );
        assert_eq!(tree.len(), 1);
    }
}
