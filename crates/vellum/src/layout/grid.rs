//! Background grid.

use vellum_core::{Attributes, NodeId, Tree};

use crate::{error::LayoutError, geometry::Point};

/// Id of the canonical vertical grid line.
pub const VERTICAL_LINE_ID: &str = "vLine";
/// Id of the canonical horizontal grid line.
pub const HORIZONTAL_LINE_ID: &str = "hLine";

/// Draws `count + 1` vertical and `count + 1` horizontal lines over a
/// `width` x `height` area starting at `origin`.
///
/// One vertical and one horizontal line are defined once in a `<defs>`
/// block; every grid line is a `<use>` of them at a whole-pixel offset.
///
/// # Errors
///
/// Fails with [`LayoutError::ZeroGridCount`] for `count == 0`.
pub fn grid(
    tree: &mut Tree,
    parent: NodeId,
    origin: Point,
    width: f64,
    height: f64,
    count: u32,
    attrs: Option<&Attributes>,
) -> Result<NodeId, LayoutError> {
    if count == 0 {
        return Err(LayoutError::ZeroGridCount);
    }

    let group = tree.group_with_id(parent, "grid", attrs);
    let defs = tree.defs(group);
    tree.line(
        defs,
        0.0,
        0.0,
        0.0,
        height,
        Some(&Attributes::from([("id", VERTICAL_LINE_ID)])),
    );
    tree.line(
        defs,
        0.0,
        0.0,
        width,
        0.0,
        Some(&Attributes::from([("id", HORIZONTAL_LINE_ID)])),
    );

    let cell_width = width / f64::from(count);
    let cell_height = height / f64::from(count);
    for i in 0..=count {
        let i = f64::from(i);
        let x = origin.x() + cell_width * i;
        let y = origin.y() + cell_height * i;
        tree.use_ref(
            group,
            VERTICAL_LINE_ID,
            Some(&Attributes::new().with("x", format!("{x:.0}"))),
        );
        tree.use_ref(
            group,
            HORIZONTAL_LINE_ID,
            Some(&Attributes::new().with("y", format!("{y:.0}"))),
        );
    }

    Ok(group)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_line_count() {
        let mut tree = Tree::new(500, 300);
        let root = tree.root();
        let group = grid(&mut tree, root, Point::default(), 430.0, 252.0, 10, None).unwrap();

        let uses = tree.find_all_by_tag(group, "use");
        assert_eq!(uses.len(), 22);
        assert_eq!(tree.find_all_by_tag(group, "line").len(), 2);
        assert_eq!(tree.find_by_id(group, VERTICAL_LINE_ID).map(|id| tree[id].tag()), Some("line"));
    }

    #[test]
    fn test_grid_offsets() {
        let mut tree = Tree::new(500, 300);
        let root = tree.root();
        let group = grid(&mut tree, root, Point::new(1.0, 2.0), 100.0, 50.0, 4, None).unwrap();

        let xs: Vec<&str> = tree
            .find_all_by_tag(group, "use")
            .into_iter()
            .filter_map(|id| tree[id].attributes().get_str("x"))
            .collect();
        assert_eq!(xs, vec!["1", "26", "51", "76", "101"]);

        let ys: Vec<&str> = tree
            .find_all_by_tag(group, "use")
            .into_iter()
            .filter_map(|id| tree[id].attributes().get_str("y"))
            .collect();
        assert_eq!(ys.len(), 5);
        assert_eq!(ys[0], "2");
        assert_eq!(ys[4], "52");
    }

    #[test]
    fn test_grid_rejects_zero_count() {
        let mut tree = Tree::new(100, 100);
        let root = tree.root();
        assert_eq!(
            grid(&mut tree, root, Point::default(), 10.0, 10.0, 0, None),
            Err(LayoutError::ZeroGridCount)
        );
        assert_eq!(tree.len(), 1);
    }
}
