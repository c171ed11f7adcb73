//! Complete diagrams: background, title, labels, grid and the first series.

use log::{debug, info};

use vellum_core::{Attributes, ColorSource, MergeMode, NodeId, Tree, TreeError, color::Color};

use crate::{
    config::{LayoutConfig, StyleConfig},
    error::LayoutError,
    geometry::{AxisScale, Point},
    series::{DisplayMode, Series},
};

use super::{
    frame::{DATA_ID, DIAGRAM_ID, PLOT_ID, PlotFrame},
    grid::grid,
    label::label,
    legend::legend_in_frame,
    plot::add_plot,
};

/// Id of the marker drawn on continuous series.
pub const MIDMARKER_ID: &str = "polyline-midmarker";
/// Id of the bar marker drawn on column series.
pub const COLUMN_MARKER_ID: &str = "column-marker";

/// Builder for a diagram of one data series.
///
/// # Examples
///
/// ```
/// use vellum::{layout::DiagramBuilder, series::{DisplayMode, Series}};
/// use vellum_core::{ColorCycle, Tree};
///
/// let mut tree = Tree::new(500, 300);
/// let root = tree.root();
/// let series = Series::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 5.0, 2.0, 8.0]).unwrap();
///
/// let diagram = DiagramBuilder::new(500, 300)
///     .with_title("My Plot")
///     .with_display_mode(DisplayMode::Continuous)
///     .build(&mut tree, root, &series, &mut ColorCycle::starting_at(0))
///     .unwrap();
///
/// assert_eq!(tree[diagram.root()].attributes().get_str("id"), Some("diagram"));
/// assert_eq!(tree.find_all_by_tag(diagram.root(), "polyline").len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct DiagramBuilder {
    width: u32,
    height: u32,
    origin: Point,
    title: String,
    display: DisplayMode,
    layout: LayoutConfig,
    style: StyleConfig,
}

impl DiagramBuilder {
    /// Creates a builder for a `width` x `height` diagram at the origin.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            origin: Point::default(),
            title: String::new(),
            display: DisplayMode::default(),
            layout: LayoutConfig::default(),
            style: StyleConfig::default(),
        }
    }

    /// Places the diagram's top-left corner at `origin` within its parent.
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_display_mode(mut self, display: DisplayMode) -> Self {
        self.display = display;
        self
    }

    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    /// Emits the diagram as the last child of `parent`.
    ///
    /// Two colors are taken from `colors`: one for the continuous-mode
    /// marker and one for the series stroke.
    ///
    /// # Errors
    ///
    /// Every precondition is checked before the first element is created, so
    /// on error the tree is unchanged:
    /// - [`LayoutError::WidthTooSmall`] / [`LayoutError::HeightTooSmall`]
    ///   below the configured minimum
    /// - [`LayoutError::ZeroGridCount`] for a zero grid count
    /// - [`LayoutError::PlotAreaTooSmall`] if the bands leave no plot area
    /// - [`LayoutError::InvalidColor`] for an unparsable style color
    /// - [`LayoutError::UnscalableRange`] if a value range is too narrow or
    ///   too wide to scale onto the plot area
    pub fn build(
        &self,
        tree: &mut Tree,
        parent: NodeId,
        series: &Series,
        colors: &mut dyn ColorSource,
    ) -> Result<Diagram, LayoutError> {
        tree.get(parent).ok_or(TreeError::UnknownNode(parent))?;

        let layout = &self.layout;
        if self.width < layout.min_width() {
            return Err(LayoutError::WidthTooSmall {
                width: self.width,
                min: layout.min_width(),
            });
        }
        if self.height < layout.min_height() {
            return Err(LayoutError::HeightTooSmall {
                height: self.height,
                min: layout.min_height(),
            });
        }
        if layout.grid_count() == 0 {
            return Err(LayoutError::ZeroGridCount);
        }

        let background = self.style.background_color().map_err(LayoutError::InvalidColor)?;
        let text_color = self.style.text_color().map_err(LayoutError::InvalidColor)?;
        let grid_color = self.style.grid_color().map_err(LayoutError::InvalidColor)?;
        let frame_color = self.style.frame_color().map_err(LayoutError::InvalidColor)?;

        let width = f64::from(self.width);
        let height = f64::from(self.height);
        let margin = layout.plot_margin();
        let plot_width = width - layout.label_band();
        let plot_height = height - layout.title_height() - layout.bottom_band();
        if plot_width <= 2.0 * margin || plot_height <= 2.0 * margin {
            return Err(LayoutError::PlotAreaTooSmall {
                width: plot_width,
                height: plot_height,
            });
        }

        let (x_min, x_max) = series.x_range();
        let (y_min, y_max) = series.y_range();
        let x_axis = AxisScale::fit(x_min, x_max, plot_width)
            .ok_or(LayoutError::UnscalableRange {
                axis: "x",
                min: x_min,
                max: x_max,
            })?;
        let y_axis = AxisScale::fit(y_min, y_max, plot_height)
            .ok_or(LayoutError::UnscalableRange {
                axis: "y",
                min: y_min,
                max: y_max,
            })?;

        info!(
            width = self.width,
            height = self.height,
            points = series.len(),
            display:% = self.display;
            "Building diagram"
        );

        // Page
        let root_attrs = Attributes::new()
            .with("width", self.width)
            .with("height", self.height)
            .with("id", DIAGRAM_ID)
            .with("transform", format!("translate({}, {})", self.origin.x(), self.origin.y()));
        let root = tree.group(parent, Some(&root_attrs));
        tree.rect(
            root,
            0.0,
            0.0,
            width,
            height,
            Some(&Attributes::new().with("fill", &background)),
        );
        tree.text(
            root,
            width / 2.0,
            3.0 * layout.title_height() / 4.0,
            &self.title,
            Some(
                &Attributes::new()
                    .with("text-anchor", "middle")
                    .with("fill", &text_color)
                    .with("id", "title"),
            ),
        );

        // Labels, in plot coordinates
        let plot = tree.group_with_id(
            root,
            PLOT_ID,
            Some(&Attributes::translate(layout.label_band(), layout.title_height())),
        );
        let gap = layout.text_height() / 2.0;
        label(
            tree,
            plot,
            Point::new(-gap, plot_height - margin),
            Point::new(-gap, margin),
            series.y(),
            layout.grid_count(),
            Some(
                &Attributes::new()
                    .with("id", "y-labels")
                    .with("text-anchor", "end")
                    .with("fill", &text_color),
            ),
        )?;
        let baseline = plot_height + layout.text_height();
        label(
            tree,
            plot,
            Point::new(margin, baseline),
            Point::new(plot_width - margin, baseline),
            series.x(),
            layout.grid_count(),
            Some(
                &Attributes::new()
                    .with("id", "x-labels")
                    .with("text-anchor", "start")
                    .with("fill", &text_color),
            ),
        )?;

        // Viewport with the y axis pointing up
        let view = tree.svg_with_view_box(
            plot,
            plot_width,
            plot_height,
            0.0,
            0.0,
            plot_width,
            plot_height,
            None,
        );
        let cartesian = tree.translate(view, 0.0, plot_height);
        tree.add_attributes(cartesian, &Attributes::scale(1.0, -1.0), MergeMode::Append);
        tree.set_attr(cartesian, "fill", "none");

        let inner = tree.translate(cartesian, margin, margin);
        tree.add_attributes(
            inner,
            &Attributes::scale(
                (plot_width - 2.0 * margin) / plot_width,
                (plot_height - 2.0 * margin) / plot_height,
            ),
            MergeMode::Append,
        );
        grid(
            tree,
            inner,
            Point::default(),
            plot_width,
            plot_height,
            layout.grid_count(),
            Some(&Attributes::new().with("stroke", &grid_color).with("stroke-width", 1)),
        )?;

        // Scaled data group
        let data = tree.translate(inner, x_axis.shift(), y_axis.shift());
        tree.set_id(data, DATA_ID);
        tree.add_attributes(
            data,
            &Attributes::scale(x_axis.scale(), y_axis.scale()),
            MergeMode::Append,
        );

        let defs = tree.defs(data);
        let marker_color = colors.next_color();
        let midmarker = tree.marker(defs, MIDMARKER_ID, Some(&marker_attrs(&marker_color, "auto")));
        tree.circle(midmarker, 0.0, 0.0, 1.0, None);

        let stroke = colors.next_color();
        let mut line_attrs = Attributes::new()
            .with("fill", "none")
            .with("stroke", &stroke)
            .with("vector-effect", "non-scaling-stroke");
        match self.display {
            DisplayMode::Continuous => {
                line_attrs.set("marker-mid", format!("url(#{MIDMARKER_ID})"));
            }
            DisplayMode::Column => {
                // The stroke stays set for the legend but the line is hidden.
                let bar = format!("url(#{COLUMN_MARKER_ID})");
                line_attrs.set("stroke-opacity", 0);
                line_attrs.set("marker-start", &bar);
                line_attrs.set("marker-mid", &bar);
                line_attrs.set("marker-end", &bar);
                let column =
                    tree.marker(defs, COLUMN_MARKER_ID, Some(&marker_attrs(&stroke, "fixed")));
                tree.rect(column, 0.0, 0.0, 1.0, 1000.0, None);
            }
        }
        let polyline = tree.polyline(data, series.x(), series.y(), Some(&line_attrs))?;

        tree.rect(
            cartesian,
            0.0,
            0.0,
            plot_width,
            plot_height,
            Some(&Attributes::new().with("stroke", &frame_color).with("stroke-width", 3)),
        );

        debug!(root:% = root, data:% = data, stroke = stroke.as_str(); "Diagram built");

        Ok(Diagram {
            root,
            plot,
            data,
            polyline,
            frame: PlotFrame::new(
                self.height,
                Point::new(layout.label_band(), layout.title_height()),
            ),
            x_axis,
            y_axis,
            layout: *layout,
            style: self.style.clone(),
        })
    }
}

fn marker_attrs(stroke: &str, orient: &str) -> Attributes {
    Attributes::new()
        .with("viewBox", "0 0 10 10")
        .with("preserveAspectRatio", "xMidYMid meet")
        .with("refX", 5)
        .with("refY", 5)
        .with("stroke", stroke)
        .with("fill", "none")
        .with("orient", orient)
        .with("vector-effect", "non-scaling-stroke")
}

/// Handle to an emitted diagram.
///
/// Keeps the ids of the groups later operations write into and the
/// geometry they need, so overlays never re-read emitted markup.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram {
    root: NodeId,
    plot: NodeId,
    data: NodeId,
    polyline: NodeId,
    frame: PlotFrame,
    x_axis: AxisScale,
    y_axis: AxisScale,
    layout: LayoutConfig,
    style: StyleConfig,
}

impl Diagram {
    /// The diagram root, carrying `id="diagram"`.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The group holding labels and the plot viewport.
    pub fn plot(&self) -> NodeId {
        self.plot
    }

    /// The scaled group holding every series polyline.
    pub fn data(&self) -> NodeId {
        self.data
    }

    /// The polyline of the first series.
    pub fn polyline(&self) -> NodeId {
        self.polyline
    }

    pub fn frame(&self) -> PlotFrame {
        self.frame
    }

    pub fn x_axis(&self) -> AxisScale {
        self.x_axis
    }

    pub fn y_axis(&self) -> AxisScale {
        self.y_axis
    }

    /// Recolors the first series, including its column marker.
    pub fn set_stroke(&self, tree: &mut Tree, stroke: &Color) {
        tree.set_attr(self.polyline, "stroke", stroke);
        if let Some(marker) = tree.find_by_id(self.data, COLUMN_MARKER_ID) {
            tree.set_attr(marker, "stroke", stroke);
        }
    }

    /// Adds another series on the same axes. See [`add_plot`].
    pub fn add_plot(
        &self,
        tree: &mut Tree,
        series: &Series,
        attrs: Option<&Attributes>,
        colors: &mut dyn ColorSource,
    ) -> Result<NodeId, LayoutError> {
        add_plot(tree, self.root, series, attrs, colors)
    }

    /// Adds a legend with one description per series.
    ///
    /// Uses the retained frame instead of parsing the plot transform. See
    /// [`legend`](fn@super::legend) for the layout and the errors.
    pub fn legend<S: AsRef<str>>(
        &self,
        tree: &mut Tree,
        descriptions: &[S],
    ) -> Result<NodeId, LayoutError> {
        legend_in_frame(
            tree,
            self.root,
            self.frame,
            descriptions,
            &self.layout,
            &self.style,
        )
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use vellum_core::{AttrValue, ColorCycle};

    use super::*;

    fn sample() -> Series {
        Series::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 5.0, 2.0, 8.0]).unwrap()
    }

    fn build(tree: &mut Tree, builder: &DiagramBuilder) -> Result<Diagram, LayoutError> {
        let root = tree.root();
        builder.build(tree, root, &sample(), &mut ColorCycle::starting_at(0))
    }

    #[test]
    fn test_diagram_structure() {
        let mut tree = Tree::new(500, 300);
        let builder = DiagramBuilder::new(500, 300).with_title("My Plot");
        let diagram = build(&mut tree, &builder).unwrap();

        let root = &tree[diagram.root()];
        assert_eq!(root.attributes().get_str("id"), Some(DIAGRAM_ID));
        assert_eq!(root.attr("width"), Some(&AttrValue::Int(500)));
        assert_eq!(root.attr("height"), Some(&AttrValue::Int(300)));
        assert_eq!(root.attributes().get_str("transform"), Some("translate(0, 0)"));

        let title = tree.find_by_id(diagram.root(), "title").unwrap();
        assert_eq!(tree[title].text(), "My Plot");

        assert_eq!(tree.find_by_id(diagram.root(), PLOT_ID), Some(diagram.plot()));
        assert_eq!(tree.find_by_id(diagram.root(), DATA_ID), Some(diagram.data()));
        assert_eq!(
            tree.find_all_by_tag(diagram.root(), "polyline"),
            vec![diagram.polyline()]
        );
        // 11 y labels and 11 x labels plus the title
        assert_eq!(tree.find_all_by_tag(diagram.root(), "text").len(), 23);
    }

    #[test]
    fn test_axis_scales() {
        let mut tree = Tree::new(500, 300);
        let diagram = build(&mut tree, &DiagramBuilder::new(500, 300)).unwrap();

        // Plot area is 430 x 252.
        assert!(approx_eq!(f64, diagram.x_axis().scale(), 430.0 / 3.0));
        assert!(approx_eq!(f64, diagram.y_axis().scale(), 252.0 / 8.0));
        assert_eq!(diagram.x_axis().shift(), 0.0);

        let transform = tree[diagram.data()].attributes().get_str("transform").unwrap();
        assert!(transform.starts_with("translate(0, 0) scale("));
    }

    #[test]
    fn test_frame_matches_emitted_transform() {
        let mut tree = Tree::new(500, 300);
        let diagram = build(&mut tree, &DiagramBuilder::new(500, 300)).unwrap();
        assert_eq!(PlotFrame::recover(&tree, diagram.root()), Ok(diagram.frame()));
    }

    #[test]
    fn test_continuous_mode_markers() {
        let mut tree = Tree::new(500, 300);
        let diagram = build(&mut tree, &DiagramBuilder::new(500, 300)).unwrap();

        let line = tree[diagram.polyline()].attributes();
        // The cycle hands out aliceblue for the marker, then antiquewhite.
        assert_eq!(line.get_str("stroke"), Some("antiquewhite"));
        assert_eq!(line.get_str("marker-mid"), Some("url(#polyline-midmarker)"));
        assert!(tree.find_by_id(diagram.root(), COLUMN_MARKER_ID).is_none());

        let marker = tree.find_by_id(diagram.root(), MIDMARKER_ID).unwrap();
        assert_eq!(tree[marker].attributes().get_str("stroke"), Some("aliceblue"));
    }

    #[test]
    fn test_column_mode_markers() {
        let mut tree = Tree::new(500, 300);
        let builder = DiagramBuilder::new(500, 300).with_display_mode(DisplayMode::Column);
        let diagram = build(&mut tree, &builder).unwrap();

        let line = tree[diagram.polyline()].attributes();
        assert_eq!(line.get_str("marker-mid"), Some("url(#column-marker)"));
        assert_eq!(line.get("stroke-opacity"), Some(&AttrValue::Int(0)));
        assert_eq!(line.get_str("stroke"), Some("antiquewhite"));

        let marker = tree.find_by_id(diagram.root(), COLUMN_MARKER_ID).unwrap();
        assert_eq!(tree[marker].attributes().get_str("orient"), Some("fixed"));
        assert_eq!(tree.find_all_by_tag(marker, "rect").len(), 1);

        diagram.set_stroke(&mut tree, &Color::new("teal").unwrap());
        assert_eq!(tree[marker].attributes().get_str("stroke"), Some("teal"));
        assert_eq!(
            tree[diagram.polyline()].attributes().get_str("stroke"),
            Some("teal")
        );
    }

    #[test]
    fn test_frame_is_drawn_last() {
        let mut tree = Tree::new(500, 300);
        let diagram = build(&mut tree, &DiagramBuilder::new(500, 300)).unwrap();

        let view = tree.find_all_by_tag(diagram.plot(), "svg")[0];
        let cartesian = tree[view].children()[0];
        let last = *tree[cartesian].children().last().unwrap();
        assert_eq!(tree[last].tag(), "rect");
        assert_eq!(tree[last].attr("stroke-width"), Some(&AttrValue::Int(3)));
        assert_eq!(
            tree[cartesian].attributes().get_str("transform"),
            Some("translate(0, 252) scale(1, -1)")
        );
    }

    #[test]
    fn test_origin() {
        let mut tree = Tree::new(800, 600);
        let builder = DiagramBuilder::new(500, 300).with_origin(Point::new(40.0, 12.5));
        let diagram = build(&mut tree, &builder).unwrap();
        assert_eq!(
            tree[diagram.root()].attributes().get_str("transform"),
            Some("translate(40, 12.5)")
        );
    }

    #[test]
    fn test_dimension_minimums() {
        let mut tree = Tree::new(500, 300);
        assert_eq!(
            build(&mut tree, &DiagramBuilder::new(99, 300)).unwrap_err(),
            LayoutError::WidthTooSmall { width: 99, min: 100 }
        );
        assert_eq!(
            build(&mut tree, &DiagramBuilder::new(500, 50)).unwrap_err(),
            LayoutError::HeightTooSmall { height: 50, min: 100 }
        );
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_invalid_configuration_emits_nothing() {
        let mut tree = Tree::new(500, 300);

        let zero_grid = DiagramBuilder::new(500, 300)
            .with_layout(LayoutConfig::default().with_grid_count(0));
        assert_eq!(build(&mut tree, &zero_grid).unwrap_err(), LayoutError::ZeroGridCount);

        let wide_band = DiagramBuilder::new(500, 300)
            .with_layout(LayoutConfig::default().with_label_band(498.0));
        assert!(matches!(
            build(&mut tree, &wide_band).unwrap_err(),
            LayoutError::PlotAreaTooSmall { .. }
        ));

        let bad_color = DiagramBuilder::new(500, 300)
            .with_style(StyleConfig::default().with_background_color("nope"));
        assert!(matches!(
            build(&mut tree, &bad_color).unwrap_err(),
            LayoutError::InvalidColor(_)
        ));

        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_default_style_builds() {
        let mut tree = Tree::new(500, 300);
        let diagram = build(&mut tree, &DiagramBuilder::new(500, 300)).unwrap();

        let view = tree.find_all_by_tag(diagram.plot(), "svg")[0];
        let cartesian = tree[view].children()[0];
        let frame = *tree[cartesian].children().last().unwrap();
        assert_eq!(tree[frame].attributes().get_str("stroke"), Some("gray"));
    }

    #[test]
    fn test_unscalable_ranges_emit_nothing() {
        let mut tree = Tree::new(500, 300);
        let root = tree.root();
        let mut colors = ColorCycle::starting_at(0);

        let narrow = Series::new(vec![0.0, 5e-324], vec![1.0, 2.0]).unwrap();
        assert_eq!(
            DiagramBuilder::new(500, 300)
                .build(&mut tree, root, &narrow, &mut colors)
                .unwrap_err(),
            LayoutError::UnscalableRange {
                axis: "x",
                min: 0.0,
                max: 5e-324,
            }
        );

        let wide = Series::new(vec![0.0, 1.0], vec![-1e308, 1e308]).unwrap();
        assert!(matches!(
            DiagramBuilder::new(500, 300).build(&mut tree, root, &wide, &mut colors),
            Err(LayoutError::UnscalableRange { axis: "y", .. })
        ));

        assert_eq!(tree.len(), 1);
    }
}
