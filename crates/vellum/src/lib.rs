//! Vellum - Programmatic SVG charts.
//!
//! Turns numeric series into diagrams with a title, value labels, a grid,
//! scaled polylines or columns, and a legend. Built on the element tree of
//! [`vellum_core`].

pub mod chart;
pub mod config;
pub mod geometry;
pub mod layout;
pub mod series;

mod error;

pub use vellum_core::{ColorCycle, ColorSource, Tree};

pub use error::{LayoutError, VellumError};

use log::{debug, info};

use vellum_core::Attributes;

use chart::ChartSpec;
use config::AppConfig;
use layout::DiagramBuilder;

/// Builder for rendering chart descriptions.
///
/// # Examples
///
/// ```
/// use vellum::{ChartBuilder, ColorCycle, chart::ChartSpec, config::AppConfig};
///
/// let chart: ChartSpec = toml::from_str(r#"
///     width = 500
///     height = 300
///     title = "My Plot"
///
///     [[series]]
///     x = [0, 1, 2, 3]
///     y = [0, 5, 2, 8]
/// "#).unwrap();
///
/// let builder = ChartBuilder::new(AppConfig::default());
/// let svg = builder
///     .render_svg(&chart, &mut ColorCycle::starting_at(0))
///     .expect("Failed to render");
/// assert!(svg.contains("id=\"diagram\""));
/// ```
#[derive(Debug, Default)]
pub struct ChartBuilder {
    config: AppConfig,
}

impl ChartBuilder {
    /// Create a new chart builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Builds the element tree for `chart`.
    ///
    /// The first series creates the diagram, the others are added on its
    /// axes. A legend is added when every series has a label. Stroke colors
    /// not given by the series come from `colors`.
    ///
    /// # Errors
    ///
    /// Returns [`VellumError::Config`] for invalid style colors,
    /// [`VellumError::Input`] for a chart without series or with an invalid
    /// stroke, and [`VellumError::Layout`] when a layout precondition fails.
    pub fn build_tree(
        &self,
        chart: &ChartSpec,
        colors: &mut dyn ColorSource,
    ) -> Result<Tree, VellumError> {
        info!(
            width = chart.width,
            height = chart.height,
            series = chart.series.len();
            "Building chart"
        );

        self.config.style().validate().map_err(VellumError::Config)?;
        let Some((first, rest)) = chart.series.split_first() else {
            return Err(VellumError::Input("chart has no series".to_string()));
        };
        let first_stroke = first.stroke_color()?;

        let mut tree = Tree::new(chart.width, chart.height);
        if let Some(href) = &chart.stylesheet {
            tree.set_stylesheet(href);
        }

        let root = tree.root();
        let diagram = DiagramBuilder::new(chart.width, chart.height)
            .with_title(&chart.title)
            .with_display_mode(chart.display)
            .with_layout(*self.config.layout())
            .with_style(self.config.style().clone())
            .build(&mut tree, root, &first.to_series()?, colors)?;
        if let Some(stroke) = first_stroke {
            diagram.set_stroke(&mut tree, &stroke);
        }

        for spec in rest {
            let attrs = spec
                .stroke_color()?
                .map(|stroke| Attributes::new().with("stroke", &stroke));
            diagram.add_plot(&mut tree, &spec.to_series()?, attrs.as_ref(), colors)?;
        }

        let labels: Option<Vec<&str>> =
            chart.series.iter().map(|s| s.label.as_deref()).collect();
        match labels {
            Some(labels) => {
                diagram.legend(&mut tree, &labels)?;
            }
            None => debug!("Not every series has a label, skipping legend"),
        }

        info!(elements = tree.len(); "Chart built");
        Ok(tree)
    }

    /// Renders `chart` to an SVG document string.
    ///
    /// # Errors
    ///
    /// See [`ChartBuilder::build_tree`].
    pub fn render_svg(
        &self,
        chart: &ChartSpec,
        colors: &mut dyn ColorSource,
    ) -> Result<String, VellumError> {
        let tree = self.build_tree(chart, colors)?;
        Ok(tree.to_svg_string())
    }
}
