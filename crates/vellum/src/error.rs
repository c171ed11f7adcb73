//! Error types for chart layout and the top-level Vellum API.
//!
//! - [`LayoutError`]: a precondition of a diagram, plot, label or legend
//!   operation did not hold. Nothing is emitted when one is returned.
//! - [`VellumError`]: everything [`ChartBuilder`](crate::ChartBuilder) can
//!   fail with, including configuration and I/O problems.

use std::io;

use thiserror::Error;

use vellum_core::TreeError;

/// Errors raised by the layout engine.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("unknown display mode `{0}`, expected `column` or `continuous`")]
    UnknownDisplayMode(String),

    #[error("data set is empty")]
    EmptyData,

    #[error("data pair has uneven length: {x} x values, {y} y values")]
    LengthMismatch { x: usize, y: usize },

    #[error("x values are not sorted: x[{index}] = {value} follows {previous}")]
    UnsortedX {
        index: usize,
        previous: f64,
        value: f64,
    },

    #[error("{axis} value at index {index} is not a finite number")]
    NonFiniteValue { axis: &'static str, index: usize },

    #[error("{axis} range [{min}, {max}] cannot be scaled onto the plot area")]
    UnscalableRange {
        axis: &'static str,
        min: f64,
        max: f64,
    },

    #[error("diagram width {width} is below the minimum of {min}")]
    WidthTooSmall { width: u32, min: u32 },

    #[error("diagram height {height} is below the minimum of {min}")]
    HeightTooSmall { height: u32, min: u32 },

    #[error("no room left for the plot area ({width} x {height}) after the title and label bands")]
    PlotAreaTooSmall { width: f64, height: f64 },

    #[error("no room for a legend ({width} x {height}) left of the plot area")]
    NoLegendRoom { width: f64, height: f64 },

    #[error("grid count must be at least 1")]
    ZeroGridCount,

    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("node is not a diagram root (missing `id=\"diagram\"`)")]
    NotADiagram,

    #[error("diagram holds no plotted series")]
    NoSeries,

    #[error("could not find the `{0}` group of the diagram")]
    MissingElement(&'static str),

    #[error("plot group of the diagram has no transform attribute")]
    MissingTransform,

    #[error("could not decode plot offsets from transform `{0}`")]
    UnparseableTransform(String),

    #[error("diagram root has no integer height attribute")]
    MissingPageHeight,

    #[error(
        "number of plotted series is not the same as the number of descriptions: \
         {series} series, {descriptions} descriptions {given:?}"
    )]
    DescriptionCountMismatch {
        series: usize,
        descriptions: usize,
        given: Vec<String>,
    },

    #[error("series {index} has no stroke attribute")]
    MissingStroke { index: usize },

    #[error("stroke attribute of series {index} is not a color string")]
    InvalidStroke { index: usize },

    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// The main error type for Vellum operations.
#[derive(Debug, Error)]
pub enum VellumError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),

    #[error("Invalid chart: {0}")]
    Input(String),
}
