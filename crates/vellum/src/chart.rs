//! Declarative chart descriptions.
//!
//! A [`ChartSpec`] describes a whole chart: page size, title, display mode
//! and any number of series. [`ChartBuilder`](crate::ChartBuilder) turns it
//! into a tree. Descriptions deserialize from TOML:
//!
//! ```toml
//! width = 500
//! height = 300
//! title = "Rainfall"
//! display = "continuous"
//!
//! [[series]]
//! label = "2024"
//! x = [1, 2, 3]
//! y = [40.5, 12.0, 33.1]
//! ```

use serde::Deserialize;

use vellum_core::color::Color;

use crate::{
    error::{LayoutError, VellumError},
    series::{DisplayMode, Series},
};

/// A complete chart description.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartSpec {
    /// Page width.
    pub width: u32,
    /// Page height.
    pub height: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub display: DisplayMode,
    /// External CSS stylesheet referenced from the document prologue.
    #[serde(default)]
    pub stylesheet: Option<String>,
    /// Series in drawing order. The first one defines the axes.
    #[serde(default)]
    pub series: Vec<SeriesSpec>,
}

/// One series of a [`ChartSpec`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeriesSpec {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// Legend text. A legend is drawn only when every series has one.
    #[serde(default)]
    pub label: Option<String>,
    /// Stroke color; taken from the color source when absent.
    #[serde(default)]
    pub stroke: Option<String>,
}

impl SeriesSpec {
    /// Validates the values into a [`Series`].
    pub fn to_series(&self) -> Result<Series, LayoutError> {
        Series::new(self.x.clone(), self.y.clone())
    }

    /// Parses the configured stroke color, if any.
    pub fn stroke_color(&self) -> Result<Option<Color>, VellumError> {
        self.stroke
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| VellumError::Input(format!("Invalid series stroke: {err}")))
    }
}
