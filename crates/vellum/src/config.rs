//! Configuration types for Vellum chart rendering.
//!
//! This module provides configuration structures that control how diagrams
//! are laid out and styled. All types implement [`serde::Deserialize`] and
//! fall back to the built-in defaults for every missing field.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining layout and style settings.
//! - [`LayoutConfig`] - Page partitioning metrics: bands, margins, grid count and minimum sizes.
//! - [`StyleConfig`] - Colors used for the background, text, grid and plot frame.
//!
//! # Example
//!
//! ```
//! # use vellum::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().grid_count(), 10);
//! assert!(config.style().validate().is_ok());
//! ```

use serde::Deserialize;

use vellum_core::color::Color;

/// Top-level application configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Metrics used to partition a diagram page.
///
/// ```text
///  ┌──────────────── width ────────────────┐
///  │              title band               │ title_height
///  ├────────────┬──────────────────────────┤
///  │ label band │        plot area         │
///  │  (y axis)  │                          │
///  ├────────────┼──────────────────────────┤
///  │            │   bottom band (x axis)   │ label_band / 3
///  └────────────┴──────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    title_height: f64,
    text_height: f64,
    label_band: f64,
    plot_margin: f64,
    grid_count: u32,
    legend_margin: f64,
    min_width: u32,
    min_height: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            title_height: 25.0,
            text_height: 10.0,
            label_band: 70.0,
            plot_margin: 2.0,
            grid_count: 10,
            legend_margin: 5.0,
            min_width: 100,
            min_height: 100,
        }
    }
}

impl LayoutConfig {
    /// Height of the band holding the title.
    pub fn title_height(&self) -> f64 {
        self.title_height
    }

    /// Height of one line of label text.
    pub fn text_height(&self) -> f64 {
        self.text_height
    }

    /// Width of the band left of the plot holding the y labels.
    pub fn label_band(&self) -> f64 {
        self.label_band
    }

    /// Height of the band below the plot holding the x labels.
    pub fn bottom_band(&self) -> f64 {
        (self.label_band / 3.0).floor()
    }

    /// Inner margin between the plot frame and the grid.
    pub fn plot_margin(&self) -> f64 {
        self.plot_margin
    }

    /// Number of grid cells per axis. Labels and grid lines number one more.
    pub fn grid_count(&self) -> u32 {
        self.grid_count
    }

    pub fn legend_margin(&self) -> f64 {
        self.legend_margin
    }

    pub fn min_width(&self) -> u32 {
        self.min_width
    }

    pub fn min_height(&self) -> u32 {
        self.min_height
    }

    /// Sets the number of grid cells per axis.
    pub fn with_grid_count(mut self, count: u32) -> Self {
        self.grid_count = count;
        self
    }

    /// Sets the title band height.
    pub fn with_title_height(mut self, height: f64) -> Self {
        self.title_height = height;
        self
    }

    /// Sets the left label band width.
    pub fn with_label_band(mut self, width: f64) -> Self {
        self.label_band = width;
        self
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Colors are kept as CSS strings and parsed on access.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    background_color: String,
    text_color: String,
    grid_color: String,
    frame_color: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: "white".to_string(),
            text_color: "black".to_string(),
            grid_color: "black".to_string(),
            frame_color: "gray".to_string(),
        }
    }
}

impl StyleConfig {
    /// Returns the parsed background [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Color, String> {
        Color::new(&self.background_color)
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the parsed color of titles, labels and legend text.
    pub fn text_color(&self) -> Result<Color, String> {
        Color::new(&self.text_color).map_err(|err| format!("Invalid text color in config: {err}"))
    }

    /// Returns the parsed color of the grid lines.
    pub fn grid_color(&self) -> Result<Color, String> {
        Color::new(&self.grid_color).map_err(|err| format!("Invalid grid color in config: {err}"))
    }

    /// Returns the parsed color of the frame drawn around the plot area.
    pub fn frame_color(&self) -> Result<Color, String> {
        Color::new(&self.frame_color)
            .map_err(|err| format!("Invalid frame color in config: {err}"))
    }

    /// Checks that every configured color parses.
    pub fn validate(&self) -> Result<(), String> {
        self.background_color()?;
        self.text_color()?;
        self.grid_color()?;
        self.frame_color()?;
        Ok(())
    }

    /// Sets the background color string.
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = color.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_defaults() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.title_height(), 25.0);
        assert_eq!(layout.label_band(), 70.0);
        assert_eq!(layout.bottom_band(), 23.0);
        assert_eq!(layout.grid_count(), 10);
        assert_eq!(layout.min_width(), 100);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r##"
            [layout]
            grid_count = 4

            [style]
            background_color = "#fafafa"
            "##,
        )
        .unwrap();

        assert_eq!(config.layout().grid_count(), 4);
        assert_eq!(config.layout().title_height(), 25.0);
        assert_eq!(config.style().background_color().unwrap().as_css(), "#fafafa");
        assert_eq!(config.style().text_color().unwrap().as_css(), "black");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(*config.layout(), LayoutConfig::default());
        assert_eq!(*config.style(), StyleConfig::default());
    }

    #[test]
    fn test_invalid_color_is_reported() {
        let style = StyleConfig::default().with_background_color("not-a-color");
        let err = style.validate().unwrap_err();
        assert!(err.contains("background color"));
    }
}
