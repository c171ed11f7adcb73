//! CLI logic for the Vellum chart tool.
//!
//! Reads a TOML chart description, renders it with [`vellum::ChartBuilder`]
//! and writes the SVG document.

pub mod error_adapter;

mod args;
mod config;
mod error;
mod input;

pub use args::Args;
pub use error::CliError;

use std::fs;

use log::info;

use vellum::{ChartBuilder, ColorCycle};

/// Run the Vellum CLI application
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Chart description errors
/// - Layout errors
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing chart"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;
    let chart = input::parse_chart(&source)?;

    let mut colors = match args.color_offset {
        Some(offset) => ColorCycle::starting_at(offset),
        None => ColorCycle::new(),
    };
    let builder = ChartBuilder::new(app_config);
    let svg = builder.render_svg(&chart, &mut colors)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
