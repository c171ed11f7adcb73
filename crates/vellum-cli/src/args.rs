//! Command-line argument definitions for the Vellum CLI.
//!
//! [`Args`] is parsed from the command line using [`clap`]. Arguments select
//! the chart description, the output path, the configuration file and the
//! logging verbosity.

use clap::Parser;

/// Command-line arguments for the Vellum chart tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the chart description (TOML)
    #[arg(help = "Path to the input chart description")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Index into the named color table where series colors start.
    /// A random offset is used when omitted.
    #[arg(long)]
    pub color_offset: Option<usize>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
