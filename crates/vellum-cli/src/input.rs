//! Chart description loading.

use log::debug;

use vellum::chart::ChartSpec;

use crate::error::CliError;

/// Parses a TOML chart description.
///
/// # Errors
///
/// Returns [`CliError::Chart`] with the location of the offending input
/// when the text is not a valid chart description.
pub fn parse_chart(src: &str) -> Result<ChartSpec, CliError> {
    let chart: ChartSpec = toml::from_str(src).map_err(|err| CliError::Chart {
        message: err.message().to_string(),
        span: err.span(),
        src: src.to_string(),
    })?;

    debug!(series = chart.series.len(), display:% = chart.display; "Chart description parsed");
    Ok(chart)
}
