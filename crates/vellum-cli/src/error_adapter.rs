//! Error adapter for converting [`CliError`] to miette diagnostics.
//!
//! Chart description errors carry the input text and the failing location,
//! so they are rendered with a source snippet. Every other error is rendered
//! as a plain message with a diagnostic code.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use vellum::{LayoutError, VellumError};

use crate::error::CliError;

/// Adapter for [`CliError`].
pub struct ErrorAdapter<'a>(pub &'a CliError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            CliError::Chart { .. } => "vellum::chart",
            CliError::Vellum(err) => match err {
                VellumError::Io(_) => "vellum::io",
                VellumError::Config(_) => "vellum::config",
                VellumError::Layout(_) => "vellum::layout",
                VellumError::Tree(_) => "vellum::tree",
                VellumError::Input(_) => "vellum::input",
            },
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            CliError::Vellum(VellumError::Layout(err)) => match err {
                LayoutError::UnsortedX { .. } => "x values must be in ascending order",
                LayoutError::WidthTooSmall { .. } | LayoutError::HeightTooSmall { .. } => {
                    "increase the chart `width` and `height`"
                }
                LayoutError::UnknownDisplayMode(_) => {
                    "use `display = \"continuous\"` or `display = \"column\"`"
                }
                _ => return None,
            },
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self.0 {
            CliError::Chart { src, .. } => Some(src as &dyn miette::SourceCode),
            CliError::Vellum(_) => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let CliError::Chart {
            message,
            span: Some(span),
            ..
        } = self.0
        else {
            return None;
        };

        let span = SourceSpan::new(span.start.into(), span.len());
        Some(Box::new(std::iter::once(LabeledSpan::new_primary_with_span(
            Some(message.clone()),
            span,
        ))))
    }
}
