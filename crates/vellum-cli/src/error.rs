//! Errors reported by the CLI.

use std::{io, ops::Range};

use thiserror::Error;

use vellum::VellumError;

/// Error returned by [`run`](crate::run).
#[derive(Debug, Error)]
pub enum CliError {
    /// The chart description could not be parsed.
    ///
    /// Keeps the input text so the failing location can be shown.
    #[error("Invalid chart description: {message}")]
    Chart {
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },

    #[error(transparent)]
    Vellum(#[from] VellumError),
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Vellum(err.into())
    }
}
