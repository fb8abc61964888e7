//! Export error types.

use thiserror::Error;

use tecpa_db::DbError;

/// Errors raised while exporting the sales history.
///
/// An empty history is not an error; see
/// [`ExportOutcome::NothingToExport`](crate::ExportOutcome::NothingToExport).
#[derive(Debug, Error)]
pub enum ReportError {
    /// Reading the sales failed.
    #[error("Database error: {0}")]
    Db(#[from] DbError),

    /// The TrueType font family could not be loaded.
    #[error("Font not found: {0}")]
    FontNotFound(String),

    /// Layout, rendering or writing the output file failed.
    #[error("Render failed: {0}")]
    Render(String),
}

impl From<genpdf::error::Error> for ReportError {
    fn from(err: genpdf::error::Error) -> Self {
        ReportError::Render(err.to_string())
    }
}

/// Result type for export operations.
pub type ReportResult<T> = Result<T, ReportError>;
