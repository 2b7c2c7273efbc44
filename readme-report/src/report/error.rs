//! Report writing error types.

use thiserror::Error;

/// Errors that can occur while serializing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Failed to write to the output sink.
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error.
    #[error("Failed to write CSV report: {0}")]
    Csv(#[from] csv::Error),
}
