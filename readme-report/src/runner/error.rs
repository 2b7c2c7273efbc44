//! Runner error types.

use crate::github::FetchError;
use crate::report::ReportError;

/// Errors that can occur while generating a report.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// GitHub API client initialization errors.
    #[error(transparent)]
    Client(#[from] octocrab::Error),

    /// The repository listing could not be fetched.
    #[error("Failed to fetch repositories: {}", describe_listing_failure(.0))]
    Listing(#[source] FetchError),

    /// The output file could not be created.
    #[error("Failed to create output file '{path}': {source}")]
    Output {
        /// Path of the output file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The report could not be written.
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl RunnerError {
    /// Process exit code for this failure.
    ///
    /// A failed repository listing exits with 1; every other failure exits
    /// with 2.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Listing(_) => 1,
            _ => 2,
        }
    }
}

/// Status code when there is one, otherwise the first line of the error.
///
/// octocrab errors can carry a multi-line backtrace in their display text.
fn describe_listing_failure(error: &FetchError) -> String {
    match error.status_code() {
        Some(status) => status.to_string(),
        None => error
            .to_string()
            .lines()
            .next()
            .unwrap_or_default()
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_failure_names_status_code() {
        let error = RunnerError::Listing(FetchError::Status(503));
        assert_eq!(error.to_string(), "Failed to fetch repositories: 503");
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn listing_failure_without_status_is_one_line() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let error = RunnerError::Listing(FetchError::Json(source));

        let message = error.to_string();
        assert!(message.starts_with("Failed to fetch repositories: Invalid JSON response"));
        assert_eq!(message.lines().count(), 1);
    }

    #[test]
    fn report_failures_exit_with_two() {
        let error = RunnerError::Report(ReportError::Io(std::io::Error::other("disk full")));
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn output_failures_name_the_path() {
        let error = RunnerError::Output {
            path: "/nope/report.md".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(error.to_string().contains("/nope/report.md"));
        assert_eq!(error.exit_code(), 2);
    }
}
