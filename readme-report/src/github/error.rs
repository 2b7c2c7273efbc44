//! GitHub fetch error types.

use thiserror::Error;

/// Errors that can occur while talking to the GitHub API.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The API answered with a non-success HTTP status.
    #[error("HTTP status {0}")]
    Status(u16),

    /// GitHub API or transport error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The response body was not the expected JSON.
    #[error("Invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

impl FetchError {
    /// Returns the HTTP status code if the API answered with an error status.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status(status) => Some(*status),
            Self::GitHubError(octocrab::Error::GitHub { source, .. }) => {
                Some(source.status_code.as_u16())
            }
            Self::GitHubError(_) | Self::Json(_) => None,
        }
    }
}
