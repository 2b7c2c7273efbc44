//! Repository listing and README retrieval via the GitHub REST API.
//!
//! Listing failures are reported as [`FetchError`] so callers can abort the
//! run. README failures are absorbed here and surface as an absent README.

mod config;
mod error;
mod repository;

pub use config::{ClientConfig, DEFAULT_TIMEOUT};
pub use error::FetchError;
pub use repository::{ListedRepository, RepositoryOwner};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use octocrab::Octocrab;
use repository::ReadmePayload;
use octocrab::service::middleware::retry::RetryConfig;
use tracing::{debug, info, info_span, warn, Instrument};

/// Repositories requested from the listing endpoint (single page only).
pub const REPOSITORIES_PER_PAGE: u8 = 100;

/// Thin GitHub API client for the two endpoints the report needs.
#[derive(Clone)]
pub struct GitHubClient {
    octocrab: Octocrab,
}

impl GitHubClient {
    /// Builds a client from the provided configuration.
    ///
    /// Requests are sent once; octocrab's built-in retries are disabled.
    ///
    /// # Errors
    ///
    /// Returns [`octocrab::Error`] if the base URL is invalid or the
    /// underlying HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, octocrab::Error> {
        let mut builder = Octocrab::builder()
            .set_connect_timeout(Some(config.timeout()))
            .set_read_timeout(Some(config.timeout()))
            .add_retry_config(RetryConfig::None);

        if let Some(token) = config.token() {
            builder = builder.personal_token(token.to_string());
        }
        if let Some(base_uri) = config.base_uri() {
            builder = builder.base_uri(base_uri)?;
        }

        Ok(Self {
            octocrab: builder.build()?,
        })
    }

    /// Lists the first page of a user's public repositories.
    ///
    /// Repositories past [`REPOSITORIES_PER_PAGE`] are not requested.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Status`] on any non-success status, whatever the
    /// response body, and other [`FetchError`] variants on transport or
    /// decoding failures.
    pub async fn list_repositories(
        &self,
        username: &str,
    ) -> Result<Vec<ListedRepository>, FetchError> {
        let span = info_span!("list_repositories", username = %username);

        async {
            info!("Listing repositories");

            let route = format!("/users/{username}/repos?per_page={REPOSITORIES_PER_PAGE}");
            let response = self.octocrab._get(route).await?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            let body = self.octocrab.body_to_string(response).await?;
            let repositories: Vec<ListedRepository> = serde_json::from_str(&body)?;

            info!(count = repositories.len(), "Listed repositories");
            Ok(repositories)
        }
        .instrument(span)
        .await
    }

    /// Fetches and decodes a repository's README.
    ///
    /// Returns `None` when the README is missing, the request fails, the
    /// payload has no content, or the content is not valid base64. Invalid
    /// UTF-8 is replaced rather than rejected.
    pub async fn get_readme(&self, owner: &str, repo: &str) -> Option<String> {
        let span = info_span!("get_readme", repo = %format!("{owner}/{repo}"));

        async {
            let route = format!("/repos/{owner}/{repo}/readme");
            let payload: ReadmePayload = match self.octocrab.get(route, None::<&()>).await {
                Ok(payload) => payload,
                Err(e) => {
                    let error = FetchError::from(e);
                    match error.status_code() {
                        Some(status) => debug!(status, "README not available"),
                        None => warn!(error = %error, "Failed to fetch README"),
                    }
                    return None;
                }
            };

            let Some(content) = payload.content else {
                debug!("README payload has no content");
                return None;
            };

            let decoded = decode_content(&content);
            if decoded.is_none() {
                warn!("README content is not valid base64");
            }
            decoded
        }
        .instrument(span)
        .await
    }
}

/// Decodes base64 README content, ignoring embedded whitespace.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD.
#[must_use]
pub fn decode_content(content: &str) -> Option<String> {
    let compact: String = content.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD.decode(compact).ok()?;
    Some(String::from_utf8_lossy(&bytes).into_owned())
}
