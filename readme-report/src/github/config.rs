//! GitHub client configuration.

use std::time::Duration;

/// Default timeout applied to connecting to and reading from the API.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings used to construct a [`GitHubClient`](super::GitHubClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Personal access token; requests are unauthenticated when absent.
    token: Option<String>,
    /// API base URL override (e.g. a GitHub Enterprise host).
    base_uri: Option<String>,
    /// Connect and read timeout for every request.
    timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            token: None,
            base_uri: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Creates an unauthenticated configuration against the public API.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access token. Empty or whitespace-only tokens are ignored.
    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|token| !token.trim().is_empty());
        self
    }

    /// Sets a custom API base URL.
    #[must_use]
    pub fn with_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = Some(base_uri.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the configured token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the API base URL override, if any.
    pub fn base_uri(&self) -> Option<&str> {
        self.base_uri.as_deref()
    }

    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_tokens_are_treated_as_absent() {
        let config = ClientConfig::new().with_token(Some("  ".to_string()));
        assert_eq!(config.token(), None);

        let config = ClientConfig::new().with_token(Some("ghp_abc".to_string()));
        assert_eq!(config.token(), Some("ghp_abc"));
    }

    #[test]
    fn defaults_use_public_api() {
        let config = ClientConfig::default();
        assert_eq!(config.base_uri(), None);
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    }
}
