//! Response payloads consumed from the GitHub API.

use serde::Deserialize;

/// A repository as returned by the user repositories listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ListedRepository {
    /// Repository name.
    pub name: String,

    /// Browser URL of the repository.
    #[serde(default)]
    pub html_url: Option<String>,

    /// Short description set on the repository.
    #[serde(default)]
    pub description: Option<String>,

    /// Repository owner.
    #[serde(default)]
    pub owner: Option<RepositoryOwner>,
}

/// Owner of a listed repository.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryOwner {
    /// User or organization login.
    pub login: String,
}

impl ListedRepository {
    /// Returns the owner login, falling back to `default` when absent.
    #[must_use]
    pub fn owner_login<'a>(&'a self, default: &'a str) -> &'a str {
        self.owner
            .as_ref()
            .map_or(default, |owner| owner.login.as_str())
    }
}

/// README payload; `content` is base64 with embedded line breaks.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ReadmePayload {
    #[serde(default)]
    pub(crate) content: Option<String>,
}
