//! Report row type.

use serde::Serialize;

/// One report row, built once per listed repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryRecord {
    /// Repository name.
    pub name: String,

    /// Derived tech stack summary (or the "Not found" sentinel).
    pub tech_stack: String,

    /// Derived use case paragraph (or the "Not described" sentinel).
    pub use_case: String,

    /// Browser URL of the repository; empty when the API omitted it.
    pub url: String,
}

impl RepositoryRecord {
    /// Creates a new record.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        tech_stack: impl Into<String>,
        use_case: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            tech_stack: tech_stack.into(),
            use_case: use_case.into(),
            url: url.into(),
        }
    }
}
