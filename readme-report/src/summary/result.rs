//! Processing result types.

use crate::report::RepositoryRecord;

/// Result of processing a single repository.
#[derive(Debug, Clone)]
pub enum ProcessingResult {
    /// A README was found and fed to the extractors.
    Described {
        /// Report row for the repository.
        record: RepositoryRecord,
    },

    /// No README could be retrieved; the row carries sentinel values.
    MissingReadme {
        /// Report row for the repository.
        record: RepositoryRecord,
    },
}

impl ProcessingResult {
    /// Consumes the result, returning the report row.
    #[must_use]
    pub fn into_record(self) -> RepositoryRecord {
        match self {
            Self::Described { record } | Self::MissingReadme { record } => record,
        }
    }
}
