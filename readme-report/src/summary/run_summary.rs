//! Run summary types.

use super::result::ProcessingResult;
use crate::report::OutputFormat;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of repositories returned by the listing.
    pub repositories_listed: usize,

    /// Number of repositories whose README was retrieved.
    pub readmes_found: usize,

    /// Number of repositories without a retrievable README.
    pub readmes_missing: usize,

    /// Format the report was written in.
    pub format: OutputFormat,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            ..Default::default()
        }
    }

    /// Updates the summary with a processing result.
    pub fn record_result(&mut self, result: &ProcessingResult) {
        self.repositories_listed += 1;
        match result {
            ProcessingResult::Described { .. } => self.readmes_found += 1,
            ProcessingResult::MissingReadme { .. } => self.readmes_missing += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::RepositoryRecord;

    #[test]
    fn can_record_result() {
        let mut summary = RunSummary::new(OutputFormat::Csv);
        let record = RepositoryRecord::new("repo", "Rust", "A tool.", "https://x/repo");

        summary.record_result(&ProcessingResult::Described {
            record: record.clone(),
        });
        summary.record_result(&ProcessingResult::MissingReadme { record });

        assert_eq!(summary.repositories_listed, 2);
        assert_eq!(summary.readmes_found, 1);
        assert_eq!(summary.readmes_missing, 1);
        assert_eq!(summary.format, OutputFormat::Csv);
    }
}
