//! Report serialization.

mod csv_writer;
mod error;
mod markdown;
mod record;

pub use csv_writer::write_csv;
pub use error::ReportError;
pub use markdown::write_markdown_table;
pub use record::RepositoryRecord;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Report column titles, in output order.
pub const COLUMNS: [&str; 4] = ["Name", "Tech Stack", "Use Case", "URL"];

/// Supported report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Markdown table.
    #[default]
    Markdown,
    /// Comma-separated values.
    Csv,
}

impl OutputFormat {
    /// Returns the command line name of the format.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "md" => Ok(Self::Markdown),
            "csv" => Ok(Self::Csv),
            other => Err(format!("unknown output format '{other}', expected 'md' or 'csv'")),
        }
    }
}

/// Writes `records` to `sink` in the requested format.
///
/// # Errors
///
/// Returns [`ReportError`] if serialization or writing fails.
pub fn write_report<W: Write>(
    format: OutputFormat,
    records: &[RepositoryRecord],
    sink: W,
) -> Result<(), ReportError> {
    match format {
        OutputFormat::Markdown => write_markdown_table(records, sink),
        OutputFormat::Csv => write_csv(records, sink),
    }
}
