//! CSV report writer.

use super::{ReportError, RepositoryRecord, COLUMNS};
use std::io::Write;

/// Writes records as CSV with a `Name,Tech Stack,Use Case,URL` header.
///
/// Fields containing commas, quotes or line breaks are quoted.
///
/// # Errors
///
/// Returns [`ReportError`] if writing to `sink` fails.
pub fn write_csv<W: Write>(records: &[RepositoryRecord], sink: W) -> Result<(), ReportError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(sink);

    writer.write_record(COLUMNS)?;
    for record in records {
        writer.write_record([
            record.name.as_str(),
            record.tech_stack.as_str(),
            record.use_case.as_str(),
            record.url.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
