//! Markdown table report writer.

use super::{ReportError, RepositoryRecord, COLUMNS};
use std::io::Write;

/// Writes records as a Markdown table: a column row, a separator row, then
/// exactly one line per record.
///
/// Pipes in the name, tech stack and use case cells are escaped and line
/// breaks become spaces. URLs are written as-is.
///
/// # Errors
///
/// Returns [`ReportError`] if writing to `sink` fails.
pub fn write_markdown_table<W: Write>(
    records: &[RepositoryRecord],
    mut sink: W,
) -> Result<(), ReportError> {
    writeln!(sink, "| {} |", COLUMNS.join(" | "))?;
    writeln!(sink, "|{}", "---|".repeat(COLUMNS.len()))?;

    for record in records {
        writeln!(
            sink,
            "| {} | {} | {} | {} |",
            escape_cell(&record.name),
            escape_cell(&record.tech_stack),
            escape_cell(&record.use_case),
            record.url
        )?;
    }

    sink.flush()?;
    Ok(())
}

/// Escapes a value so it stays inside a single table cell.
fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', " ")
}
