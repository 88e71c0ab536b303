// src/writer.rs
//! Headerless CSV output of summary rows.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{Terminator, WriterBuilder};

use crate::config::{LineTerminator, ReportConfig};
use crate::error::{ReportError, Result};
use crate::types::SummaryRow;

/// Serializes `rows` to `out` as comma-separated values, whatever delimiter
/// the input used. Fields are quoted only when they must be.
///
/// # Errors
/// Returns error if serialization or the underlying writer fails.
pub fn write_rows<W: Write>(out: W, rows: &[SummaryRow], config: &ReportConfig) -> Result<()> {
    let terminator = match config.line_terminator {
        LineTerminator::Lf => Terminator::Any(b'\n'),
        LineTerminator::Crlf => Terminator::CRLF,
    };
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .delimiter(b',')
        .terminator(terminator)
        .from_writer(out);

    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Creates (or truncates) `path` and writes the report into it.
///
/// # Errors
/// Returns `FileAccess` if the file cannot be created or written.
pub fn write_file(path: &Path, rows: &[SummaryRow], config: &ReportConfig) -> Result<()> {
    let file = File::create(path).map_err(|e| ReportError::file_access(path, e))?;
    write_rows(file, rows, config).map_err(|e| match e {
        ReportError::FileAccess { source, .. } => ReportError::file_access(path, source),
        ReportError::Csv(c) if c.is_io_error() => {
            ReportError::file_access(path, std::io::Error::from(c))
        }
        other => other,
    })
}
