// src/normalize.rs
//! Projection of raw CSV rows onto `(year, product, company)`.
//!
//! The normalizer is a forward-only iterator over a CSV reader. It yields one
//! `NormalizedRecord` per data row and stops at the first malformed row.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};

use crate::config::{ColumnConfig, ReportConfig};
use crate::error::{ReportError, Result};
use crate::types::NormalizedRecord;

pub struct Normalizer<R: Read> {
    rows: StringRecordsIntoIter<R>,
    columns: ColumnConfig,
    year_width: usize,
    source: Option<PathBuf>,
    failed: bool,
}

impl Normalizer<File> {
    /// Opens `path` for normalization.
    ///
    /// # Errors
    /// Returns `FileAccess` if the file cannot be opened.
    pub fn open(path: &Path, config: &ReportConfig) -> Result<Self> {
        let file = File::open(path).map_err(|e| ReportError::file_access(path, e))?;
        let mut normalizer = Self::from_reader(file, config);
        normalizer.source = Some(path.to_path_buf());
        Ok(normalizer)
    }
}

impl<R: Read> Normalizer<R> {
    #[must_use]
    pub fn from_reader(reader: R, config: &ReportConfig) -> Self {
        let rows = ReaderBuilder::new()
            .has_headers(config.skip_header)
            .delimiter(config.delimiter_byte())
            .flexible(true)
            .from_reader(reader)
            .into_records();
        Self {
            rows,
            columns: config.columns.clone(),
            year_width: config.year_width,
            source: None,
            failed: false,
        }
    }

    /// Read failures become `FileAccess` on the source path; anything else
    /// the CSV reader rejects is malformed input.
    fn read_error(&self, err: csv::Error) -> ReportError {
        if !err.is_io_error() {
            return ReportError::Csv(err);
        }
        let path = self
            .source
            .clone()
            .unwrap_or_else(|| PathBuf::from("<reader>"));
        ReportError::file_access(path, std::io::Error::from(err))
    }

    fn project(&self, row: &StringRecord) -> Result<NormalizedRecord> {
        let line = row.position().map_or(0, csv::Position::line);
        let field = |idx: usize| {
            row.get(idx).ok_or(ReportError::Format {
                line,
                found: row.len(),
                required: self.columns.required_fields(),
            })
        };

        let year = field(self.columns.year)?;
        let product = field(self.columns.product)?;
        let company = field(self.columns.company)?;

        Ok(NormalizedRecord {
            year: truncate_chars(year, self.year_width).to_string(),
            product: product.to_lowercase(),
            company: company.to_lowercase(),
            line,
        })
    }
}

impl<R: Read> Iterator for Normalizer<R> {
    type Item = Result<NormalizedRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = match self.rows.next()? {
            Ok(row) => self.project(&row),
            Err(e) => Err(self.read_error(e)),
        };
        self.failed = item.is_err();
        Some(item)
    }
}

/// Keeps the first `width` characters of `s`.
fn truncate_chars(s: &str, width: usize) -> &str {
    match s.char_indices().nth(width) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
