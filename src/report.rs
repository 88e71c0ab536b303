// src/report.rs
//! End-to-end pipeline: normalize, aggregate, finalize, write.

use std::io::Read;
use std::path::Path;

use crate::aggregate::Aggregator;
use crate::config::ReportConfig;
use crate::error::Result;
use crate::normalize::Normalizer;
use crate::summary;
use crate::types::{RunStats, SummaryRow};
use crate::writer;

/// Summarizes CSV read from `reader` without touching the filesystem.
///
/// # Errors
/// Returns the first format, validation, or CSV error in the input.
pub fn summarize<R: Read>(reader: R, config: &ReportConfig) -> Result<(Vec<SummaryRow>, RunStats)> {
    let mut agg = Aggregator::new();
    agg.consume(Normalizer::from_reader(reader, config))?;
    Ok(finish(&agg, config))
}

/// Reads `input`, writes the report to `output`.
///
/// The output file is only created once the whole input has been
/// aggregated, so a rejected input leaves no partial report behind.
///
/// # Errors
/// Returns `FileAccess` for unreadable input or unwritable output, and the
/// first input error otherwise.
pub fn generate(input: &Path, output: &Path, config: &ReportConfig) -> Result<RunStats> {
    let mut agg = Aggregator::new();
    agg.consume(Normalizer::open(input, config)?)?;
    let (rows, stats) = finish(&agg, config);
    writer::write_file(output, &rows, config)?;
    Ok(stats)
}

fn finish(agg: &Aggregator, config: &ReportConfig) -> (Vec<SummaryRow>, RunStats) {
    let rows = summary::finalize(agg, config.rounding);
    let stats = RunStats {
        records: agg.records(),
        products: agg.products().count(),
        rows_written: rows.len(),
        year_range: agg.bounds().range(),
    };
    (rows, stats)
}
