//! Console output for finished runs.
//!
//! Everything goes to stderr so the report file stays the only artifact a
//! pipeline has to care about.

use colored::Colorize;
use std::path::Path;

use crate::types::RunStats;

/// Prints a short run summary to stderr.
pub fn print_summary(stats: &RunStats, input: &Path, output: &Path) {
    eprintln!(
        "{} {} {}",
        "complaints".cyan().bold(),
        "read".dimmed(),
        input.display()
    );
    eprintln!(
        "   {} {} records, {} products, years {}",
        "=".blue(),
        stats.records,
        stats.products,
        format_range(stats.year_range)
    );
    eprintln!(
        "   {} wrote {} {} to {}",
        "=".blue(),
        stats.rows_written,
        pluralize("row", stats.rows_written),
        output.display()
    );
    if stats.rows_written == 0 {
        eprintln!("{}", "No complaints found; report is empty.".yellow());
    } else {
        eprintln!("{}", "Report complete.".green().bold());
    }
}

/// Prints a failure line in the binary's error style.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {err:#}", "error:".red().bold());
}

fn format_range(range: Option<(i32, i32)>) -> String {
    match range {
        Some((lo, hi)) if lo == hi => lo.to_string(),
        Some((lo, hi)) => format!("{lo}-{hi}"),
        None => "none".to_string(),
    }
}

fn pluralize(word: &str, n: usize) -> String {
    if n == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
