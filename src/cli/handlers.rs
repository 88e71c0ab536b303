// src/cli/handlers.rs
//! Report command handler.

use anyhow::{Context, Result};

use super::args::Cli;
use crate::config::ReportConfig;
use crate::exit::ReportExit;
use crate::report;
use crate::reporting;

/// Runs one report generation for the parsed arguments.
///
/// # Errors
/// Returns error if the config cannot be loaded or the report fails.
pub fn handle_report(cli: &Cli) -> Result<ReportExit> {
    let config = ReportConfig::load(cli.config.as_deref()).context("loading settings")?;

    let stats = report::generate(&cli.input, &cli.output, &config)
        .with_context(|| format!("generating report from {}", cli.input.display()))?;

    if cli.verbose {
        reporting::print_summary(&stats, &cli.input, &cli.output);
    }
    Ok(ReportExit::Success)
}
