// src/config/io.rs
use std::fs;
use std::path::Path;

use super::types::ReportConfig;
use crate::error::{ReportError, Result};

pub const CONFIG_FILE: &str = "complaints.toml";

/// Parses TOML text into a config; missing keys fall back to defaults.
///
/// # Errors
/// Returns `ReportError::Config` on invalid TOML or unknown enum values.
pub fn parse_toml(content: &str) -> Result<ReportConfig> {
    toml::from_str(content).map_err(|e| ReportError::Config(e.to_string()))
}

/// Reads and parses a config file.
///
/// # Errors
/// Returns `ReportError::Config` if the file cannot be read or does not parse.
pub fn load_file(path: &Path) -> Result<ReportConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| ReportError::Config(format!("cannot read {}: {e}", path.display())))?;
    parse_toml(&content).map_err(|e| match e {
        ReportError::Config(msg) => ReportError::Config(format!("{}: {msg}", path.display())),
        other => other,
    })
}

/// Loads `complaints.toml` from `dir` when present, defaults otherwise.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub fn load_local(dir: &Path) -> Result<ReportConfig> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        load_file(&path)
    } else {
        Ok(ReportConfig::default())
    }
}
