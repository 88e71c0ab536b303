// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{ColumnConfig, LineTerminator, ReportConfig, RoundingMode};

use crate::error::{ReportError, Result};
use std::path::Path;

impl ReportConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the config for a run: an explicit file wins, then
    /// `complaints.toml` in the working directory, then defaults.
    ///
    /// # Errors
    /// Returns error if the chosen file cannot be read, parsed, or validated.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => io::load_file(path)?,
            None => {
                let cwd = std::env::current_dir()
                    .map_err(|e| ReportError::file_access(".", e))?;
                io::load_local(&cwd)?
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns `ReportError::Config` for a zero year width or a delimiter
    /// that is not a single ASCII byte.
    pub fn validate(&self) -> Result<()> {
        if self.year_width == 0 {
            return Err(ReportError::Config("year_width must be at least 1".into()));
        }
        if !self.delimiter.is_ascii() {
            return Err(ReportError::Config(format!(
                "delimiter '{}' is not a single ASCII character",
                self.delimiter
            )));
        }
        Ok(())
    }

    /// Delimiter as the byte the CSV reader expects.
    #[must_use]
    pub fn delimiter_byte(&self) -> u8 {
        u8::try_from(self.delimiter).unwrap_or(b',')
    }
}
