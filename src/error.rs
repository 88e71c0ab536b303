// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot access {path}: {source}")]
    FileAccess {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("line {line}: expected at least {required} fields, found {found}")]
    Format {
        line: u64,
        found: usize,
        required: usize,
    },

    #[error("line {line}: year '{value}' is not an integer")]
    Validation { line: u64, value: String },

    #[error("malformed CSV input: {0}")]
    Csv(#[from] csv::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl ReportError {
    /// Wraps an I/O failure with the path that caused it.
    #[must_use]
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::FileAccess {
            source,
            path: path.into(),
        }
    }

    /// True for errors caused by the content of the input rather than the
    /// environment it was read from.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        match self {
            ReportError::Format { .. } | ReportError::Validation { .. } => true,
            ReportError::Csv(e) => !e.is_io_error(),
            ReportError::FileAccess { .. } | ReportError::Config(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;

// Allow `?` on std::io::Error by converting to ReportError::FileAccess with unknown path.
impl From<std::io::Error> for ReportError {
    fn from(source: std::io::Error) -> Self {
        ReportError::FileAccess {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
