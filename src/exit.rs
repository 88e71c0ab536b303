// src/exit.rs
//! Standardized process exit codes for `complaints`.
//!
//! Scripts can rely on 0 vs non-0; the specific codes separate a bad
//! environment from bad input data.

use std::process::Termination;

use crate::error::ReportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ReportExit {
    /// Report written successfully.
    Success = 0,
    /// Generic error (unreadable input, unwritable output, bad config).
    Error = 1,
    /// Input data rejected (short row, non-numeric year, malformed CSV).
    InvalidInput = 2,
}

impl ReportExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for a failed run.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<ReportError>() {
            Some(e) if e.is_input_error() => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

impl Termination for ReportExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
