pub mod aggregate;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod normalize;
pub mod report;
pub mod reporting;
pub mod summary;
pub mod types;
pub mod writer;

pub use aggregate::Aggregator;
pub use config::ReportConfig;
pub use error::{ReportError, Result};
pub use normalize::Normalizer;
pub use report::{generate, summarize};
pub use types::{NormalizedRecord, RunStats, SummaryRow, YearBounds, YearStats};
