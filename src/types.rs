// src/types.rs
use serde::Serialize;

/// One complaint, reduced to the three fields the summary groups on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    /// Leading characters of the date column; parsed later by the aggregator.
    pub year: String,
    pub product: String,
    pub company: String,
    /// 1-based line in the source file, 0 when the record was built in memory.
    pub line: u64,
}

impl NormalizedRecord {
    #[must_use]
    pub fn new(year: &str, product: &str, company: &str) -> Self {
        Self {
            year: year.to_string(),
            product: product.to_string(),
            company: company.to_string(),
            line: 0,
        }
    }

    #[must_use]
    pub fn at_line(mut self, line: u64) -> Self {
        self.line = line;
        self
    }
}

/// Exact (product, year, company) identity of a complaint counter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompositeKey {
    pub product: String,
    pub year: i32,
    pub company: String,
}

/// Running statistics for one product in one year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YearStats {
    /// Most complaints filed against a single company so far.
    pub max_company_complaints: u64,
    pub total_complaints: u64,
    pub distinct_companies: u64,
}

/// Smallest and largest year seen. Starts inverted so the first year sets both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearBounds {
    pub min: i32,
    pub max: i32,
}

impl YearBounds {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: i32::MAX,
            max: i32::MIN,
        }
    }

    pub fn observe(&mut self, year: i32) {
        if year < self.min {
            self.min = year;
        }
        if year > self.max {
            self.max = year;
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    /// The observed range, `None` before any year was seen.
    #[must_use]
    pub fn range(&self) -> Option<(i32, i32)> {
        if self.is_empty() {
            None
        } else {
            Some((self.min, self.max))
        }
    }
}

impl Default for YearBounds {
    fn default() -> Self {
        Self::empty()
    }
}

/// One line of the output report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub product: String,
    pub year: i32,
    pub total_complaints: u64,
    pub distinct_companies: u64,
    /// Share of the top company, 0..=100.
    pub percentage: u8,
}

/// Counters describing a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub records: u64,
    pub products: usize,
    pub rows_written: usize,
    pub year_range: Option<(i32, i32)>,
}
