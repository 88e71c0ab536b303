// src/aggregate.rs
//! Single-pass fold of normalized records into per-product, per-year stats.

use std::collections::{BTreeMap, HashMap};

use crate::error::{ReportError, Result};
use crate::types::{CompositeKey, NormalizedRecord, YearBounds, YearStats};

/// Owns every accumulator of one run.
///
/// Products and their years are kept in `BTreeMap`s so the finalizer reads
/// them in order without a separate sort.
#[derive(Debug, Default)]
pub struct Aggregator {
    counts: HashMap<CompositeKey, u64>,
    stats: BTreeMap<String, BTreeMap<i32, YearStats>>,
    bounds: YearBounds,
    records: u64,
}

impl Aggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one record into the running tables.
    ///
    /// # Errors
    /// Returns `ReportError::Validation` if the year is not an integer. The
    /// tables are left untouched in that case.
    pub fn record(&mut self, rec: NormalizedRecord) -> Result<()> {
        let year = parse_year(&rec.year).ok_or_else(|| ReportError::Validation {
            line: rec.line,
            value: rec.year.clone(),
        })?;
        self.bounds.observe(year);
        self.records += 1;

        let NormalizedRecord {
            product, company, ..
        } = rec;

        let occurrences = {
            let key = CompositeKey {
                product: product.clone(),
                year,
                company,
            };
            let count = self.counts.entry(key).or_insert(0);
            *count += 1;
            *count
        };

        let entry = self
            .stats
            .entry(product)
            .or_default()
            .entry(year)
            .or_default();

        entry.total_complaints += 1;
        if occurrences > entry.max_company_complaints {
            entry.max_company_complaints = occurrences;
        }
        if occurrences == 1 {
            entry.distinct_companies += 1;
        }
        Ok(())
    }

    /// Drains a record stream, stopping at the first error.
    ///
    /// # Errors
    /// Propagates the first normalization or validation error.
    pub fn consume<I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = Result<NormalizedRecord>>,
    {
        for rec in records {
            self.record(rec?)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn bounds(&self) -> YearBounds {
        self.bounds
    }

    /// Number of records folded so far.
    #[must_use]
    pub fn records(&self) -> u64 {
        self.records
    }

    #[must_use]
    pub fn products(&self) -> impl Iterator<Item = &str> {
        self.stats.keys().map(String::as_str)
    }

    /// Per-year stats of one product, `None` for a product never seen.
    #[must_use]
    pub fn product_years(&self, product: &str) -> Option<&BTreeMap<i32, YearStats>> {
        self.stats.get(product)
    }

    /// Stats for `(product, year)`, all-zero when nothing was recorded.
    #[must_use]
    pub fn stats(&self, product: &str, year: i32) -> YearStats {
        self.stats
            .get(product)
            .and_then(|years| years.get(&year))
            .copied()
            .unwrap_or_default()
    }

    /// Complaints counted for one exact `(product, year, company)` triple.
    #[must_use]
    pub fn company_complaints(&self, product: &str, year: i32, company: &str) -> u64 {
        let key = CompositeKey {
            product: product.to_string(),
            year,
            company: company.to_string(),
        };
        self.counts.get(&key).copied().unwrap_or(0)
    }
}

/// Integer year from the truncated date field: surrounding whitespace
/// is ignored and a leading sign is accepted.
fn parse_year(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}
