// src/summary.rs
//! Turns the aggregator's tables into ordered report rows.

use crate::aggregate::Aggregator;
use crate::config::RoundingMode;
use crate::types::{SummaryRow, YearStats};

/// Emits one row per `(product, year)` with at least one complaint.
///
/// Products come out in lexicographic order; each product covers the global
/// year range in ascending order, and years with no complaints are skipped.
/// Only recorded years are visited, so sparse or extreme years cost nothing
/// extra. An empty aggregator has an inverted range and yields nothing.
pub fn finalize(agg: &Aggregator, rounding: RoundingMode) -> Vec<SummaryRow> {
    let Some((min, max)) = agg.bounds().range() else {
        return Vec::new();
    };
    let mut rows = Vec::new();
    for product in agg.products() {
        let Some(years) = agg.product_years(product) else {
            continue;
        };
        for (&year, stats) in years.range(min..=max) {
            if stats.total_complaints == 0 {
                continue;
            }
            rows.push(SummaryRow {
                product: product.to_string(),
                year,
                total_complaints: stats.total_complaints,
                distinct_companies: stats.distinct_companies,
                percentage: top_company_share(stats, rounding),
            });
        }
    }
    rows
}

/// `round(max * 100 / total)` computed on integers, so ties are exact.
#[must_use]
pub fn top_company_share(stats: &YearStats, rounding: RoundingMode) -> u8 {
    let pct = round_ratio(
        u128::from(stats.max_company_complaints) * 100,
        u128::from(stats.total_complaints),
        rounding,
    );
    u8::try_from(pct.min(100)).unwrap_or(100)
}

/// Rounds `num / den` to the nearest integer. `den` of zero yields zero.
#[must_use]
pub fn round_ratio(num: u128, den: u128, rounding: RoundingMode) -> u128 {
    if den == 0 {
        return 0;
    }
    let quotient = num / den;
    let twice_rem = (num % den) * 2;
    let round_up = match twice_rem.cmp(&den) {
        std::cmp::Ordering::Less => false,
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Equal => match rounding {
            RoundingMode::HalfEven => quotient % 2 == 1,
            RoundingMode::HalfUp => true,
        },
    };
    if round_up {
        quotient + 1
    } else {
        quotient
    }
}
