//! Sales aggregation
//!
//! Scans the record collection for the revenue leader, the unit-sales leader
//! and the most popular model year. Pure functions of the input sequence;
//! the records are never mutated.

use crate::domain::errors::ShowroomError;
use crate::domain::result::Result;
use crate::domain::sale::SaleRecord;
use crate::domain::summary::SalesSummary;
use std::collections::HashMap;

/// Parses a currency-formatted price string into a decimal number
///
/// Exactly one leading `$` is stripped (along with surrounding whitespace);
/// no further locale handling is applied.
///
/// # Errors
///
/// Returns [`ShowroomError::MalformedRecord`] if the remainder is empty or
/// not parseable as a number. A malformed price never coerces to zero.
pub fn parse_price(raw: &str) -> Result<f64> {
    let stripped = raw.trim();
    let stripped = stripped.strip_prefix('$').unwrap_or(stripped).trim();

    if stripped.is_empty() {
        return Err(ShowroomError::MalformedRecord(format!(
            "price '{raw}' has no digits after the currency symbol"
        )));
    }

    stripped.parse::<f64>().map_err(|_| {
        ShowroomError::MalformedRecord(format!("price '{raw}' is not a valid number"))
    })
}

/// Computes the revenue of a single record (price × units sold)
pub fn revenue(record: &SaleRecord) -> Result<f64> {
    Ok(parse_price(&record.price)? * f64::from(record.total_sales))
}

/// Aggregates the record collection into a [`SalesSummary`]
///
/// Revenue and unit-sales maxima are tracked independently in one pass under
/// strict `>` comparisons against zero sentinels, so the first-encountered
/// record wins ties. If no record strictly exceeds the sentinels (all
/// revenues and sales are zero), the first record is selected with its
/// computed amounts.
///
/// The popular year is the model year with the highest record count; equal
/// counts are broken deterministically in favor of the smallest year.
///
/// # Errors
///
/// Returns [`ShowroomError::EmptyDataset`] for an empty input and
/// [`ShowroomError::MalformedRecord`] if any price fails to parse.
pub fn aggregate(records: &[SaleRecord]) -> Result<SalesSummary> {
    if records.is_empty() {
        return Err(ShowroomError::EmptyDataset);
    }

    let mut top_revenue_idx = 0usize;
    let mut top_revenue_amount = 0.0f64;
    let mut top_sales_idx = 0usize;
    let mut top_sales_count = 0u32;

    for (idx, record) in records.iter().enumerate() {
        let amount = revenue(record)?;
        if amount > top_revenue_amount {
            top_revenue_amount = amount;
            top_revenue_idx = idx;
        }
        if record.total_sales > top_sales_count {
            top_sales_count = record.total_sales;
            top_sales_idx = idx;
        }
    }

    let mut year_counts: HashMap<i32, usize> = HashMap::new();
    for record in records {
        *year_counts.entry(record.car.year).or_insert(0) += 1;
    }

    // Highest count wins; smallest year on equal counts.
    let popular_year = year_counts
        .iter()
        .max_by(|(year_a, count_a), (year_b, count_b)| {
            count_a.cmp(count_b).then(year_b.cmp(year_a))
        })
        .map(|(year, _)| *year)
        .expect("non-empty input implies at least one year");

    let popular_year_sales = records
        .iter()
        .filter(|record| record.car.year == popular_year)
        .map(|record| u64::from(record.total_sales))
        .sum();

    Ok(SalesSummary {
        top_revenue: records[top_revenue_idx].clone(),
        top_revenue_amount,
        top_sales: records[top_sales_idx].clone(),
        top_sales_count,
        popular_year,
        popular_year_sales,
    })
}
