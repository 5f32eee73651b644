//! Aggregation result model
//!
//! The summary is computed once per run by the aggregator and consumed by the
//! formatter. It owns clones of the winning records so the input sequence
//! stays untouched.

use crate::domain::sale::SaleRecord;

/// Computed maxima and year statistics for one run
#[derive(Debug, Clone, PartialEq)]
pub struct SalesSummary {
    /// Record with the highest revenue (price × units sold)
    pub top_revenue: SaleRecord,

    /// Revenue of the top-revenue record
    pub top_revenue_amount: f64,

    /// Record with the highest unit sales
    pub top_sales: SaleRecord,

    /// Unit sales of the top-sales record
    pub top_sales_count: u32,

    /// Model year occurring most often across all records
    pub popular_year: i32,

    /// Total units sold across records of the popular year
    pub popular_year_sales: u64,
}
