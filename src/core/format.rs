//! Report formatting
//!
//! Turns the aggregation result into human-readable summary lines and the
//! record collection into the tabular grid handed to the PDF renderer. Pure
//! formatting over already-validated data; no failure modes.

use crate::domain::sale::SaleRecord;
use crate::domain::summary::SalesSummary;

/// Column headers of the report table
pub const TABLE_HEADER: [&str; 4] = ["ID", "Car", "Price", "Total Sales"];

/// Produces the three summary lines of the report
///
/// Order is fixed: revenue leader, sales leader, most popular year.
pub fn summary_lines(summary: &SalesSummary) -> Vec<String> {
    vec![
        format!(
            "The {} generated the most revenue: ${:.2}",
            summary.top_revenue.car.display_name(),
            summary.top_revenue_amount
        ),
        format!(
            "The {} had the most sales: {}",
            summary.top_sales.car.display_name(),
            summary.top_sales_count
        ),
        format!(
            "The most popular year was {} with {} sales.",
            summary.popular_year, summary.popular_year_sales
        ),
    ]
}

/// Turns the record collection into a grid of table rows
///
/// The first row is the header; each following row holds one record in
/// original input order.
pub fn tabulate(records: &[SaleRecord]) -> Vec<Vec<String>> {
    let mut table = Vec::with_capacity(records.len() + 1);
    table.push(TABLE_HEADER.iter().map(|s| s.to_string()).collect());

    for record in records {
        table.push(vec![
            record.id.to_string(),
            record.car.display_name(),
            record.price.clone(),
            record.total_sales.to_string(),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sale::{Car, RecordId};

    fn record(id: i64, make: &str, model: &str, year: i32, price: &str, sales: u32) -> SaleRecord {
        SaleRecord {
            id: RecordId::Number(id),
            car: Car {
                make: make.to_string(),
                model: model.to_string(),
                year,
            },
            price: price.to_string(),
            total_sales: sales,
        }
    }

    fn summary() -> SalesSummary {
        SalesSummary {
            top_revenue: record(1, "Tesla", "Model 3", 2020, "$40000.00", 5),
            top_revenue_amount: 200000.0,
            top_sales: record(2, "Toyota", "Corolla", 2020, "$20000.00", 10),
            top_sales_count: 10,
            popular_year: 2020,
            popular_year_sales: 15,
        }
    }

    #[test]
    fn test_summary_lines_content() {
        let lines = summary_lines(&summary());

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "The Tesla Model 3 (2020) generated the most revenue: $200000.00"
        );
        assert_eq!(lines[1], "The Toyota Corolla (2020) had the most sales: 10");
        assert_eq!(lines[2], "The most popular year was 2020 with 15 sales.");
    }

    #[test]
    fn test_tabulate_header_and_rows() {
        let records = vec![
            record(1, "Tesla", "Model 3", 2020, "$40000.00", 5),
            record(2, "Toyota", "Corolla", 2020, "$20000.00", 10),
        ];

        let table = tabulate(&records);

        assert_eq!(table.len(), 3);
        assert_eq!(table[0], vec!["ID", "Car", "Price", "Total Sales"]);
        assert_eq!(
            table[1],
            vec!["1", "Tesla Model 3 (2020)", "$40000.00", "5"]
        );
        assert_eq!(
            table[2],
            vec!["2", "Toyota Corolla (2020)", "$20000.00", "10"]
        );
    }

    #[test]
    fn test_tabulate_empty_records_yields_header_only() {
        let table = tabulate(&[]);
        assert_eq!(table.len(), 1);
        assert_eq!(table[0], vec!["ID", "Car", "Price", "Total Sales"]);
    }

    #[test]
    fn test_tabulate_preserves_input_order() {
        let records = vec![
            record(9, "Fiat", "500", 2016, "$12000.00", 1),
            record(3, "Audi", "A4", 2018, "$30000.00", 2),
        ];

        let table = tabulate(&records);
        assert_eq!(table[1][0], "9");
        assert_eq!(table[2][0], "3");
    }
}
