//! Sale record input model
//!
//! These types mirror the JSON schema of the monthly sales dump: an array of
//! record objects, each with an opaque id, a nested car entity, a
//! currency-formatted price string and a unit count.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque record identifier
///
/// The sales dump is inconsistent about id types: some exports use integers,
/// others strings. Both deserialize transparently and render the same way in
/// the report table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// Numeric identifier
    Number(i64),
    /// Textual identifier
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => write!(f, "{s}"),
        }
    }
}

/// Car entity nested inside a sale record
///
/// The field names on the wire (`car_make`, `car_model`, `car_year`) come
/// from the upstream export format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    /// Manufacturer name
    #[serde(rename = "car_make")]
    pub make: String,

    /// Model name
    #[serde(rename = "car_model")]
    pub model: String,

    /// Model year
    #[serde(rename = "car_year")]
    pub year: i32,
}

impl Car {
    /// Renders the car as `"<make> <model> (<year>)"` for summaries and the
    /// report table.
    pub fn display_name(&self) -> String {
        format!("{} {} ({})", self.make, self.model, self.year)
    }
}

/// One car-model sales entry from the input file
///
/// Records are read-only for the duration of a run; all computed values live
/// in [`SalesSummary`](crate::domain::SalesSummary) instead of being written
/// back onto the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    /// Opaque identifier, not validated for uniqueness
    pub id: RecordId,

    /// The car this record is about
    pub car: Car,

    /// Currency-formatted price, e.g. `"$40000.00"`
    pub price: String,

    /// Units sold for this record
    pub total_sales: u32,
}
