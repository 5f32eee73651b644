//! Sales data ingestion
//!
//! Reads the monthly sales dump from disk and parses it into the in-memory
//! record collection, preserving input order.

use crate::domain::errors::ShowroomError;
use crate::domain::result::Result;
use crate::domain::sale::SaleRecord;
use std::fs;
use std::path::Path;

/// Loads the sale records from a JSON file
///
/// The file must contain a JSON array of record objects. Parsing happens in
/// two stages so the two failure kinds stay distinct: a missing or unreadable
/// file and syntactically invalid JSON are data-load failures, while a
/// structurally valid document whose records are missing fields or carry the
/// wrong types is a malformed-record failure.
///
/// # Errors
///
/// Returns [`ShowroomError::DataLoad`] if the file cannot be read or is not
/// valid JSON, and [`ShowroomError::MalformedRecord`] if a record does not
/// match the expected shape.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<SaleRecord>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ShowroomError::DataLoad(format!(
            "Input file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ShowroomError::DataLoad(format!("Failed to read input file {}: {}", path.display(), e))
    })?;

    let document: serde_json::Value = serde_json::from_str(&contents).map_err(|e| {
        ShowroomError::DataLoad(format!("Invalid JSON in {}: {}", path.display(), e))
    })?;

    let records: Vec<SaleRecord> = serde_json::from_value(document)
        .map_err(|e| ShowroomError::MalformedRecord(e.to_string()))?;

    tracing::debug!(count = records.len(), path = %path.display(), "Parsed sale records");

    Ok(records)
}
