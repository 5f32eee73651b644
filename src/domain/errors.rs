//! Domain error types
//!
//! This module defines the error hierarchy for Showroom. All errors are
//! domain-specific and don't expose third-party types; every variant is fatal
//! and aborts the run without retry.

use thiserror::Error;

/// Main Showroom error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum ShowroomError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input file missing, unreadable, or not valid JSON
    #[error("Data load error: {0}")]
    DataLoad(String),

    /// A record is missing a required field or its price is not a
    /// currency-formatted number
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// The input file contains no sale records
    #[error("Input contains no sale records")]
    EmptyDataset,

    /// Report rendering errors, surfaced from the PDF backend
    #[error("Render error: {0}")]
    Render(String),

    /// Email delivery errors, surfaced from the SMTP transport
    #[error("Delivery error: {0}")]
    Delivery(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for ShowroomError {
    fn from(err: std::io::Error) -> Self {
        ShowroomError::Io(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ShowroomError {
    fn from(err: toml::de::Error) -> Self {
        ShowroomError::Configuration(format!("TOML parse error: {err}"))
    }
}
