//! Logging and observability
//!
//! Structured logging via the `tracing` crate: console output always, plus
//! an optional JSON file layer with rotation controlled by the `[logging]`
//! configuration section.

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};
