//! Core business logic for Showroom
//!
//! This module contains the stages of the reporting pipeline:
//!
//! - `load` - Sales data ingestion from the JSON dump
//! - `aggregate` - Revenue/sales maxima and popular-year statistics
//! - `format` - Summary lines and the report table grid
//! - `pipeline` - Orchestration of one full run

pub mod aggregate;
pub mod format;
pub mod load;
pub mod pipeline;

// Re-export main types
pub use pipeline::{ReportPipeline, RunSummary};
