// Showroom - Car Sales Reporting Tool
// Copyright (c) 2026 Showroom Contributors
// Licensed under the MIT License

//! # Showroom - Car Sales Reporting
//!
//! Showroom is a batch reporting tool that turns a JSON dump of car sales
//! records into a PDF summary report and delivers it by email.
//!
//! ## Overview
//!
//! One run executes a strictly sequential pipeline:
//!
//! - **Loading** the sales dump from disk
//! - **Aggregating** the revenue leader, unit-sales leader and most popular
//!   model year
//! - **Formatting** the summary lines and the report table
//! - **Rendering** the PDF report
//! - **Delivering** the report as an email attachment
//!
//! ## Architecture
//!
//! Showroom follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (load, aggregate, format, pipeline)
//! - [`adapters`] - External integrations (PDF rendering, SMTP delivery)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use showroom::config::load_config;
//! use showroom::core::ReportPipeline;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load configuration
//!     let config = load_config("showroom.toml")?;
//!
//!     // Run the pipeline once
//!     let summary = ReportPipeline::new(config).execute().await?;
//!
//!     for line in &summary.summary_lines {
//!         println!("{line}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Showroom uses the [`domain::ShowroomError`] type for all errors. Every
//! failure is fatal: the run either completes end to end or aborts at the
//! failing stage with no partial report.
//!
//! ```rust,no_run
//! use showroom::domain::Result;
//!
//! fn example() -> Result<()> {
//!     // Errors are automatically converted using the ? operator
//!     let config = showroom::config::load_config("showroom.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Showroom uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting report run");
//! warn!(year = 2020, "Popular-year tie broken towards the smallest year");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
