//! Domain models and types for Showroom.
//!
//! This module contains the core domain models for the reporting pipeline:
//!
//! - **Input model** ([`SaleRecord`], [`Car`], [`RecordId`]) — one entry of
//!   the monthly sales dump, read-only for the duration of a run
//! - **Aggregation result** ([`SalesSummary`]) — the computed maxima and
//!   year statistics, owned and decoupled from the input records
//! - **Error types** ([`ShowroomError`]) and the [`Result`] alias
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`]:
//!
//! ```rust
//! use showroom::domain::Result;
//!
//! fn example() -> Result<()> {
//!     let config = showroom::config::load_config("showroom.toml")?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod result;
pub mod sale;
pub mod summary;

// Re-export commonly used types for convenience
pub use errors::ShowroomError;
pub use result::Result;
pub use sale::{Car, RecordId, SaleRecord};
pub use summary::SalesSummary;
