//! Configuration management for Showroom.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `SHOWROOM_*` environment variable overrides
//! - Default values mirroring the tool's original fixed paths and addresses
//! - Type-safe configuration structs with per-section validation
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [report]
//! input_path = "car_sales.json"
//! output_path = "/tmp/cars.pdf"
//! title = "Sales summary for last month"
//!
//! [email]
//! sender = "automation@example.com"
//! recipient = "sales@example.com"
//! smtp_host = "smtp.example.com"
//! smtp_password = "${SHOWROOM_SMTP_PASSWORD}"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, EmailConfig, LoggingConfig, ReportConfig, ShowroomConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
