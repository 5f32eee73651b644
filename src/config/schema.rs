//! Configuration schema types
//!
//! This module defines the configuration structure for Showroom. The
//! defaults mirror the fixed paths and addresses the tool was originally
//! deployed with, so a bare config file still produces a working run.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};

/// Main Showroom configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowroomConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Report input/output settings
    #[serde(default)]
    pub report: ReportConfig,

    /// Email delivery settings
    pub email: EmailConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ShowroomConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.report.validate()?;
        self.email.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (compute the summary but don't render or send)
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// Report input/output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Path to the JSON sales dump
    #[serde(default = "default_input_path")]
    pub input_path: String,

    /// Path where the rendered PDF is staged
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Report title, also the default email subject
    #[serde(default = "default_title")]
    pub title: String,

    /// Directory holding the report font family files
    #[serde(default = "default_font_dir")]
    pub font_dir: String,

    /// Font family name; the directory must hold
    /// `<family>-{Regular,Bold,Italic,BoldItalic}.ttf`
    #[serde(default = "default_font_family")]
    pub font_family: String,
}

impl ReportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.input_path.is_empty() {
            return Err("report.input_path cannot be empty".to_string());
        }
        if self.output_path.is_empty() {
            return Err("report.output_path cannot be empty".to_string());
        }
        if self.title.is_empty() {
            return Err("report.title cannot be empty".to_string());
        }
        if self.font_family.is_empty() {
            return Err("report.font_family cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            output_path: default_output_path(),
            title: default_title(),
            font_dir: default_font_dir(),
            font_family: default_font_family(),
        }
    }
}

/// Email delivery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Whether the report email is sent at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Sender address
    #[serde(default = "default_sender")]
    pub sender: String,

    /// Recipient address
    #[serde(default = "default_recipient")]
    pub recipient: String,

    /// Subject line; falls back to the report title when unset
    #[serde(default)]
    pub subject: Option<String>,

    /// SMTP relay host
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,

    /// SMTP relay port
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    /// Connection security (tls, starttls, none)
    #[serde(default = "default_smtp_encryption")]
    pub smtp_encryption: String,

    /// SMTP username (optional)
    #[serde(default)]
    pub smtp_username: Option<String>,

    /// SMTP password (optional)
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default)]
    pub smtp_password: Option<SecretString>,
}

impl EmailConfig {
    fn validate(&self) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }

        if self.sender.is_empty() || !self.sender.contains('@') {
            return Err(format!(
                "email.sender must be a mail address, got '{}'",
                self.sender
            ));
        }
        if self.recipient.is_empty() || !self.recipient.contains('@') {
            return Err(format!(
                "email.recipient must be a mail address, got '{}'",
                self.recipient
            ));
        }
        if self.smtp_host.is_empty() {
            return Err("email.smtp_host cannot be empty".to_string());
        }

        let valid_encryption = ["tls", "starttls", "none"];
        if !valid_encryption.contains(&self.smtp_encryption.as_str()) {
            return Err(format!(
                "Invalid smtp_encryption '{}'. Must be one of: {}",
                self.smtp_encryption,
                valid_encryption.join(", ")
            ));
        }

        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sender: default_sender(),
            recipient: default_recipient(),
            subject: None,
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_encryption: default_smtp_encryption(),
            smtp_username: None,
            smtp_password: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Log rotation (daily, hourly)
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,

    /// Maximum log file size in MB
    #[serde(default = "default_log_max_size_mb")]
    pub local_max_size_mb: u64,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.local_enabled && self.local_path.is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
            local_max_size_mb: default_log_max_size_mb(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_input_path() -> String {
    "car_sales.json".to_string()
}

fn default_output_path() -> String {
    "/tmp/cars.pdf".to_string()
}

fn default_title() -> String {
    "Sales summary for last month".to_string()
}

fn default_font_dir() -> String {
    "fonts".to_string()
}

fn default_font_family() -> String {
    "LiberationSans".to_string()
}

fn default_sender() -> String {
    "automation@example.com".to_string()
}

fn default_recipient() -> String {
    "sales@example.com".to_string()
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_smtp_encryption() -> String {
    "starttls".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

fn default_log_max_size_mb() -> u64 {
    100
}
