//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Showroom configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        match config.validate() {
            Ok(_) => {
                println!("✅ Configuration is valid");
                println!();
                println!("Configuration Summary:");
                println!("  Log Level: {}", config.application.log_level);
                println!("  Dry Run: {}", config.application.dry_run);
                println!("  Input: {}", config.report.input_path);
                println!("  Output: {}", config.report.output_path);
                println!("  Title: {}", config.report.title);
                println!("  Font Directory: {}", config.report.font_dir);
                if config.email.enabled {
                    println!("  Email: {} -> {}", config.email.sender, config.email.recipient);
                    println!(
                        "  SMTP: {}:{} ({})",
                        config.email.smtp_host, config.email.smtp_port, config.email.smtp_encryption
                    );
                } else {
                    println!("  Email: disabled");
                }
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(2) // Configuration error exit code
            }
        }
    }
}
