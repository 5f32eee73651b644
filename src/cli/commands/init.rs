//! Init command implementation
//!
//! This module implements the `init` command for generating a starter
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "showroom.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Showroom configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Point report.input_path at the monthly sales JSON dump");
                println!("  3. Drop the report fonts into the report.font_dir directory");
                println!("  4. Set SHOWROOM_SMTP_PASSWORD if your relay needs authentication");
                println!("  5. Validate configuration: showroom validate-config");
                println!("  6. Generate the report: showroom report");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate the starter configuration
    fn generate_config() -> String {
        r#"# Showroom Configuration File
# Car sales reporting tool

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# Dry run mode (compute the summary but don't render or send)
dry_run = false

[report]
# JSON array of sale records
input_path = "car_sales.json"

# Where the rendered PDF is staged before delivery
output_path = "/tmp/cars.pdf"

# Report title, also the default email subject
title = "Sales summary for last month"

# Directory holding <family>-{Regular,Bold,Italic,BoldItalic}.ttf
font_dir = "fonts"
font_family = "LiberationSans"

[email]
# Set to false to only render the PDF
enabled = true

sender = "automation@example.com"
recipient = "sales@example.com"

# Subject defaults to the report title when omitted
# subject = "Sales summary for last month"

smtp_host = "smtp.example.com"
smtp_port = 587

# Connection security: tls | starttls | none
smtp_encryption = "starttls"

# Credentials are optional; use an environment variable for the password
# smtp_username = "automation@example.com"
# smtp_password = "${SHOWROOM_SMTP_PASSWORD}"

[logging]
# Enable JSON file logging with rotation
local_enabled = false
local_path = "logs"
local_rotation = "daily"
local_max_size_mb = 100
"#
        .to_string()
    }
}
