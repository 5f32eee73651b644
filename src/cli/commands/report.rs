//! Report command implementation
//!
//! This module implements the `report` command: one full pipeline run from
//! the sales dump to the delivered PDF.

use crate::config::load_config;
use crate::core::ReportPipeline;
use clap::Args;

/// Arguments for the report command
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Override the input JSON file path
    #[arg(long)]
    pub input: Option<String>,

    /// Override the output PDF path
    #[arg(long)]
    pub output: Option<String>,

    /// Skip email delivery for this run
    #[arg(long)]
    pub no_email: bool,

    /// Dry run mode - compute the summary without rendering or sending
    #[arg(long)]
    pub dry_run: bool,
}

impl ReportArgs {
    /// Execute the report command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting report command");

        let mut config = load_config(config_path)?;

        // Apply CLI overrides
        if let Some(input) = &self.input {
            tracing::info!(input = %input, "Overriding input path from CLI");
            config.report.input_path = input.clone();
        }

        if let Some(output) = &self.output {
            tracing::info!(output = %output, "Overriding output path from CLI");
            config.report.output_path = output.clone();
        }

        if self.no_email {
            tracing::info!("Disabling email delivery from CLI");
            config.email.enabled = false;
        }

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.application.dry_run = true;
        }

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2); // Configuration error exit code
        }

        if config.application.dry_run {
            println!("🔍 DRY RUN MODE - No report will be rendered or sent");
            println!();
        }

        let recipient = config.email.recipient.clone();
        let pipeline = ReportPipeline::new(config);
        let summary = pipeline.execute().await?;
        summary.log_summary();

        for line in &summary.summary_lines {
            println!("{line}");
        }

        if summary.email_sent {
            println!();
            println!("✅ Report sent to {recipient}");
        }

        Ok(0)
    }
}
