//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Showroom using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Showroom - Car Sales Reporting Tool
#[derive(Parser, Debug)]
#[command(name = "showroom")]
#[command(version, about, long_about = None)]
#[command(author = "Showroom Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "showroom.toml", env = "SHOWROOM_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SHOWROOM_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the sales report and deliver it by email
    Report(commands::report::ReportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_report() {
        let cli = Cli::parse_from(["showroom", "report"]);
        assert_eq!(cli.config, "showroom.toml");
        assert!(matches!(cli.command, Commands::Report(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["showroom", "--config", "custom.toml", "report"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["showroom", "--log-level", "debug", "report"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["showroom", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["showroom", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }

    #[test]
    fn test_cli_parse_report_flags() {
        let cli = Cli::parse_from(["showroom", "report", "--dry-run", "--no-email"]);
        if let Commands::Report(args) = cli.command {
            assert!(args.dry_run);
            assert!(args.no_email);
        } else {
            panic!("expected report command");
        }
    }
}
