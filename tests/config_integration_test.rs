//! Integration tests for configuration loading and validation
//!
//! Note: Tests that modify environment variables should be run with
//! --test-threads=1 to avoid interference between tests.

use secrecy::ExposeSecret;
use showroom::config::load_config;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("SHOWROOM_APPLICATION_LOG_LEVEL");
    std::env::remove_var("SHOWROOM_APPLICATION_DRY_RUN");
    std::env::remove_var("SHOWROOM_REPORT_INPUT_PATH");
    std::env::remove_var("SHOWROOM_REPORT_OUTPUT_PATH");
    std::env::remove_var("SHOWROOM_EMAIL_RECIPIENT");
    std::env::remove_var("SHOWROOM_EMAIL_SMTP_PASSWORD");
    std::env::remove_var("TEST_SMTP_PASSWORD");
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(contents.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[application]
log_level = "debug"
dry_run = true

[report]
input_path = "sales/march.json"
output_path = "/tmp/march.pdf"
title = "March sales summary"
font_dir = "assets/fonts"
font_family = "Roboto"

[email]
enabled = true
sender = "automation@example.com"
recipient = "sales-team@example.com"
subject = "March sales summary"
smtp_host = "smtp.example.com"
smtp_port = 465
smtp_encryption = "tls"
smtp_username = "automation@example.com"
smtp_password = "hunter2"

[logging]
local_enabled = false
local_path = "/tmp/showroom-logs"
local_rotation = "hourly"
local_max_size_mb = 50
"#;

    let temp_file = write_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "debug");
    assert!(config.application.dry_run);

    assert_eq!(config.report.input_path, "sales/march.json");
    assert_eq!(config.report.output_path, "/tmp/march.pdf");
    assert_eq!(config.report.title, "March sales summary");
    assert_eq!(config.report.font_dir, "assets/fonts");
    assert_eq!(config.report.font_family, "Roboto");

    assert!(config.email.enabled);
    assert_eq!(config.email.sender, "automation@example.com");
    assert_eq!(config.email.recipient, "sales-team@example.com");
    assert_eq!(config.email.subject, Some("March sales summary".to_string()));
    assert_eq!(config.email.smtp_host, "smtp.example.com");
    assert_eq!(config.email.smtp_port, 465);
    assert_eq!(config.email.smtp_encryption, "tls");
    assert_eq!(
        config.email.smtp_username,
        Some("automation@example.com".to_string())
    );
    assert_eq!(
        config.email.smtp_password.as_ref().unwrap().expose_secret(),
        "hunter2"
    );

    assert!(!config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");
    assert_eq!(config.logging.local_max_size_mb, 50);
}

#[test]
fn test_minimal_config_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[email]
sender = "automation@example.com"
recipient = "sales@example.com"
"#;

    let temp_file = write_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "info");
    assert!(!config.application.dry_run);
    assert_eq!(config.report.input_path, "car_sales.json");
    assert_eq!(config.report.output_path, "/tmp/cars.pdf");
    assert_eq!(config.report.title, "Sales summary for last month");
    // Subject falls back to the report title at delivery time.
    assert_eq!(config.email.subject, None);
    assert_eq!(config.email.smtp_host, "localhost");
    assert_eq!(config.email.smtp_port, 587);
    assert_eq!(config.email.smtp_encryption, "starttls");
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    std::env::set_var("TEST_SMTP_PASSWORD", "from-the-environment");

    let toml_content = r#"
[email]
sender = "automation@example.com"
recipient = "sales@example.com"
smtp_username = "automation@example.com"
smtp_password = "${TEST_SMTP_PASSWORD}"
"#;

    let temp_file = write_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(
        config.email.smtp_password.as_ref().unwrap().expose_secret(),
        "from-the-environment"
    );

    cleanup_env_vars();
}

#[test]
fn test_env_var_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    std::env::set_var("SHOWROOM_APPLICATION_LOG_LEVEL", "warn");
    std::env::set_var("SHOWROOM_REPORT_INPUT_PATH", "override.json");
    std::env::set_var("SHOWROOM_EMAIL_RECIPIENT", "override@example.com");

    let toml_content = r#"
[application]
log_level = "info"

[report]
input_path = "car_sales.json"

[email]
sender = "automation@example.com"
recipient = "sales@example.com"
"#;

    let temp_file = write_config(toml_content);
    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.report.input_path, "override.json");
    assert_eq!(config.email.recipient, "override@example.com");

    cleanup_env_vars();
}

#[test]
fn test_missing_env_var_fails() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[email]
sender = "automation@example.com"
recipient = "sales@example.com"
smtp_password = "${SHOWROOM_MISSING_SECRET}"
"#;

    let temp_file = write_config(toml_content);
    let result = load_config(temp_file.path());

    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("SHOWROOM_MISSING_SECRET"));
}

#[test]
fn test_invalid_values_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let toml_content = r#"
[application]
log_level = "loud"

[email]
sender = "automation@example.com"
recipient = "sales@example.com"
"#;

    let temp_file = write_config(toml_content);
    let result = load_config(temp_file.path());

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("log_level"));
}

#[test]
fn test_missing_config_file() {
    let result = load_config("does-not-exist.toml");
    assert!(result.is_err());
}
