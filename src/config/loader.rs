//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ShowroomConfig;
use crate::config::secret::secret_string;
use crate::domain::errors::ShowroomError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into ShowroomConfig
/// 4. Applies environment variable overrides (SHOWROOM_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
pub fn load_config(path: impl AsRef<Path>) -> Result<ShowroomConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ShowroomError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ShowroomError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: ShowroomConfig = toml::from_str(&contents)
        .map_err(|e| ShowroomError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        ShowroomError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ShowroomError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the SHOWROOM_* prefix
///
/// Environment variables follow the pattern: SHOWROOM_<SECTION>_<KEY>
/// For example: SHOWROOM_REPORT_INPUT_PATH, SHOWROOM_EMAIL_RECIPIENT
fn apply_env_overrides(config: &mut ShowroomConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("SHOWROOM_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("SHOWROOM_APPLICATION_DRY_RUN") {
        config.application.dry_run = val.parse().unwrap_or(false);
    }

    // Report overrides
    if let Ok(val) = std::env::var("SHOWROOM_REPORT_INPUT_PATH") {
        config.report.input_path = val;
    }
    if let Ok(val) = std::env::var("SHOWROOM_REPORT_OUTPUT_PATH") {
        config.report.output_path = val;
    }
    if let Ok(val) = std::env::var("SHOWROOM_REPORT_TITLE") {
        config.report.title = val;
    }
    if let Ok(val) = std::env::var("SHOWROOM_REPORT_FONT_DIR") {
        config.report.font_dir = val;
    }

    // Email overrides
    if let Ok(val) = std::env::var("SHOWROOM_EMAIL_ENABLED") {
        config.email.enabled = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("SHOWROOM_EMAIL_SENDER") {
        config.email.sender = val;
    }
    if let Ok(val) = std::env::var("SHOWROOM_EMAIL_RECIPIENT") {
        config.email.recipient = val;
    }
    if let Ok(val) = std::env::var("SHOWROOM_EMAIL_SUBJECT") {
        config.email.subject = Some(val);
    }
    if let Ok(val) = std::env::var("SHOWROOM_EMAIL_SMTP_HOST") {
        config.email.smtp_host = val;
    }
    if let Ok(val) = std::env::var("SHOWROOM_EMAIL_SMTP_PORT") {
        if let Ok(port) = val.parse() {
            config.email.smtp_port = port;
        }
    }
    if let Ok(val) = std::env::var("SHOWROOM_EMAIL_SMTP_USERNAME") {
        config.email.smtp_username = Some(val);
    }
    if let Ok(val) = std::env::var("SHOWROOM_EMAIL_SMTP_PASSWORD") {
        config.email.smtp_password = Some(secret_string(val));
    }

    // Logging overrides
    if let Ok(val) = std::env::var("SHOWROOM_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("SHOWROOM_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
