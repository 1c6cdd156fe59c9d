use super::Config;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API key cannot be empty or whitespace
/// - API base URL must be a valid URL or domain name
/// - HTTP timeout must be at least one second
/// - League IDs must be positive and at least one league must be listed
/// - If log file path is provided, it cannot be empty and its parent directory must be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    if config.api_key.trim().is_empty() {
        return Err(AppError::config_error("API key cannot be empty"));
    }

    let base_url = &config.api_base_url;
    if base_url.is_empty() {
        return Err(AppError::config_error("API base URL cannot be empty"));
    }

    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        // If it doesn't start with protocol, it should at least look like a domain
        if !base_url.contains('.') && !base_url.starts_with("localhost") {
            return Err(AppError::config_error(
                "API base URL must be a valid URL or domain name",
            ));
        }
    }

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least 1 second",
        ));
    }

    if config.leagues.is_empty() {
        return Err(AppError::config_error("At least one league must be listed"));
    }

    if let Some(league) = config.leagues.iter().find(|l| l.id <= 0) {
        return Err(AppError::config_error(format!(
            "Invalid league ID: {}",
            league.id
        )));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
