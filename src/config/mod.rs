use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_HTTP_TIMEOUT_SECONDS, DEFAULT_LEAGUE_IDS, env_vars,
};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use user_prompts::prompt_for_api_key;
use validation::validate_config;

/// One league to fetch. `season` defaults to the current calendar year.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LeagueSetting {
    pub id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<i32>,
}

impl LeagueSetting {
    pub fn new(id: i32) -> Self {
        Self { id, season: None }
    }
}

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// API-Football key sent in the `x-apisports-key` header.
    pub api_key: String,
    /// Base URL of the API. Defaults to the public v3 endpoint.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Leagues fetched on every run, in print order.
    #[serde(default = "default_leagues")]
    pub leagues: Vec<LeagueSetting>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_leagues() -> Vec<LeagueSetting> {
    DEFAULT_LEAGUE_IDS.iter().copied().map(LeagueSetting::new).collect()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: String::new(),
            api_base_url: default_api_base_url(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            leagues: default_leagues(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists and no key is set in the environment,
    /// prompts the user for an API key and creates the file.
    ///
    /// # Environment Variables
    /// - `APISPORTS_KEY` - Override API key
    /// - `APISPORTS_BASE_URL` - Override API base URL
    /// - `DAILY_FIXTURES_LOG_FILE` - Override log file path
    /// - `DAILY_FIXTURES_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded or created configuration
    /// * `Err(AppError)` - Error occurred during load/create, or validation failed
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else if std::env::var(env_vars::API_KEY).is_ok() {
            // Key comes from the environment, nothing to persist
            Config::default()
        } else {
            let config = Config {
                api_key: prompt_for_api_key().await?,
                ..Config::default()
            };
            config.save().await?;
            config
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides on top of file values.
    /// Unparseable timeout values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_key) = std::env::var(env_vars::API_KEY) {
            self.api_key = api_key;
        }

        if let Ok(api_base_url) = std::env::var(env_vars::API_BASE_URL) {
            self.api_base_url = api_base_url;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Absolute base URL without a trailing slash, ready for path concatenation.
    /// A bare domain gets an `https://` prefix.
    pub fn base_url(&self) -> String {
        with_scheme(self.api_base_url.trim_end_matches('/'))
    }

    /// Displays current configuration settings to stdout.
    /// The API key is masked down to its last four characters.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("API Key:");
            println!("{}", mask_api_key(&config.api_key));
            println!("────────────────────────────────────");
            println!("API Base URL:");
            println!("{}", config.api_base_url);
            println!("────────────────────────────────────");
            println!("HTTP Timeout:");
            println!("{} seconds", config.http_timeout_seconds);
            println!("────────────────────────────────────");
            println!("Leagues:");
            for league in &config.leagues {
                match league.season {
                    Some(season) => println!("{} (season {season})", league.id),
                    None => println!("{} (current season)", league.id),
                }
            }
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/{}.log", crate::constants::APP_NAME);
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and gives a bare
    /// base-URL domain an `https://` prefix.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let api_base_url = with_scheme(&self.api_base_url);
        let content = toml::to_string_pretty(&Config {
            api_base_url,
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

fn with_scheme(url: &str) -> String {
    if url.starts_with("https://") || url.starts_with("http://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

fn mask_api_key(api_key: &str) -> String {
    let count = api_key.chars().count();
    if count <= 4 {
        return "****".to_string();
    }
    let tail: String = api_key.chars().skip(count - 4).collect();
    format!("****{tail}")
}
