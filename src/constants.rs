//! Application-wide constants and configuration values
//!
//! This module centralizes the magic numbers and strings shared by the
//! fetchers, the report renderer and the configuration layer.

/// Base URL of the API-Football v3 service
pub const DEFAULT_API_BASE_URL: &str = "https://v3.football.api-sports.io";

/// Request header carrying the API key
pub const API_KEY_HEADER: &str = "x-apisports-key";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Leagues fetched when the config file lists none:
/// Brasileirão Série A, Série B and Copa Libertadores
pub const DEFAULT_LEAGUE_IDS: [i32; 3] = [71, 72, 13];

/// Name shown for leagues whose name could not be resolved
pub const UNKNOWN_LEAGUE_NAME: &str = "Unknown";

/// Application name used for the config directory, log file and terminal title
pub const APP_NAME: &str = "daily_fixtures";

/// Environment variable names that override config file values
pub mod env_vars {
    pub const API_KEY: &str = "APISPORTS_KEY";
    pub const API_BASE_URL: &str = "APISPORTS_BASE_URL";
    pub const LOG_FILE: &str = "DAILY_FIXTURES_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "DAILY_FIXTURES_HTTP_TIMEOUT";
}

/// Report layout strings
pub mod report {
    /// Line printed after the league header and after every fixture block
    pub const DELIMITER: &str = "----------------------------------------------------";

    /// Score placeholder when either side has no goal count yet
    pub const SCORE_UNAVAILABLE: &str = "unavailable";

    /// Kickoff placeholder when neither the ISO date nor the timestamp can be used
    pub const KICKOFF_UNKNOWN: &str = "--:--";

    /// chrono format for kickoff times
    pub const KICKOFF_FORMAT: &str = "%H:%M";
}

/// Date format accepted on the command line and sent to the fixtures endpoint
pub const DATE_FORMAT: &str = "%Y-%m-%d";
