//! Daily football fixtures from API-Football
//!
//! This library resolves league names, fetches a day's fixtures per league
//! and renders them as plain text blocks.
//!
//! # Examples
//!
//! ```rust,no_run
//! use chrono::Local;
//! use daily_fixtures::app::{build_league_refs, run_daily_report};
//! use daily_fixtures::config::Config;
//! use daily_fixtures::data_fetcher::api::{
//!     create_http_client_with_timeout, determine_fetch_date, season_for_date,
//! };
//! use daily_fixtures::error::AppError;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let date = determine_fetch_date(Some("2025-03-22"))?;
//!     let leagues = build_league_refs(&config, &[], None, season_for_date(&date)?);
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!
//!     let mut stdout = std::io::stdout();
//!     run_daily_report(&client, &config, leagues, &date, &mut stdout, &Local, false).await?;
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod report;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::{fetch_fixtures, resolve_league_name};
pub use data_fetcher::models::{ApiResponse, Fixture, LeagueFixtures, LeagueRef};
pub use error::AppError;
pub use report::LeagueReport;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
