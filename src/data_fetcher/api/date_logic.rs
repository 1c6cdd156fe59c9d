//! Date and season selection for a run

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Utc};
use tracing::info;

use crate::constants::DATE_FORMAT;
use crate::error::AppError;

/// Determines the date to fetch fixtures for.
/// A custom date is validated as YYYY-MM-DD; otherwise today's local date is used.
pub fn determine_fetch_date(custom_date: Option<&str>) -> Result<String, AppError> {
    determine_fetch_date_with_time(custom_date, Utc::now().with_timezone(&Local))
}

/// Same as [`determine_fetch_date`] with an injected clock, for deterministic tests.
pub fn determine_fetch_date_with_time<Tz: TimeZone>(
    custom_date: Option<&str>,
    now: DateTime<Tz>,
) -> Result<String, AppError> {
    match custom_date {
        Some(date) => {
            let parsed = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|e| {
                AppError::datetime_parse_error(format!(
                    "Invalid date '{date}', expected YYYY-MM-DD: {e}"
                ))
            })?;
            Ok(parsed.format(DATE_FORMAT).to_string())
        }
        None => {
            let date_str = now.date_naive().format(DATE_FORMAT).to_string();
            info!("Using today's date: {date_str}");
            Ok(date_str)
        }
    }
}

/// Default season for a fetch date: its calendar year.
/// Without `--date` this is the current year.
pub fn season_for_date(date: &str) -> Result<i32, AppError> {
    NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map(|parsed| parsed.year())
        .map_err(|e| AppError::datetime_parse_error(format!("Invalid date '{date}': {e}")))
}
