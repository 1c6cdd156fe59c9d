//! Field formatting for fixture blocks
//!
//! Kickoff times are converted to the display time zone here, scores are
//! rendered only when both sides are known.

use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;

use crate::constants::report::{KICKOFF_FORMAT, KICKOFF_UNKNOWN, SCORE_UNAVAILABLE};
use crate::data_fetcher::models::{Fixture, Goals};

/// Formats the score as `"H - A"`, or `"unavailable"` when either count is missing.
///
/// # Example
/// ```
/// use daily_fixtures::data_fetcher::models::Goals;
/// use daily_fixtures::report::format_score;
///
/// assert_eq!(format_score(&Goals { home: Some(2), away: Some(1) }), "2 - 1");
/// assert_eq!(format_score(&Goals { home: Some(2), away: None }), "unavailable");
/// ```
pub fn format_score(goals: &Goals) -> String {
    match goals.score() {
        Some((home, away)) => format!("{home} - {away}"),
        None => SCORE_UNAVAILABLE.to_string(),
    }
}

/// Converts a UTC instant to `HH:MM` in the given time zone.
pub fn format_kickoff_time<Tz>(kickoff: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    kickoff.with_timezone(tz).format(KICKOFF_FORMAT).to_string()
}

/// Kickoff of a fixture as `HH:MM` in the given time zone, `--:--` when unknown.
pub fn format_kickoff<Tz>(fixture: &Fixture, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match fixture.kickoff() {
        Some(kickoff) => format_kickoff_time(kickoff, tz),
        None => KICKOFF_UNKNOWN.to_string(),
    }
}
