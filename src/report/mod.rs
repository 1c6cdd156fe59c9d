//! Console report for the daily fixtures run
//!
//! Each league becomes one [`LeagueReport`]: a header and one block per
//! fixture, a single "no matches" line, or a single error line.

pub mod formatting;
pub mod page;

pub use formatting::{format_kickoff, format_kickoff_time, format_score};
pub use page::{LeagueReport, ReportSection, fixture_lines};
