use chrono::TimeZone;
use crossterm::style::Stylize;
use std::fmt::Display;
use std::io::Write;

use super::formatting::{format_kickoff, format_score};
use crate::constants::report::DELIMITER;
use crate::data_fetcher::models::{Fixture, LeagueFixtures, LeagueRef};
use crate::error::AppError;

/// Body of a league's report block
#[derive(Debug)]
pub enum ReportSection {
    Fixtures(Vec<Fixture>),
    NoMatches,
    FetchError(String),
}

/// Everything printed for one league on one date
#[derive(Debug)]
pub struct LeagueReport {
    pub league: LeagueRef,
    pub date: String,
    pub section: ReportSection,
}

impl LeagueReport {
    pub fn new(league: LeagueRef, date: impl Into<String>, section: ReportSection) -> Self {
        Self {
            league,
            date: date.into(),
            section,
        }
    }

    /// Builds the report from the fixture fetcher's outcome.
    pub fn from_fetch(
        league: LeagueRef,
        date: impl Into<String>,
        outcome: Result<LeagueFixtures, AppError>,
    ) -> Self {
        let section = match outcome {
            Ok(LeagueFixtures::Found(fixtures)) => ReportSection::Fixtures(fixtures),
            Ok(LeagueFixtures::Empty) => ReportSection::NoMatches,
            Err(e) => ReportSection::FetchError(e.to_string()),
        };
        Self::new(league, date, section)
    }

    /// The header line of a fixture block
    pub fn header(&self) -> String {
        format!(
            "Fixtures for {} - League: {} (ID: {})",
            self.date, self.league.name, self.league.id
        )
    }

    /// Renders the report as plain text lines, fixtures in API order.
    pub fn lines<Tz>(&self, tz: &Tz) -> Vec<String>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        match &self.section {
            ReportSection::NoMatches => vec![format!(
                "No matches found for league {} (ID: {}) on {}.",
                self.league.name, self.league.id, self.date
            )],
            ReportSection::FetchError(message) => vec![format!(
                "Error fetching fixtures for league {}: {message}",
                self.league.id
            )],
            ReportSection::Fixtures(fixtures) => {
                let mut lines = Vec::with_capacity(3 + fixtures.len() * 5);
                lines.push(String::new());
                lines.push(self.header());
                lines.push(DELIMITER.to_string());
                for fixture in fixtures {
                    lines.extend(fixture_lines(fixture, tz));
                }
                lines
            }
        }
    }

    /// Writes the report in one buffered write. With `styled` the header is bold.
    pub fn render<W, Tz>(&self, out: &mut W, tz: &Tz, styled: bool) -> std::io::Result<()>
    where
        W: Write,
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let header = self.header();
        let mut buffer = String::new();
        for line in self.lines(tz) {
            if styled && line == header {
                buffer.push_str(&line.bold().to_string());
            } else {
                buffer.push_str(&line);
            }
            buffer.push('\n');
        }
        out.write_all(buffer.as_bytes())?;
        out.flush()
    }
}

/// Four lines and a delimiter for one fixture.
pub fn fixture_lines<Tz>(fixture: &Fixture, tz: &Tz) -> [String; 5]
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    [
        format!("{} x {}", fixture.teams.home.name, fixture.teams.away.name),
        format!("Kickoff: {}", format_kickoff(fixture, tz)),
        format!("Status: {}", fixture.fixture.status.long),
        format!("Score: {}", format_score(&fixture.goals)),
        DELIMITER.to_string(),
    ]
}
