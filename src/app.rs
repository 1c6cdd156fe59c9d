//! The daily run: resolve every league name, then fetch and print fixtures
//! league by league. One request at a time, no request is retried.

use chrono::TimeZone;
use reqwest::Client;
use std::fmt::Display;
use std::io::Write;
use tracing::{error, info};

use crate::config::Config;
use crate::data_fetcher::api::{fetch_fixtures, resolve_league_name};
use crate::data_fetcher::models::LeagueRef;
use crate::error::AppError;
use crate::report::{LeagueReport, ReportSection};

/// Per-run tally, logged when the run ends
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub with_fixtures: usize,
    pub without_fixtures: usize,
    pub failed: usize,
}

/// Builds the league list for a run.
///
/// `league_override` replaces the configured leagues when non-empty,
/// `season_override` replaces every season, and leagues without a season
/// use `default_season`, the year of the fetch date.
pub fn build_league_refs(
    config: &Config,
    league_override: &[i32],
    season_override: Option<i32>,
    default_season: i32,
) -> Vec<LeagueRef> {
    if league_override.is_empty() {
        config
            .leagues
            .iter()
            .map(|league| {
                let season = season_override
                    .or(league.season)
                    .unwrap_or(default_season);
                LeagueRef::new(league.id, season)
            })
            .collect()
    } else {
        league_override
            .iter()
            .map(|&id| LeagueRef::new(id, season_override.unwrap_or(default_season)))
            .collect()
    }
}

/// Fills in the name of every league. Never fails; unresolved leagues are "Unknown".
pub async fn resolve_league_names(client: &Client, config: &Config, leagues: &mut [LeagueRef]) {
    for league in leagues.iter_mut() {
        league.name = resolve_league_name(client, config, league.id).await;
    }
}

/// Runs the whole batch and writes every league's report to `out`.
///
/// Fixture errors are logged and reported as a line; the next league is
/// still processed. Only a failing writer aborts the run.
pub async fn run_daily_report<W, Tz>(
    client: &Client,
    config: &Config,
    mut leagues: Vec<LeagueRef>,
    date: &str,
    out: &mut W,
    tz: &Tz,
    styled: bool,
) -> Result<RunSummary, AppError>
where
    W: Write,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    info!("Starting run for {} leagues on {date}", leagues.len());

    resolve_league_names(client, config, &mut leagues).await;

    let mut summary = RunSummary::default();
    for league in leagues {
        let outcome = fetch_fixtures(client, config, league.id, league.season, date).await;
        if let Err(e) = &outcome {
            error!("Skipping league {} ({}): {e}", league.id, league.name);
        }

        let report = LeagueReport::from_fetch(league, date, outcome);
        match &report.section {
            ReportSection::Fixtures(_) => summary.with_fixtures += 1,
            ReportSection::NoMatches => summary.without_fixtures += 1,
            ReportSection::FetchError(_) => summary.failed += 1,
        }
        report.render(out, tz, styled)?;
    }

    info!(
        "Run finished: {} with fixtures, {} without, {} failed",
        summary.with_fixtures, summary.without_fixtures, summary.failed
    );
    Ok(summary)
}
