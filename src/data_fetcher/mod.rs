pub mod api;
pub mod models;

pub use api::{fetch_fixtures, resolve_league_name};
pub use models::{Fixture, LeagueFixtures, LeagueRef};
