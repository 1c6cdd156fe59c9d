pub mod common;
pub mod fixtures;
pub mod leagues;

pub use common::ApiResponse;
pub use fixtures::{Fixture, FixtureInfo, FixtureStatus, Goals, LeagueFixtures, Team, Teams};
pub use leagues::{League, LeagueInfo, LeagueRef};
