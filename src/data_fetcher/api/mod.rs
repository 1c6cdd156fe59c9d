pub mod date_logic;
pub mod fetch_utils;
pub mod fixture_api;
pub mod http_client;
pub mod league_api;
pub mod urls;

pub use date_logic::{determine_fetch_date, season_for_date};
pub use fixture_api::fetch_fixtures;
pub use http_client::create_http_client_with_timeout;
pub use league_api::{fetch_league_name, resolve_league_name};
pub use urls::{build_fixtures_url, build_leagues_url};
