//! URL building utilities for API endpoints

/// Builds the `/leagues` URL filtered by league ID.
///
/// # Example
/// ```
/// use daily_fixtures::data_fetcher::api::build_leagues_url;
///
/// let url = build_leagues_url("https://v3.football.api-sports.io", 71);
/// assert_eq!(url, "https://v3.football.api-sports.io/leagues?id=71");
/// ```
pub fn build_leagues_url(api_base_url: &str, league_id: i32) -> String {
    format!("{api_base_url}/leagues?id={league_id}")
}

/// Builds the `/fixtures` URL for one league, season and date.
///
/// # Arguments
/// * `api_base_url` - The base API URL without trailing slash
/// * `date` - The date in YYYY-MM-DD format
/// * `league_id` - The league identifier
/// * `season` - The season year
///
/// # Example
/// ```
/// use daily_fixtures::data_fetcher::api::build_fixtures_url;
///
/// let url = build_fixtures_url("https://v3.football.api-sports.io", "2025-03-22", 71, 2025);
/// assert_eq!(
///     url,
///     "https://v3.football.api-sports.io/fixtures?date=2025-03-22&league=71&season=2025"
/// );
/// ```
pub fn build_fixtures_url(api_base_url: &str, date: &str, league_id: i32, season: i32) -> String {
    format!("{api_base_url}/fixtures?date={date}&league={league_id}&season={season}")
}
