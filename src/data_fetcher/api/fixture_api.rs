//! Daily fixtures for one league from the `/fixtures` endpoint

use reqwest::Client;
use tracing::{info, instrument};

use super::fetch_utils::fetch;
use super::urls::build_fixtures_url;
use crate::config::Config;
use crate::data_fetcher::models::{Fixture, LeagueFixtures};
use crate::error::AppError;

/// Fetches the fixtures of `league_id` in `season` played on `date`.
///
/// # Arguments
/// * `date` - The date in YYYY-MM-DD format
///
/// # Returns
/// * `Ok(LeagueFixtures::Found)` - Fixtures in API order
/// * `Ok(LeagueFixtures::Empty)` - API reported zero results
/// * `Err(AppError)` - Request, HTTP status, parse or API-reported failure
#[instrument(skip(client, config))]
pub async fn fetch_fixtures(
    client: &Client,
    config: &Config,
    league_id: i32,
    season: i32,
    date: &str,
) -> Result<LeagueFixtures, AppError> {
    let url = build_fixtures_url(&config.base_url(), date, league_id, season);
    let response = fetch::<Fixture>(client, &url, &config.api_key).await?;

    if response.is_empty() {
        info!("No fixtures for league {league_id} on {date}");
        return Ok(LeagueFixtures::Empty);
    }

    info!(
        "Fetched {} fixtures for league {league_id} on {date}",
        response.response.len()
    );
    Ok(LeagueFixtures::Found(response.response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use serde_json::{Value, json};
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path, query_param},
    };

    fn mock_config(server: &MockServer) -> Config {
        Config {
            api_key: "test-key".to_string(),
            api_base_url: server.uri(),
            ..Config::default()
        }
    }

    fn fixture_json(id: i64, home: &str, away: &str, goals: Value) -> Value {
        json!({
            "fixture": {
                "id": id,
                "date": "2025-03-22T19:00:00+00:00",
                "timestamp": 1742670000,
                "status": {"long": "Match Finished", "short": "FT"}
            },
            "league": {"id": 71, "name": "Serie A"},
            "teams": {
                "home": {"id": 1, "name": home},
                "away": {"id": 2, "name": away}
            },
            "goals": goals
        })
    }

    #[tokio::test]
    async fn test_fetch_fixtures_success_keeps_order() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fixtures"))
            .and(query_param("date", "2025-03-22"))
            .and(query_param("league", "71"))
            .and(query_param("season", "2025"))
            .and(header("x-apisports-key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "errors": [],
                "results": 3,
                "response": [
                    fixture_json(3, "Santos", "Gremio", json!({"home": 0, "away": 0})),
                    fixture_json(1, "Flamengo", "Palmeiras", json!({"home": 2, "away": 1})),
                    fixture_json(2, "Bahia", "Vasco", json!({"home": null, "away": null}))
                ]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let result = fetch_fixtures(&client, &mock_config(&mock_server), 71, 2025, "2025-03-22")
            .await
            .unwrap();

        match result {
            LeagueFixtures::Found(fixtures) => {
                let ids: Vec<i64> = fixtures.iter().map(|f| f.fixture.id).collect();
                assert_eq!(ids, vec![3, 1, 2]);
                assert_eq!(fixtures[0].goals.score(), Some((0, 0)));
                assert_eq!(fixtures[2].goals.score(), None);
            }
            LeagueFixtures::Empty => panic!("Expected fixtures"),
        }
    }

    #[tokio::test]
    async fn test_fetch_fixtures_zero_results() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fixtures"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"errors": [], "results": 0, "response": []})),
            )
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let result = fetch_fixtures(&client, &mock_config(&mock_server), 71, 2025, "2025-03-22")
            .await
            .unwrap();
        assert!(matches!(result, LeagueFixtures::Empty));
    }

    #[tokio::test]
    async fn test_fetch_fixtures_server_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fixtures"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let result =
            fetch_fixtures(&client, &mock_config(&mock_server), 71, 2025, "2025-03-22").await;
        assert!(matches!(
            result.unwrap_err(),
            AppError::ApiServerError { status: 500, .. }
        ));
    }

    #[tokio::test]
    async fn test_fetch_fixtures_bad_item_is_parse_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/fixtures"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": 1,
                "response": [{"fixture": {"id": "not a number"}}]
            })))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let result =
            fetch_fixtures(&client, &mock_config(&mock_server), 71, 2025, "2025-03-22").await;
        assert!(matches!(
            result.unwrap_err(),
            AppError::ApiUnexpectedStructure { .. }
        ));
    }

    #[tokio::test]
    async fn test_scheme_less_base_url_sends_request() {
        // Nothing listens on port 1, so the request must get as far as connecting
        let config = Config {
            api_key: "test-key".to_string(),
            api_base_url: "127.0.0.1:1".to_string(),
            ..Config::default()
        };

        let client = create_test_http_client();
        let result = fetch_fixtures(&client, &config, 71, 2025, "2025-03-22").await;
        assert!(matches!(
            result.unwrap_err(),
            AppError::NetworkConnection { .. }
        ));
    }
}
