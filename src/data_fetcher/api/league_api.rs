//! League name resolution against the `/leagues` endpoint

use reqwest::Client;
use tracing::{info, warn};

use super::fetch_utils::fetch;
use super::urls::build_leagues_url;
use crate::config::Config;
use crate::constants::UNKNOWN_LEAGUE_NAME;
use crate::data_fetcher::models::LeagueInfo;
use crate::error::AppError;

/// Looks up the display name of a league.
///
/// Filtering by ID yields at most one league in practice, so the first item
/// wins.
///
/// # Returns
/// * `Ok(Some(name))` - League found
/// * `Ok(None)` - API answered with zero results
/// * `Err(AppError)` - Request, HTTP status, parse or API-reported failure
pub async fn fetch_league_name(
    client: &Client,
    config: &Config,
    league_id: i32,
) -> Result<Option<String>, AppError> {
    let url = build_leagues_url(&config.base_url(), league_id);
    let response = fetch::<LeagueInfo>(client, &url, &config.api_key).await?;

    if response.is_empty() {
        info!("No league found for ID {league_id}");
        return Ok(None);
    }

    Ok(response
        .response
        .into_iter()
        .next()
        .map(|info| info.league.name))
}

/// Resolves a league name, never failing.
///
/// Any error or an empty result yields `"Unknown"`; the failure is logged
/// and the run continues.
pub async fn resolve_league_name(client: &Client, config: &Config, league_id: i32) -> String {
    match fetch_league_name(client, config, league_id).await {
        Ok(Some(name)) => {
            info!("Resolved league {league_id} to '{name}'");
            name
        }
        Ok(None) => UNKNOWN_LEAGUE_NAME.to_string(),
        Err(e) => {
            warn!("Failed to resolve name of league {league_id}: {e}");
            UNKNOWN_LEAGUE_NAME.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use serde_json::json;
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

    #[tokio::test]
    async fn test_resolve_league_name_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/leagues"))
            .and(query_param("id", "71"))
            .and(header("x-apisports-key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "errors": [],
                "results": 1,
                "response": [{"league": {"id": 71, "name": "Serie A"}}]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let name = resolve_league_name(&client, &mock_config(&mock_server), 71).await;
        assert_eq!(name, "Serie A");
    }

    #[tokio::test]
    async fn test_first_league_wins() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/leagues"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": 2,
                "response": [
                    {"league": {"id": 13, "name": "CONMEBOL Libertadores"}},
                    {"league": {"id": 13, "name": "Duplicate"}}
                ]
            })))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let name = fetch_league_name(&client, &mock_config(&mock_server), 13)
            .await
            .unwrap();
        assert_eq!(name.as_deref(), Some("CONMEBOL Libertadores"));
    }

    #[tokio::test]
    async fn test_zero_results_resolves_to_unknown() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/leagues"))
            .and(query_param("id", "999"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"errors": [], "results": 0, "response": []})),
            )
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let config = mock_config(&mock_server);

        assert_eq!(fetch_league_name(&client, &config, 999).await.unwrap(), None);
        assert_eq!(resolve_league_name(&client, &config, 999).await, "Unknown");
    }

    #[tokio::test]
    async fn test_failures_resolve_to_unknown() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/leagues"))
            .and(query_param("id", "1"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/leagues"))
            .and(query_param("id", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/leagues"))
            .and(query_param("id", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": 0,
                "response": [],
                "errors": {"requests": "You have reached the request limit for the day"}
            })))
            .mount(&mock_server)
            .await;

        let client = create_test_http_client();
        let config = mock_config(&mock_server);

        for league_id in 1..=3 {
            assert!(fetch_league_name(&client, &config, league_id).await.is_err());
            assert_eq!(
                resolve_league_name(&client, &config, league_id).await,
                "Unknown"
            );
        }
    }

    #[tokio::test]
    async fn test_unreachable_server_resolves_to_unknown() {
        let config = Config {
            api_key: "test-key".to_string(),
            api_base_url: "http://127.0.0.1:9".to_string(),
            ..Config::default()
        };
        let client = create_test_http_client();
        assert_eq!(resolve_league_name(&client, &config, 71).await, "Unknown");
    }
}
