//! Single-shot HTTP GET + JSON decoding with status-aware error mapping

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use crate::constants::API_KEY_HEADER;
use crate::data_fetcher::models::ApiResponse;
use crate::error::AppError;

/// Fetches `url` with the API key header and decodes an [`ApiResponse`].
///
/// One attempt only. The body is read to completion before returning, and on
/// every early return the response is dropped, which hands the connection
/// back to the pool.
///
/// # Errors
/// * transport / request construction -> `NetworkTimeout`, `NetworkConnection`, `ApiFetch`
/// * non-2xx status -> `ApiNotFound`, `ApiRateLimit`, `ApiClientError`, `ApiServerError`, `ApiServiceUnavailable`
/// * body read -> `ApiFetch`
/// * decoding -> `ApiNoData`, `ApiMalformedJson`, `ApiUnexpectedStructure`
/// * populated `errors` field -> `ApiReported`
#[instrument(skip(client, api_key))]
pub(super) async fn fetch<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    api_key: &str,
) -> Result<ApiResponse<T>, AppError> {
    info!("Fetching data from URL: {url}");

    let response = match client.get(url).header(API_KEY_HEADER, api_key).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, url);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());
    let preview: String = response_text.chars().take(1024).collect();
    debug!("Response text (first 1024 chars): {preview}");

    let parsed = match serde_json::from_str::<ApiResponse<T>>(&response_text) {
        Ok(parsed) => parsed,
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);

            let trimmed = response_text.trim_start();
            return if trimmed.is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
                Err(AppError::api_malformed_json("Response is not valid JSON", url))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            };
        }
    };

    if let Some(message) = parsed.reported_error() {
        error!("API reported errors for URL {}: {}", url, message);
        return Err(AppError::api_reported(message, url));
    }

    if usize::try_from(parsed.results).ok() != Some(parsed.response.len()) {
        debug!(
            "Result count {} differs from item count {} (URL: {})",
            parsed.results,
            parsed.response.len(),
            url
        );
    }

    Ok(parsed)
}
