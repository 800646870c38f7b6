//! The single GET-and-decode helper every endpoint goes through

use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;
use tracing::{debug, error, info, instrument};

use super::params::QueryParams;
use crate::constants::RESPONSE_PREVIEW_CHARS;
use crate::error::BlaseballError;

/// Appends an endpoint path to the base URL, one segment per `/`-separated part.
/// Leading, trailing and doubled slashes in `path` are ignored.
pub(crate) fn build_url(base_url: &Url, path: &str) -> Url {
    let mut url = base_url.clone();
    // Only fails for cannot-be-a-base URLs, which config validation rejects
    if let Ok(mut segments) = url.path_segments_mut() {
        segments
            .pop_if_empty()
            .extend(path.split('/').filter(|segment| !segment.is_empty()));
    }
    url
}

/// Like [`build_url`], then appends `id` as one percent-encoded segment.
/// Slashes inside `id` are encoded rather than splitting it.
pub(crate) fn build_url_with_id(base_url: &Url, path: &str, id: &str) -> Url {
    let mut url = build_url(base_url, path);
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.push(id);
    }
    url
}

/// Performs one GET against `url` and decodes the JSON body.
///
/// - 2xx: the body is parsed as JSON and returned unmodified
/// - non-2xx: `Http` with the status and raw body; the body is not parsed
/// - 2xx with an empty or non-JSON body: `Decode`
/// - transport failure: `Network`
///
/// No caching and no retries: every call is exactly one request on the
/// client's pooled session. `timeout` bounds the whole request including
/// the body read.
#[instrument(skip(client, url, params), fields(path = url.path()))]
pub(crate) async fn fetch_json(
    client: &Client,
    url: Url,
    params: &QueryParams,
    timeout: Option<Duration>,
) -> Result<Value, BlaseballError> {
    let mut builder = client.get(url);
    if !params.is_empty() {
        builder = builder.query(params.as_pairs());
    }
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    let request = builder.build()?;
    let url = request.url().to_string();

    info!("Fetching data from URL: {url}");

    let response = client.execute(request).await.map_err(|e| {
        error!("Request failed for URL {}: {}", url, e);
        BlaseballError::network(&url, e.to_string())
    })?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let reason = status.canonical_reason().unwrap_or("Unknown error");
        // The body is informational here; a failed read leaves it empty
        let body = response.text().await.unwrap_or_default();
        error!("HTTP {} - {} (URL: {})", status.as_u16(), reason, url);
        return Err(BlaseballError::http(status.as_u16(), body, url));
    }

    let response_text = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        BlaseballError::network(&url, e.to_string())
    })?;

    debug!("Response length: {} bytes", response_text.len());
    let preview: String = response_text.chars().take(RESPONSE_PREVIEW_CHARS).collect();
    debug!("Response text (first {RESPONSE_PREVIEW_CHARS} chars): {preview}");

    serde_json::from_str::<Value>(&response_text).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        BlaseballError::decode(e.to_string(), url)
    })
}
