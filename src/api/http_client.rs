//! HTTP client creation and configuration utilities

use crate::config::ClientConfig;
use crate::error::BlaseballError;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};

/// Creates the pooled HTTP session a client reuses for every call.
///
/// # Arguments
/// * `config` - Client configuration (headers, pool size, optional timeout)
///
/// # Returns
/// * `Result<Client, BlaseballError>` - A configured reqwest client or error
///
/// # Features
/// * `Accept: application/json` when `accept_json` is set
/// * Custom user agent when `user_agent` is set
/// * Connection pooling with the configured idle pool size
/// * Connect timeout when `timeout_seconds` is set. There is no client-wide
///   total deadline, since the live stream shares this client; JSON requests
///   apply the deadline per request.
pub fn create_http_client(config: &ClientConfig) -> Result<Client, BlaseballError> {
    let mut headers = HeaderMap::new();
    if config.accept_json {
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    }

    let mut builder = Client::builder()
        .default_headers(headers)
        .pool_max_idle_per_host(config.pool_max_idle_per_host);

    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent.as_str());
    }

    if let Some(timeout) = config.request_timeout() {
        builder = builder.connect_timeout(timeout);
    }

    Ok(builder.build()?)
}
