use crate::error::BlaseballError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub mod validation;

use validation::validate_config;

/// Configuration for one API client.
/// Each client owns its own copy; nothing here is read from disk or the environment.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to. Should include the https:// prefix.
    pub base_url: String,
    /// User agent header. `None` leaves reqwest's default (no header).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Whether to send `Accept: application/json` with every request.
    #[serde(default)]
    pub accept_json: bool,
    /// Deadline for each JSON request, also used as the connect timeout.
    /// The live stream is only bounded by the connect timeout.
    /// `None` means no internal timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
    /// Idle connections kept per host by the pooled session.
    #[serde(default = "default_pool_max_idle_per_host")]
    pub pool_max_idle_per_host: usize,
}

fn default_pool_max_idle_per_host() -> usize {
    crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST
}

impl ClientConfig {
    /// Defaults for the primary simulation API: JSON accept header and a
    /// `blaser/<version>` user agent.
    pub fn primary() -> Self {
        ClientConfig {
            base_url: crate::constants::PRIMARY_BASE_URL.to_string(),
            user_agent: Some(crate::constants::USER_AGENT.to_string()),
            accept_json: true,
            timeout_seconds: None,
            pool_max_idle_per_host: default_pool_max_idle_per_host(),
        }
    }

    /// Defaults for the reference API, which gets no custom headers.
    pub fn reference() -> Self {
        ClientConfig {
            base_url: crate::constants::REFERENCE_BASE_URL.to_string(),
            user_agent: None,
            accept_json: false,
            timeout_seconds: None,
            pool_max_idle_per_host: default_pool_max_idle_per_host(),
        }
    }

    /// Replaces the base URL, e.g. to point a client at a mirror or a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets a per-request timeout in seconds.
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    /// Parses a configuration from TOML text, typically a table embedded in
    /// the host application's own config file.
    ///
    /// # Returns
    /// * `Ok(ClientConfig)` - Parsed and validated configuration
    /// * `Err(BlaseballError)` - TOML syntax error or failed validation
    pub fn from_toml_str(content: &str) -> Result<Self, BlaseballError> {
        let config: ClientConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration settings
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is valid
    /// * `Err(BlaseballError)` - Configuration validation failed
    pub fn validate(&self) -> Result<(), BlaseballError> {
        validate_config(&self.base_url, self.timeout_seconds)
    }
}
