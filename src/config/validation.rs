use crate::error::BlaseballError;
use reqwest::Url;

/// Validates the configuration settings
///
/// # Arguments
/// * `base_url` - The API base URL to validate
/// * `timeout_seconds` - Optional request timeout to validate
///
/// # Returns
/// * `Ok(())` - Configuration is valid
/// * `Err(BlaseballError)` - Configuration validation failed
///
/// # Validation Rules
/// - Base URL cannot be empty
/// - Base URL must parse as an absolute http:// or https:// URL
/// - Base URL cannot carry a query string or fragment
/// - A configured timeout must be greater than zero
pub fn validate_config(base_url: &str, timeout_seconds: Option<u64>) -> Result<(), BlaseballError> {
    if base_url.trim().is_empty() {
        return Err(BlaseballError::config_error("Base URL cannot be empty"));
    }

    parse_base_url(base_url)?;

    if timeout_seconds == Some(0) {
        return Err(BlaseballError::config_error(
            "Timeout must be greater than zero seconds",
        ));
    }

    Ok(())
}

/// Parses a base URL, rejecting anything an endpoint path cannot be appended to.
pub(crate) fn parse_base_url(base_url: &str) -> Result<Url, BlaseballError> {
    let url = Url::parse(base_url).map_err(|e| {
        BlaseballError::config_error(format!("Invalid base URL '{base_url}': {e}"))
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(BlaseballError::config_error(format!(
            "Base URL must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if url.cannot_be_a_base() {
        return Err(BlaseballError::config_error(format!(
            "Base URL '{base_url}' cannot have paths appended"
        )));
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err(BlaseballError::config_error(
            "Base URL cannot contain a query string or fragment",
        ));
    }

    Ok(url)
}
