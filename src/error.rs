use thiserror::Error;

pub type Result<T> = std::result::Result<T, BlaseballError>;

#[derive(Debug, Error)]
pub enum BlaseballError {
    // Raised before any request is sent
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("HTTP error ({status}) from {url}: {body}")]
    Http {
        status: u16,
        body: String,
        url: String,
    },

    #[error("Failed to decode JSON response: {message} (URL: {url})")]
    Decode { message: String, url: String },

    #[error("Network failure while requesting {url}: {message}")]
    Network { url: String, message: String },

    #[error("Live stream from {url} ended: {message}")]
    Stream { url: String, message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Log setup error: {message}")]
    LogSetup { message: String },
}

impl BlaseballError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an HTTP status error carrying the response body
    pub fn http(status: u16, body: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Http {
            status,
            body: body.into(),
            url: url.into(),
        }
    }

    /// Create a JSON decode error
    pub fn decode(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network failure error
    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Network {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a live stream interruption error
    pub fn stream(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Stream {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a log setup error with context
    pub fn log_setup_error(message: impl Into<String>) -> Self {
        Self::LogSetup {
            message: message.into(),
        }
    }

    /// HTTP status code, if the error came from a non-success response
    pub fn status(&self) -> Option<u16> {
        match self {
            BlaseballError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the upstream API answered 404
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Check if the error was raised by client-side validation
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, BlaseballError::InvalidArgument { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_helper() {
        let error = BlaseballError::invalid_argument("'category' must be one of [batting]");
        assert!(error.is_invalid_argument());
        assert_eq!(
            error.to_string(),
            "Invalid argument: 'category' must be one of [batting]"
        );
    }

    #[test]
    fn test_http_helper() {
        let error = BlaseballError::http(
            404,
            "Not Found",
            "https://www.blaseball.com/database/pleebis",
        );
        assert_eq!(error.status(), Some(404));
        assert!(error.is_not_found());
        assert_eq!(
            error.to_string(),
            "HTTP error (404) from https://www.blaseball.com/database/pleebis: Not Found"
        );
    }

    #[test]
    fn test_server_error_is_not_not_found() {
        let error = BlaseballError::http(500, "", "https://www.blaseball.com");
        assert_eq!(error.status(), Some(500));
        assert!(!error.is_not_found());
        assert!(!error.is_invalid_argument());
    }

    #[test]
    fn test_decode_helper() {
        let error = BlaseballError::decode("expected value at line 1 column 1", "https://x.test");
        assert!(matches!(error, BlaseballError::Decode { .. }));
        assert_eq!(error.status(), None);
        assert_eq!(
            error.to_string(),
            "Failed to decode JSON response: expected value at line 1 column 1 (URL: https://x.test)"
        );
    }

    #[test]
    fn test_network_helper() {
        let error = BlaseballError::network("https://x.test", "Connection refused");
        assert_eq!(
            error.to_string(),
            "Network failure while requesting https://x.test: Connection refused"
        );
    }

    #[test]
    fn test_stream_helper() {
        let error = BlaseballError::stream("https://x.test/database/streamData", "closed by server");
        assert_eq!(
            error.to_string(),
            "Live stream from https://x.test/database/streamData ended: closed by server"
        );
    }

    #[test]
    fn test_config_and_log_helpers() {
        assert_eq!(
            BlaseballError::config_error("Base URL cannot be empty").to_string(),
            "Configuration error: Base URL cannot be empty"
        );
        assert_eq!(
            BlaseballError::log_setup_error("already set").to_string(),
            "Log setup error: already set"
        );
    }

    #[test]
    fn test_error_from_reqwest() {
        let client = reqwest::Client::new();
        match client.get("not a valid url").build() {
            Err(reqwest_error) => {
                let error: BlaseballError = reqwest_error.into();
                assert!(matches!(error, BlaseballError::Client(_)));
            }
            Ok(_) => panic!("Expected an error from invalid URL"),
        }
    }

    #[test]
    fn test_error_from_toml_deserialize() {
        let toml_error = toml::from_str::<toml::Table>("invalid = [toml").unwrap_err();
        let error: BlaseballError = toml_error.into();
        assert!(matches!(error, BlaseballError::TomlDeserialize(_)));
    }
}
