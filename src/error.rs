use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Rejected at the submitter boundary before any call was attempted.
    #[error("{message}")]
    Validation { message: String },

    /// The inference endpoint answered, but the payload carried no usable
    /// text (e.g. an empty content sequence). Distinct from transport
    /// failures so callers can tell "call failed" from "payload unusable".
    #[error("malformed model response: {reason}")]
    MalformedResponse { reason: String },

    /// The remote operation completed without data and returned its own
    /// error list, joined into one human-readable message.
    #[error("remote operation failed: {message}")]
    Remote { message: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("connection error: {0}")]
    Connection(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_response_display_includes_reason() {
        let err = Error::MalformedResponse {
            reason: "empty content sequence".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed model response: empty content sequence"
        );
    }

    #[test]
    fn remote_error_display_includes_joined_messages() {
        let err = Error::Remote {
            message: "throttled, try again".to_string(),
        };
        assert!(err.to_string().contains("throttled, try again"));
    }

    #[test]
    fn config_error_converts_into_error() {
        let err: Error = ConfigError::MissingField { field: "model" }.into();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("model"));
    }
}
