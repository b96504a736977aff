//! Configuration loading and validation.
//!
//! Settings live in a TOML file (`config.toml` by default) with serde
//! defaults, so a missing file or a partial file still yields a runnable
//! configuration. Credentials are never read from the file; see
//! [`BackendConfig::api_key`].

use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

use crate::error::{ConfigError, Result};

/// Environment variable holding the Bedrock API credential.
pub const API_KEY_ENV: &str = "BEDROCK_API_KEY";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Inference backend settings.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Bedrock runtime base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model identifier addressed by the invoke resource path.
    #[serde(default = "default_model")]
    pub model: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_base_url() -> String {
    "https://bedrock-runtime.us-east-1.amazonaws.com".into()
}

fn default_model() -> String {
    "anthropic.claude-3-haiku-20240307-v1:0".into()
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

impl Config {
    /// Load and validate configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent.
    ///
    /// A file that exists but fails to read or parse is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.backend.model.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "model" }.into());
        }
        let url = Url::parse(&self.backend.base_url)?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::InvalidValue {
                field: "base_url",
                reason: format!("unsupported scheme '{}'", url.scheme()),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
        }
    }
}

impl BackendConfig {
    /// Read the API credential from the environment, if present.
    ///
    /// Request signing and credential provisioning belong to the deployment
    /// environment; the client only attaches a bearer token when one is set.
    #[must_use]
    pub fn api_key(&self) -> Option<String> {
        std::env::var(API_KEY_ENV).ok().filter(|v| !v.is_empty())
    }
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_bedrock_runtime() {
        let config = Config::default();
        assert!(config.backend.base_url.contains("bedrock-runtime"));
        assert!(config.backend.model.starts_with("anthropic."));
        assert_eq!(config.logging.level, "info");
        config.validate().expect("defaults validate");
    }

    #[test]
    fn partial_file_fills_missing_sections() {
        let config: Config = toml::from_str(
            r#"
            [logging]
            level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.backend.model, default_model());
    }

    #[test]
    fn empty_model_is_rejected() {
        let config: Config = toml::from_str(
            r#"
            [backend]
            model = "  "
            "#,
        )
        .unwrap();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("model"));
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let config: Config = toml::from_str(
            r#"
            [backend]
            base_url = "ftp://bedrock.example.com"
            "#,
        )
        .unwrap();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("scheme"));
    }

    #[test]
    fn garbage_base_url_is_a_url_error() {
        let config: Config = toml::from_str(
            r#"
            [backend]
            base_url = "not a url"
            "#,
        )
        .unwrap();

        assert!(config.validate().is_err());
    }
}
