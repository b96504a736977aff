//! Amazon Bedrock inference client.
//!
//! Provides an implementation of the [`HaikuBackend`] port for the Bedrock
//! runtime invoke API (Anthropic model family), together with the pure
//! request/response transform pair that isolates the model wire schema from
//! the rest of the crate. Swapping the backing model only requires replacing
//! this module.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::BackendConfig;
use crate::error::{Error, Result};
use crate::port::outbound::backend::{HaikuBackend, RemoteOutcome};

/// Protocol version tag expected by the Bedrock Anthropic schema.
const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

/// Maximum tokens to generate in the response.
const MAX_TOKENS: u32 = 1000;

/// Request body for the Bedrock invoke endpoint.
#[derive(Debug, Serialize)]
pub struct InvokeRequest {
    anthropic_version: &'static str,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: Vec<ContentBlock>,
}

#[derive(Debug, Serialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: &'static str,
    text: String,
}

/// Response body from the Bedrock invoke endpoint.
#[derive(Debug, Deserialize)]
pub struct InvokeResponse {
    content: Vec<ResponseBlock>,
}

#[derive(Debug, Deserialize)]
struct ResponseBlock {
    text: String,
}

/// Build the invoke request body for a prompt.
///
/// Pure and deterministic: the same prompt always yields a value-equal
/// request. Prompt validation happens upstream; empty input is passed
/// through unchanged.
#[must_use]
pub fn build_request(prompt: &str) -> InvokeRequest {
    InvokeRequest {
        anthropic_version: ANTHROPIC_VERSION,
        max_tokens: MAX_TOKENS,
        messages: vec![Message {
            role: "user",
            content: vec![ContentBlock {
                kind: "text",
                text: prompt.to_string(),
            }],
        }],
    }
}

/// Extract the generated text from an invoke response.
///
/// Only the first content block is read; trailing blocks are ignored.
///
/// # Errors
///
/// Returns [`Error::MalformedResponse`] when the content sequence is empty,
/// so callers can tell an unusable payload apart from a failed call.
pub fn parse_response(raw: InvokeResponse) -> Result<String> {
    raw.content
        .into_iter()
        .next()
        .map(|block| block.text)
        .ok_or_else(|| Error::MalformedResponse {
            reason: "empty content sequence".to_string(),
        })
}

/// Bedrock runtime API client.
///
/// Implements [`HaikuBackend`] by POSTing the invoke request body to the
/// model's resource path. One call is exactly one HTTP attempt.
#[derive(Debug)]
pub struct Bedrock {
    /// HTTP client for API requests.
    client: Client,
    /// Runtime base URL (region-specific).
    base_url: String,
    /// Model identifier addressed by the resource path.
    model: String,
    /// Optional bearer credential; provisioning is the environment's job.
    api_key: Option<String>,
}

impl Bedrock {
    /// Create a new Bedrock client with explicit configuration.
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            model: model.into(),
            api_key,
        }
    }

    /// Create a client from validated backend configuration.
    ///
    /// The credential is read from the environment (see
    /// [`BackendConfig::api_key`]).
    #[must_use]
    pub fn from_config(config: &BackendConfig) -> Self {
        Self::new(
            config.base_url.clone(),
            config.model.clone(),
            config.api_key(),
        )
    }

    /// Probe the runtime endpoint.
    ///
    /// Any HTTP response counts as reachable (the unauthenticated root will
    /// typically answer 403/404); only transport-level failures are errors.
    pub async fn verify_connectivity(&self) -> Result<()> {
        self.client
            .get(&self.base_url)
            .send()
            .await
            .map(|_| ())
            .map_err(|e| Error::Connection(e.to_string()))
    }

    /// Resource path identifying model and operation.
    fn invoke_url(&self) -> String {
        format!(
            "{}/model/{}/invoke",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl HaikuBackend for Bedrock {
    fn name(&self) -> &'static str {
        "bedrock"
    }

    async fn generate_haiku(&self, prompt: &str) -> Result<RemoteOutcome> {
        let request = build_request(prompt);

        let mut call = self
            .client
            .post(self.invoke_url())
            .header("content-type", "application/json")
            .json(&request);
        if let Some(key) = &self.api_key {
            call = call.bearer_auth(key);
        }

        let response = call
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::Connection(e.to_string()))?
            .json::<InvokeResponse>()
            .await?;

        let text = parse_response(response)?;
        Ok(RemoteOutcome::with_data(text))
    }
}


/// Integration tests that require real API access.
/// Run with: `cargo test --features integration-tests -- --ignored`
#[cfg(all(test, feature = "integration-tests"))]
mod integration_tests {
    use super::*;
    use crate::config::Config;
    use std::time::Duration;

    /// Requires BEDROCK_API_KEY to be set.
    fn create_test_client() -> Option<Bedrock> {
        let config = Config::default();
        if config.backend.api_key().is_none() {
            eprintln!("Skipping Bedrock integration test: BEDROCK_API_KEY not set");
            return None;
        }
        Some(Bedrock::from_config(&config.backend))
    }

    #[tokio::test]
    #[ignore = "requires BEDROCK_API_KEY and network access"]
    async fn test_generate_haiku_returns_text() {
        let Some(client) = create_test_client() else {
            return;
        };

        let outcome = tokio::time::timeout(
            Duration::from_secs(30),
            client.generate_haiku("cherry blossoms in spring"),
        )
        .await
        .expect("Request timed out")
        .expect("API call failed");

        let text = outcome.data.expect("expected generated text");
        assert!(!text.trim().is_empty());
    }
}
