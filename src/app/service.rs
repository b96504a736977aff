//! Typed client facade for haiku generation.

use std::sync::Arc;

use tracing::{debug, error};

use crate::adapter::outbound::bedrock::Bedrock;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::port::outbound::backend::HaikuBackend;

/// Client facade exposing a single "generate haiku" operation.
///
/// Wraps the outbound port in one best-effort attempt per call: no retries,
/// no timeout, no backoff. Transport failures are logged and re-raised
/// unchanged; everything else is folded into the returned value.
pub struct HaikuService {
    backend: Arc<dyn HaikuBackend>,
}

impl HaikuService {
    /// Create a facade over any backend implementation.
    #[must_use]
    pub fn new(backend: Arc<dyn HaikuBackend>) -> Self {
        Self { backend }
    }

    /// Wire the production Bedrock backend from configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(Bedrock::from_config(&config.backend)))
    }

    /// Backend name, for diagnostics.
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Generate a haiku for a prompt.
    ///
    /// The prompt is expected to be pre-validated non-empty by the caller;
    /// this function does not enforce it.
    ///
    /// Returns `Ok(Some(text))` when the remote operation produced data
    /// (data takes precedence even when errors ride along), `Ok(None)` when
    /// it completed without data or errors, and an error otherwise.
    ///
    /// # Errors
    ///
    /// - [`Error::Remote`] when the operation completed without data but
    ///   reported errors; the message is the joined error list.
    /// - Transport errors from the backend, re-raised after logging.
    pub async fn generate(&self, prompt: &str) -> Result<Option<String>> {
        let outcome = match self.backend.generate_haiku(prompt).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(backend = self.backend.name(), error = %e, "haiku generation failed");
                return Err(e);
            }
        };

        if let Some(text) = outcome.data {
            debug!(backend = self.backend.name(), chars = text.len(), "haiku generated");
            return Ok(Some(text));
        }

        if !outcome.errors.is_empty() {
            let message = outcome.joined_errors();
            error!(backend = self.backend.name(), %message, "remote operation reported errors");
            return Err(Error::Remote { message });
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::MockBackend;

    #[tokio::test]
    async fn data_resolves_to_text() {
        let service = HaikuService::new(Arc::new(MockBackend::with_haiku("Petals drift like snow")));

        let result = service.generate("cherry blossoms in spring").await.unwrap();
        assert_eq!(result.as_deref(), Some("Petals drift like snow"));
    }

    #[tokio::test]
    async fn errors_without_data_become_remote_error() {
        let service = HaikuService::new(Arc::new(MockBackend::with_errors([
            "model unavailable",
            "quota exceeded",
        ])));

        let err = service.generate("rain").await.unwrap_err();
        match err {
            Error::Remote { message } => {
                assert_eq!(message, "model unavailable, quota exceeded");
            }
            other => panic!("expected remote error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn data_takes_precedence_over_errors() {
        let service = HaikuService::new(Arc::new(MockBackend::with_haiku_and_errors(
            "Still the frog leaps in",
            ["partial failure"],
        )));

        let result = service.generate("ponds").await.unwrap();
        assert_eq!(result.as_deref(), Some("Still the frog leaps in"));
    }

    #[tokio::test]
    async fn empty_outcome_resolves_to_none() {
        let service = HaikuService::new(Arc::new(MockBackend::empty()));

        let result = service.generate("wind").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn transport_failure_is_reraised() {
        let service = HaikuService::new(Arc::new(MockBackend::failing("connection reset")));

        let err = service.generate("storms").await.unwrap_err();
        assert!(matches!(err, Error::Connection(_)));
        assert!(err.to_string().contains("connection reset"));
    }
}
