//! Haiku generation port for inference backends.
//!
//! Defines the named remote operation the client facade invokes: hand over a
//! prompt, get back either generated text or a list of operation errors.

use async_trait::async_trait;

use crate::error::Result;

/// Result of a completed remote generation call.
///
/// Mirrors a query-style remote operation that resolves with optional data
/// and an optional error list rather than failing the transport. A transport
/// failure is an `Err` from [`HaikuBackend::generate_haiku`] instead.
#[derive(Debug, Clone, Default)]
pub struct RemoteOutcome {
    /// Generated text, when the operation produced any.
    pub data: Option<String>,
    /// Operation-level errors reported alongside (or instead of) data.
    pub errors: Vec<OperationError>,
}

/// A single operation-level error returned by the remote operation.
#[derive(Debug, Clone)]
pub struct OperationError {
    pub message: String,
}

impl RemoteOutcome {
    /// Outcome carrying generated text.
    #[must_use]
    pub fn with_data(text: impl Into<String>) -> Self {
        Self {
            data: Some(text.into()),
            errors: Vec::new(),
        }
    }

    /// Outcome carrying only operation errors.
    #[must_use]
    pub fn with_errors<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            data: None,
            errors: messages
                .into_iter()
                .map(|message| OperationError {
                    message: message.into(),
                })
                .collect(),
        }
    }

    /// Join all operation error messages into one human-readable string.
    #[must_use]
    pub fn joined_errors(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Backend capable of generating a haiku from a topic prompt.
///
/// Implementations wrap a hosted inference endpoint and handle the wire
/// format; callers treat the transport as opaque. One call is exactly one
/// attempt: no retries, no timeout policy, no cancellation handle.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a single instance can be shared
/// behind an `Arc`.
#[async_trait]
pub trait HaikuBackend: Send + Sync {
    /// Return the backend name for logging and diagnostics.
    fn name(&self) -> &'static str;

    /// Submit a prompt and await the remote outcome.
    ///
    /// # Errors
    ///
    /// Returns an error for transport failures, non-success HTTP statuses,
    /// or an unusable response payload.
    async fn generate_haiku(&self, prompt: &str) -> Result<RemoteOutcome>;
}
