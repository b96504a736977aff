//! Mock generation backend with scripted outcomes.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::port::outbound::backend::{HaikuBackend, OperationError, RemoteOutcome};

/// Scripted behavior for a [`MockBackend`] call.
#[derive(Debug, Clone)]
enum Script {
    Outcome {
        data: Option<String>,
        errors: Vec<String>,
    },
    TransportFailure(String),
}

/// Mock backend returning a fixed outcome on every call.
///
/// Counts invocations so tests can assert that no call was made when the
/// submitter rejects a prompt at its boundary.
pub struct MockBackend {
    script: Script,
    calls: AtomicUsize,
}

impl MockBackend {
    /// Backend that resolves with generated text.
    #[must_use]
    pub fn with_haiku(text: impl Into<String>) -> Self {
        Self::scripted(Script::Outcome {
            data: Some(text.into()),
            errors: Vec::new(),
        })
    }

    /// Backend that completes without data, reporting operation errors.
    #[must_use]
    pub fn with_errors<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::scripted(Script::Outcome {
            data: None,
            errors: messages.into_iter().map(Into::into).collect(),
        })
    }

    /// Backend that returns both data and errors in one outcome.
    #[must_use]
    pub fn with_haiku_and_errors<I, S>(text: impl Into<String>, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::scripted(Script::Outcome {
            data: Some(text.into()),
            errors: messages.into_iter().map(Into::into).collect(),
        })
    }

    /// Backend that completes with neither data nor errors.
    #[must_use]
    pub fn empty() -> Self {
        Self::scripted(Script::Outcome {
            data: None,
            errors: Vec::new(),
        })
    }

    /// Backend whose transport fails on every call.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self::scripted(Script::TransportFailure(message.into()))
    }

    /// Number of calls received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn scripted(script: Script) -> Self {
        Self {
            script,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl HaikuBackend for MockBackend {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn generate_haiku(&self, _prompt: &str) -> Result<RemoteOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            Script::Outcome { data, errors } => Ok(RemoteOutcome {
                data: data.clone(),
                errors: errors
                    .iter()
                    .map(|message| OperationError {
                        message: message.clone(),
                    })
                    .collect(),
            }),
            Script::TransportFailure(message) => Err(Error::Connection(message.clone())),
        }
    }
}
