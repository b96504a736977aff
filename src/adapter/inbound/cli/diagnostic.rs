//! Miette-based error diagnostics for CLI error presentation.
//!
//! Renders configuration parse failures with source context, a labeled
//! span, and a help suggestion.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(haikugen::config))]
pub struct ConfigDiagnostic {
    /// Human-readable error message.
    pub message: String,

    /// Source content (the configuration file text).
    #[source_code]
    pub src: String,

    /// Byte offset and length of the problematic region.
    #[label("here")]
    pub span: SourceSpan,

    /// Optional help text with suggestions for fixing the error.
    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    /// Create a new configuration diagnostic with source location.
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        src: impl Into<String>,
        offset: usize,
        len: usize,
    ) -> Self {
        Self {
            message: message.into(),
            src: src.into(),
            span: (offset, len).into(),
            help: None,
        }
    }

    /// Add a help suggestion to the diagnostic.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Build a report for a TOML parse failure, pointing at the offending span.
#[must_use]
pub fn parse_report(src: &str, err: &toml::de::Error) -> miette::Report {
    let span = err.span().unwrap_or(0..0);
    miette::Report::new(
        ConfigDiagnostic::new(err.message().to_string(), src.to_string(), span.start, span.len())
            .with_help("see config.toml.example for the expected layout"),
    )
}
