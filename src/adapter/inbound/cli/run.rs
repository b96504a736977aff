//! Handler for the `run` command: the interactive haiku session.
//!
//! Owns the submitter state machine. State lives in one struct owned by the
//! session loop and is mutated only on submission boundaries, never
//! concurrently; the loading flag is a mutual-exclusion gate, not a queue.

use dialoguer::{theme::ColorfulTheme, Input};

use crate::adapter::inbound::cli::command::RunArgs;
use crate::adapter::inbound::cli::output;
use crate::app::HaikuService;
use crate::config::Config;
use crate::error::{Error, Result};

/// Error shown when submission is attempted with an empty topic.
pub const EMPTY_PROMPT_ERROR: &str = "Please enter a topic for your haiku";

/// Display state owned by the submitter.
#[derive(Debug, Default, Clone)]
pub struct SubmitterState {
    /// Current topic text.
    pub prompt: String,
    /// Last generated haiku, or empty.
    pub haiku: String,
    /// Whether a call is in flight.
    pub loading: bool,
    /// Last error message, or empty.
    pub error: String,
}

/// What happened to a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// A call was already in flight; the attempt was ignored, not queued.
    Ignored,
    /// Rejected at the validation boundary; no call was attempted.
    Rejected,
    /// A call completed and the state holds either a haiku or an error.
    Completed,
}

/// The prompt submitter: validates input, drives the facade, and records
/// the outcome in its display state.
pub struct Submitter {
    service: HaikuService,
    state: SubmitterState,
}

impl Submitter {
    #[must_use]
    pub fn new(service: HaikuService) -> Self {
        Self {
            service,
            state: SubmitterState::default(),
        }
    }

    /// Current display state.
    #[must_use]
    pub fn state(&self) -> &SubmitterState {
        &self.state
    }

    /// Test-only mutable access to the display state.
    #[cfg(any(test, feature = "testkit"))]
    pub fn state_mut(&mut self) -> &mut SubmitterState {
        &mut self.state
    }

    /// Replace the current topic text.
    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.state.prompt = prompt.into();
    }

    /// Submit the current prompt.
    ///
    /// Empty or whitespace-only prompts are rejected before any call is
    /// made. Otherwise exactly one call is awaited; on settle the loading
    /// flag clears and the state holds either the haiku or an error message.
    pub async fn submit(&mut self) -> Submission {
        if self.state.loading {
            return Submission::Ignored;
        }

        if self.state.prompt.trim().is_empty() {
            self.state.error = EMPTY_PROMPT_ERROR.to_string();
            return Submission::Rejected;
        }

        self.state.loading = true;
        self.state.error.clear();

        match self.service.generate(&self.state.prompt).await {
            Ok(Some(text)) => {
                self.state.haiku = text;
            }
            Ok(None) => {}
            Err(e) => {
                self.state.error = e.to_string();
            }
        }

        self.state.loading = false;
        Submission::Completed
    }
}

/// Execute the run command.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let config = Config::load_or_default(&args.config)?;
    config.init_logging();

    let service = HaikuService::from_config(&config);
    let mut submitter = Submitter::new(service);

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Model", &config.backend.model);
    if output::verbosity() > 0 {
        output::field("Endpoint", &config.backend.base_url);
    }
    output::note("Type a topic and press Enter; 'exit' ends the session.");

    loop {
        let input: String = match Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Topic")
            .allow_empty(true)
            .interact_text()
            .map_err(input_error)
        {
            Ok(line) => line,
            // EOF (e.g. Ctrl-D) ends the session like an explicit exit.
            Err(Error::Io(_)) => break,
            Err(e) => return Err(e),
        };

        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
            break;
        }

        submitter.set_prompt(input);
        submit_and_render(&mut submitter).await;
    }

    Ok(())
}

/// Run one submission and render the result/error regions.
async fn submit_and_render(submitter: &mut Submitter) {
    // Mirrors the disabled submit control: no loading indicator unless a
    // call will actually be made.
    let pb = (!submitter.state().prompt.trim().is_empty())
        .then(|| output::spinner("Generating haiku..."));

    let submission = submitter.submit().await;
    let state = submitter.state();

    match submission {
        Submission::Rejected => {
            output::error(&state.error);
        }
        Submission::Completed if state.error.is_empty() => {
            if let Some(pb) = &pb {
                output::spinner_success(pb, "Haiku generated");
            }
            if !state.haiku.is_empty() {
                output::haiku(&state.haiku);
            }
        }
        Submission::Completed => {
            if let Some(pb) = &pb {
                output::spinner_fail(pb, "Generation failed");
            }
            output::error(&state.error);
        }
        Submission::Ignored => {
            if let Some(pb) = &pb {
                pb.finish_and_clear();
            }
        }
    }
}

fn input_error(e: dialoguer::Error) -> Error {
    match e {
        dialoguer::Error::IO(io) => Error::Io(io),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::MockBackend;
    use std::sync::Arc;

    fn submitter_with(backend: MockBackend) -> (Submitter, Arc<MockBackend>) {
        let backend = Arc::new(backend);
        let service = HaikuService::new(backend.clone());
        (Submitter::new(service), backend)
    }

    #[tokio::test]
    async fn successful_submission_sets_haiku_and_clears_error() {
        let (mut submitter, backend) = submitter_with(MockBackend::with_haiku("Petals drift"));

        submitter.set_prompt("cherry blossoms in spring");
        let submission = submitter.submit().await;

        assert_eq!(submission, Submission::Completed);
        assert_eq!(submitter.state().haiku, "Petals drift");
        assert!(submitter.state().error.is_empty());
        assert!(!submitter.state().loading);
        assert_eq!(backend.calls(), 1);
    }

    #[tokio::test]
    async fn empty_prompt_is_rejected_without_a_call() {
        let (mut submitter, backend) = submitter_with(MockBackend::with_haiku("unused"));

        submitter.set_prompt("   ");
        let submission = submitter.submit().await;

        assert_eq!(submission, Submission::Rejected);
        assert_eq!(submitter.state().error, EMPTY_PROMPT_ERROR);
        assert!(!submitter.state().loading);
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn transport_failure_sets_error_and_keeps_haiku() {
        let (mut submitter, _backend) = submitter_with(MockBackend::failing("network down"));

        submitter.state_mut().haiku = "previous haiku".to_string();
        submitter.set_prompt("storms");
        let submission = submitter.submit().await;

        assert_eq!(submission, Submission::Completed);
        assert!(submitter.state().error.contains("network down"));
        assert_eq!(submitter.state().haiku, "previous haiku");
        assert!(!submitter.state().loading);
    }

    #[tokio::test]
    async fn submission_while_loading_is_ignored() {
        let (mut submitter, backend) = submitter_with(MockBackend::with_haiku("unused"));

        submitter.set_prompt("mountains");
        submitter.state_mut().loading = true;
        let submission = submitter.submit().await;

        assert_eq!(submission, Submission::Ignored);
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn resubmission_clears_previous_error() {
        let (mut submitter, _backend) = submitter_with(MockBackend::with_haiku("Frost on the pane"));

        submitter.state_mut().error = "old error".to_string();
        submitter.set_prompt("winter windows");
        submitter.submit().await;

        assert!(submitter.state().error.is_empty());
        assert_eq!(submitter.state().haiku, "Frost on the pane");
    }

    #[tokio::test]
    async fn empty_outcome_leaves_display_unchanged() {
        let (mut submitter, backend) = submitter_with(MockBackend::empty());

        submitter.set_prompt("clouds");
        let submission = submitter.submit().await;

        assert_eq!(submission, Submission::Completed);
        assert!(submitter.state().haiku.is_empty());
        assert!(submitter.state().error.is_empty());
        assert_eq!(backend.calls(), 1);
    }
}
