//! Handler for the `generate` command: one-shot haiku generation.

use crate::adapter::inbound::cli::command::GenerateArgs;
use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::cli::run::EMPTY_PROMPT_ERROR;
use crate::app::HaikuService;
use crate::config::Config;
use crate::error::{Error, Result};

/// Execute the generate command.
pub async fn execute(args: &GenerateArgs) -> Result<()> {
    let topic = args.topic.trim();
    if topic.is_empty() {
        return Err(Error::Validation {
            message: EMPTY_PROMPT_ERROR.to_string(),
        });
    }

    let config = Config::load_or_default(&args.config)?;
    config.init_logging();

    let service = HaikuService::from_config(&config);

    let pb = output::spinner("Generating haiku...");
    match service.generate(topic).await {
        Ok(Some(text)) => {
            output::spinner_success(&pb, "Haiku generated");
            output::haiku(&text);
            Ok(())
        }
        Ok(None) => {
            output::spinner_fail(&pb, "No haiku returned");
            output::warning("The model returned no text for this topic");
            Ok(())
        }
        Err(e) => {
            output::spinner_fail(&pb, "Generation failed");
            Err(e)
        }
    }
}
