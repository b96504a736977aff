//! Handler for the `check` command: configuration and backend diagnostics.

use crate::adapter::inbound::cli::command::CheckArgs;
use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::bedrock::Bedrock;
use crate::config::{Config, API_KEY_ENV};
use crate::error::Result;

/// Execute the check command.
pub async fn execute(args: &CheckArgs) -> Result<()> {
    let config = Config::load_or_default(&args.config)?;

    output::section("Backend Check");
    output::field("Endpoint", &config.backend.base_url);
    output::field("Model", &config.backend.model);

    if config.backend.api_key().is_some() {
        output::success("API credential present");
    } else {
        output::warning(&format!("{API_KEY_ENV} is not set; requests will be unsigned"));
    }

    let backend = Bedrock::from_config(&config.backend);
    let pb = output::spinner("Checking endpoint reachability...");
    match backend.verify_connectivity().await {
        Ok(()) => {
            output::spinner_success(&pb, "Endpoint reachable");
        }
        Err(e) => {
            output::spinner_fail(&pb, "Endpoint unreachable");
            return Err(e);
        }
    }

    output::success("Backend checks passed");

    Ok(())
}
