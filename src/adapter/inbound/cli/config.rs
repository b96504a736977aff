//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use crate::adapter::inbound::cli::{diagnostic, output};
use crate::config::{Config, API_KEY_ENV};
use crate::error::{ConfigError, Result};

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your settings", path.display()));
    output::note(&format!("2. Set the {API_KEY_ENV} environment variable"));
    output::note(&format!("3. Run: haikugen check -c {}", path.display()));
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

    let config: Config = match toml::from_str(&content) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{:?}", diagnostic::parse_report(&content, &err));
            return Err(ConfigError::Other("configuration failed validation".to_string()).into());
        }
    };

    config.validate()?;

    output::success("Configuration is valid");
    output::field("Endpoint", &config.backend.base_url);
    output::field("Model", &config.backend.model);
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = Config::load_or_default(path)?;

    output::section("Effective Configuration");

    output::section("Backend");
    output::field("Endpoint", &config.backend.base_url);
    output::field("Model", &config.backend.model);
    output::field(
        "Credential",
        if config.backend.api_key().is_some() {
            "present"
        } else {
            "not set"
        },
    );

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    Ok(())
}
