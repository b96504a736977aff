//! Command-line interface definitions.
//!
//! Defines the CLI structure for the haikugen application using `clap`.
//! The CLI supports an interactive session, one-shot generation, diagnostic
//! checks, and configuration tooling.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// AI haiku generation CLI backed by Amazon Bedrock
#[derive(Parser, Debug)]
#[command(name = "haikugen")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the haikugen CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive haiku session (foreground)
    Run(RunArgs),

    /// Generate a single haiku and exit
    Generate(GenerateArgs),

    /// Run diagnostic checks against the configured backend
    Check(CheckArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for the `run` command.
#[derive(clap::Args, Debug)]
pub struct RunArgs {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `generate` command.
#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Topic for the haiku (e.g. "cherry blossoms in spring")
    pub topic: String,

    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `check` command.
#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Subcommands for `config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write a documented configuration template
    Init {
        /// Destination path
        #[arg(short, long, default_value = "config.toml")]
        config: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Validate a configuration file
    Validate {
        /// Path to the configuration file
        #[arg(short, long, default_value = "config.toml")]
        config: PathBuf,
    },
    /// Show the effective configuration
    Show {
        /// Path to the configuration file
        #[arg(short, long, default_value = "config.toml")]
        config: PathBuf,
    },
}
