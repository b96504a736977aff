use clap::Parser;

use haikugen::adapter::inbound::cli::command::{Cli, ColorChoice, Commands, ConfigCommand};
use haikugen::adapter::inbound::cli::{check, config as config_cmd, generate, output, run};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }

    output::configure(output::OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    let result = match &cli.command {
        Commands::Run(args) => run::execute(args).await,
        Commands::Generate(args) => generate::execute(args).await,
        Commands::Check(args) => check::execute(args).await,
        Commands::Config(cmd) => match cmd {
            ConfigCommand::Init { config, force } => config_cmd::execute_init(config, *force),
            ConfigCommand::Validate { config } => config_cmd::execute_validate(config),
            ConfigCommand::Show { config } => config_cmd::execute_show(config),
        },
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
