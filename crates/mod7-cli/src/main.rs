//! mod7 CLI entrypoint.

use clap::Parser;
use std::sync::LazyLock;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod handlers;

#[cfg(test)]
mod handlers_tests;

use commands::{Commands, ConfigCommands};
use config::{CliConfig, OutputFormat};

/// Package version, with the git revision appended when `MOD7_GIT_VERSION`
/// was set at build time.
static VERSION: LazyLock<String> = LazyLock::new(|| match option_env!("MOD7_GIT_VERSION") {
    Some(rev) if !rev.is_empty() => format!("{} ({})", env!("CARGO_PKG_VERSION"), rev),
    _ => env!("CARGO_PKG_VERSION").to_string(),
});

#[derive(Parser)]
#[command(name = "mod7")]
#[command(author, version = VERSION.as_str(), about = "Generate and validate mod7 CD and OEM keys", long_about = None)]
struct Cli {
    /// Report format (defaults to the configured format)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CliConfig::load().unwrap_or_default();
    let format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Generate {
            kind,
            count,
            seed,
            time,
        } => handlers::generate(&config, kind, count, seed, time).await?,
        Commands::Validate { key } => handlers::validate(format, &key)?,
        Commands::Batch { path, time } => {
            handlers::batch(format, &path, time || config.show_timing).await?
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => handlers::show_config(&config)?,
            ConfigCommands::Set { key, value } => handlers::set_config(&key, &value)?,
        },
    }

    Ok(())
}
