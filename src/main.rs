//! Entry point: parse CLI, set up logging and dispatch to the command handlers.

use clap::Parser;
use fpl_api::{cli::Fpl, commands, FplConfig};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = Fpl::parse();

    let filter = if app.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = FplConfig::from_env();
    commands::run(app.command, &config).await
}
