mod args;
mod commands;
mod logging;

use ca_core::bootstrap::install_default;
use ca_core::config::load_config;
use clap::Parser;

use crate::args::Cli;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config = load_config(&cli.root)?;
    logging::init(&config.settings.log_filter);
    tracing::debug!(root = %cli.root.display(), "Configuration loaded");

    let orchestrator = install_default(&config);
    let succeeded = commands::run(orchestrator, cli.command).await?;

    if !succeeded {
        std::process::exit(1);
    }
    Ok(())
}
