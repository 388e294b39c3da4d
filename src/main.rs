use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use repo_pager::cli::Cli;
use repo_pager::config::{get_config, init_config_from};
use repo_pager::interfaces::cli::run_cli_command;
use repo_pager::system::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_config_from(&cli.config);

    let config = get_config();
    let guard = init_logging(&config.logging).context("Failed to initialize logging")?;
    debug!("Using GitHub API at {}", config.github.api_base_url);

    if let Err(e) = run_cli_command(cli.command).await {
        eprintln!("{}", e.format_colored());
        drop(guard);
        std::process::exit(1);
    }

    Ok(())
}
