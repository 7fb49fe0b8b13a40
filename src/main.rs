//! Tutorial Games - Unified CLI
//!
//! Terminal tic-tac-toe with move history, plus animal fun facts.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tutorial_facts::Catalog;
use tutorial_games::{AppConfig, Cli, ScreenTransition, init_file_tracing, run_tui};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }
    init_file_tracing(config.log_file(), config.log_filter())?;
    info!(?config, "Configuration resolved");

    let catalog = match config.catalog() {
        Some(path) => Catalog::from_file(path)?,
        None => Catalog::builtin(),
    };

    let start = cli
        .command
        .map(|c| c.start_screen())
        .unwrap_or(ScreenTransition::Stay);

    run_tui(&config, catalog, start).await
}
