//! tictactoe_screen - animated two-player tic-tac-toe in the terminal.

#![warn(missing_docs)]

mod cli;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use tictactoe_screen::{ScreenConfig, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing(&cli.log_file)?;

    let config = ScreenConfig::load_or_default(&cli.config)?;
    info!(?config, fresh = cli.fresh, "Configuration ready");

    run_tui(config, &cli.snapshot, cli.fresh).await
}

/// Logs to a file so the terminal stays with the UI.
#[instrument]
fn initialize_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tictactoe_screen=debug")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    info!("Tracing initialized");
    Ok(())
}
