//! Tictac - two players, one keyboard.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictac::{Cli, GameConfig, play};
use tictac_board::Board;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = GameConfig::load(&cli).context("Failed to load configuration")?;
    info!(?config, "Starting game");

    let mut board = Board::new();
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    play(&mut board, stdin.lock(), &mut stdout, &config).context("Game ended early")?;

    Ok(())
}
