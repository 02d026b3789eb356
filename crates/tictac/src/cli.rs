//! Command-line interface for tictac.

use clap::Parser;
use std::path::PathBuf;

/// Tictac - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug, Clone)]
#[command(name = "tictac")]
#[command(about = "Two-player tic-tac-toe on a 3x3 board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (missing file falls back to defaults)
    #[arg(short, long, default_value = "tictac.toml")]
    pub config: PathBuf,

    /// Keep previous output instead of clearing the screen each turn
    #[arg(long)]
    pub no_clear: bool,

    /// Display name for the X player
    #[arg(long)]
    pub player_x: Option<String>,

    /// Display name for the O player
    #[arg(long)]
    pub player_o: Option<String>,

    /// Log filter used when RUST_LOG is unset (logs go to stderr)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
