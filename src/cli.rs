//! Command-line interface for tictactoe_screen.

use std::path::PathBuf;

use clap::Parser;

/// Animated two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe_screen")]
#[command(about = "Two-player tic-tac-toe with animated cells", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the screen configuration file (TOML)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Where the game is saved on exit and resumed from on start
    #[arg(short, long, default_value = "tictactoe_snapshot.json")]
    pub snapshot: PathBuf,

    /// Log file (the terminal is owned by the UI)
    #[arg(long, default_value = "tictactoe_screen.log")]
    pub log_file: PathBuf,

    /// Ignore any saved game and start empty
    #[arg(long)]
    pub fresh: bool,
}
