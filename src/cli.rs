//! Command-line interface for tutorial_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::tui::ScreenTransition;

/// Tutorial Games - tic-tac-toe with time travel and animal fun facts
#[derive(Parser, Debug)]
#[command(name = "tutorial_games")]
#[command(about = "Terminal tic-tac-toe with move history, plus animal fun facts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Screen to open; the menu opens when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play tic-tac-toe
    #[command(name = "tictactoe")]
    TicTacToe,

    /// Browse animal fun facts
    Facts,
}

impl Command {
    /// Screen this subcommand opens.
    pub fn start_screen(self) -> ScreenTransition {
        match self {
            Command::TicTacToe => ScreenTransition::GoToTicTacToe,
            Command::Facts => ScreenTransition::GoToFacts,
        }
    }
}
