//! Tutorial Games library - terminal front end for two small exercises
//!
//! # Architecture
//!
//! - **Tic-tac-toe**: pure game state engine with snapshot history
//!   (`tutorial_tictactoe`), played through [`TicTacToeScreen`]
//! - **Animal facts**: catalog with random fact selection (`tutorial_facts`),
//!   browsed through [`FactsScreen`]
//! - **TUI**: [`AppController`] drives screens implementing [`Screen`]
//! - **Config**: [`AppConfig`] loaded from TOML

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH};
pub use logging::init_file_tracing;
pub use tui::{
    ActiveScreen, AppController, FactsScreen, Focus, MenuScreen, Screen, ScreenTransition,
    TicTacToeScreen, run_tui,
};
