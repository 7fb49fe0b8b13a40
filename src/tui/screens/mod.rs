//! Screens of the terminal application.

mod facts;
mod menu;
mod tictactoe;

pub use facts::FactsScreen;
pub use menu::MenuScreen;
pub use tictactoe::{Focus, TicTacToeScreen};
