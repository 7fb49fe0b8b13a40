//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are kept apart from
//! board storage and history so that any snapshot can be judged.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, calculate_winner, winning_line};
