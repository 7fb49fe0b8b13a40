//! Pure tic-tac-toe game state engine with snapshot history.
//!
//! A [`GameState`] holds every board snapshot since the start of the game and
//! the step currently viewed. Moves branch history from the viewed step;
//! [`GameState::jump_to`] moves the view without touching history.
//!
//! ```
//! use tutorial_tictactoe::{GameState, Mark, Position, Status};
//!
//! let state = GameState::new()
//!     .apply_move(Position::TopLeft)
//!     .apply_move(Position::Center);
//! assert_eq!(state.history().len(), 3);
//!
//! let state = state.jump_to(0).unwrap().apply_move(Position::BottomRight);
//! assert_eq!(state.history().len(), 2);
//! assert_eq!(state.status(), Status::NextPlayer(Mark::O));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{InvalidCell, Move, MoveRejected};
pub use game::{GameState, HistoryEntry, InvalidGameState, Status, StepOutOfRange, step_label};
pub use history::{History, Snapshot};
pub use invariants::{GameInvariants, Invariant, InvariantSet, InvariantViolation};
pub use position::Position;
pub use rules::{calculate_winner, is_draw, is_full, winning_line};
pub use types::{Board, Mark, ParseBoardError, Square};
