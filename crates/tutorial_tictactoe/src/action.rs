//! Moves and the reasons a move can be turned away.

use super::{Mark, Position};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// The position where the mark is placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a move left the game unchanged.
///
/// [`GameState::apply_move`](crate::GameState::apply_move) absorbs these
/// silently; [`GameState::try_apply_move`](crate::GameState::try_apply_move)
/// reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveRejected {
    /// The viewed snapshot already has a winner.
    #[display("Game already won by {}", _0)]
    AlreadyWon(#[error(not(source))] Mark),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),
}

/// A raw cell index outside 0-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Cell index {} out of bounds (must be 0-8)", index)]
pub struct InvalidCell {
    /// The rejected index.
    pub index: usize,
}
