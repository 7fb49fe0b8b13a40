//! History origin invariant: every game starts from the empty board.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: `history[0]` is the empty board.
pub struct StartsEmptyInvariant;

impl Invariant<GameState> for StartsEmptyInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .get(0)
            .is_some_and(|first| *first.board() == Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}
