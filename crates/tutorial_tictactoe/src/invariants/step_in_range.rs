//! Current step invariant: the viewed snapshot exists.

use super::Invariant;
use crate::GameState;

/// Invariant: `current_step < history.len()`.
pub struct StepInRangeInvariant;

impl Invariant<GameState> for StepInRangeInvariant {
    fn holds(state: &GameState) -> bool {
        state.current_step() < state.history().len()
    }

    fn description() -> &'static str {
        "Current step indexes an existing snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;

    #[test]
    fn test_new_game_holds() {
        assert!(StepInRangeInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_step_past_end_violates() {
        let state = GameState::from_parts_unchecked(vec![Board::new()], 1);
        assert!(!StepInRangeInvariant::holds(&state));
    }
}
