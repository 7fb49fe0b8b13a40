//! Snapshot chain invariant: each turn fills exactly one empty cell.

use super::Invariant;
use crate::{GameState, Mark, Square};

/// Invariant: for every `i >= 1`, `history[i]` differs from `history[i - 1]` in
/// exactly one cell, that cell was empty, and it now holds the mark of turn `i`
/// (X on odd steps, O on even steps).
pub struct SingleCellDeltaInvariant;

impl Invariant<GameState> for SingleCellDeltaInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .as_slice()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| {
                let (before, after) = (pair[0].board(), pair[1].board());
                match before.diff(after).as_slice() {
                    [pos] => {
                        before.get(*pos) == Square::Empty
                            && after.get(*pos) == Square::Occupied(Mark::for_step(i))
                    }
                    _ => false,
                }
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark of the player whose turn it was"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position};

    #[test]
    fn test_played_game_holds() {
        let state = GameState::new()
            .apply_move(Position::Center)
            .apply_move(Position::TopLeft);
        assert!(SingleCellDeltaInvariant::holds(&state));
    }

    #[test]
    fn test_two_cells_in_one_turn_violates() {
        let state = GameState::from_parts_unchecked(
            vec![Board::new(), "XX.......".parse().unwrap()],
            1,
        );
        assert!(!SingleCellDeltaInvariant::holds(&state));
    }

    #[test]
    fn test_wrong_mark_violates() {
        let state =
            GameState::from_parts_unchecked(vec![Board::new(), "O........".parse().unwrap()], 1);
        assert!(!SingleCellDeltaInvariant::holds(&state));
    }

    #[test]
    fn test_overwrite_violates() {
        let state = GameState::from_parts_unchecked(
            vec![
                Board::new(),
                "X........".parse().unwrap(),
                "O........".parse().unwrap(),
            ],
            2,
        );
        assert!(!SingleCellDeltaInvariant::holds(&state));
    }
}
