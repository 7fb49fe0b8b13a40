//! Game state engine: snapshot history, current step and derived turn.
//!
//! Every operation is a pure transition. A [`GameState`] is never mutated in
//! place; callers own the current state and replace it with the returned one.

use super::action::{InvalidCell, Move, MoveRejected};
use super::history::{History, Snapshot};
use super::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use super::position::Position;
use super::types::{Board, Mark};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Status line for the viewed snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Status {
    /// The viewed snapshot has a complete line.
    #[display("Winner: {}", _0)]
    Winner(Mark),
    /// No winner yet; this mark moves next.
    #[display("Next player: {}", _0)]
    NextPlayer(Mark),
}

/// Requested step is past the end of history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Step {} out of range (history has {} snapshots)", step, len)]
pub struct StepOutOfRange {
    /// The requested step.
    pub step: usize,
    /// History length at the time of the request.
    pub len: usize,
}

/// One entry in the move list: a step and its label.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct HistoryEntry {
    step: usize,
    label: String,
}

/// Label for the history entry at `step`.
pub fn step_label(step: usize) -> String {
    if step == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", step)
    }
}

/// A snapshot sequence that failed the invariant check.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid game state: {} invariant(s) violated", violations.len())]
pub struct InvalidGameState {
    /// Every violated invariant.
    pub violations: Vec<InvariantViolation>,
}

/// Serialized form of a [`GameState`]: the boards in order plus the viewed step.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SavedGame {
    boards: Vec<Board>,
    current_step: usize,
}

/// Snapshot history plus the step currently viewed and acted upon.
///
/// The mark to move next is derived from the parity of the current step and
/// never stored. Deserialization goes through [`GameState::from_snapshots`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SavedGame", into = "SavedGame")]
pub struct GameState {
    history: History,
    current_step: usize,
}

impl GameState {
    /// Creates a game whose history holds only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            current_step: 0,
        }
    }

    /// Builds a state from a snapshot sequence, checking every invariant.
    ///
    /// # Errors
    ///
    /// Returns each violated invariant if the sequence does not start empty,
    /// skips or rewrites a cell, or `current_step` is out of range.
    #[instrument(skip(boards), fields(len = boards.len()))]
    pub fn from_snapshots(
        boards: Vec<Board>,
        current_step: usize,
    ) -> Result<Self, Vec<InvariantViolation>> {
        let state = Self::from_parts_unchecked(boards, current_step);
        GameInvariants::check_all(&state)?;
        Ok(state)
    }

    pub(crate) fn from_parts_unchecked(boards: Vec<Board>, current_step: usize) -> Self {
        Self {
            history: History::from_snapshots_unchecked(
                boards.into_iter().map(Snapshot::from).collect(),
            ),
            current_step,
        }
    }

    /// Returns the full snapshot history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the index of the viewed snapshot.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns the viewed snapshot.
    pub fn current(&self) -> &Snapshot {
        // Index is in range by construction (StepInRangeInvariant).
        &self.history.as_slice()[self.current_step]
    }

    /// Mark that moves next: X on even steps, O on odd steps.
    pub fn next_mark(&self) -> Mark {
        Mark::for_step(self.current_step)
    }

    /// Winner of the viewed snapshot, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.current().winner()
    }

    /// Status line for the viewed snapshot.
    pub fn status(&self) -> Status {
        match self.winner() {
            Some(mark) => Status::Winner(mark),
            None => Status::NextPlayer(self.next_mark()),
        }
    }

    /// True when the viewed snapshot is the latest one.
    pub fn is_latest(&self) -> bool {
        self.current_step + 1 == self.history.len()
    }

    /// One labelled entry per snapshot, from game start.
    pub fn moves(&self) -> Vec<HistoryEntry> {
        (0..self.history.len())
            .map(|step| HistoryEntry {
                step,
                label: step_label(step),
            })
            .collect()
    }

    /// The move that produced snapshot `step`; `None` for step 0 or past the end.
    pub fn placed_at(&self, step: usize) -> Option<Move> {
        let before = self.history.get(step.checked_sub(1)?)?;
        let after = self.history.get(step)?;
        let position = *before.board().diff(after.board()).first()?;
        let mark = after.get(position).mark()?;
        Some(Move::new(mark, position))
    }

    /// Plays `next_mark` at `position`, branching history from the current step.
    ///
    /// Snapshots after the current step are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`MoveRejected::AlreadyWon`] if the viewed snapshot has a winner,
    /// or [`MoveRejected::SquareOccupied`] if the square is taken.
    #[instrument(skip(self), fields(step = self.current_step, mark = %self.next_mark()))]
    pub fn try_apply_move(&self, position: Position) -> Result<GameState, MoveRejected> {
        let current = self.current();

        if let Some(winner) = current.winner() {
            return Err(MoveRejected::AlreadyWon(winner));
        }
        if !current.board().is_empty(position) {
            return Err(MoveRejected::SquareOccupied(position));
        }

        let next = current.placing(position, self.next_mark());
        let history = self.history.branch(self.current_step, next);
        let current_step = history.len() - 1;
        let state = GameState {
            history,
            current_step,
        };

        debug!(
            discarded = self.history.len() - (self.current_step + 1),
            board = %next.board(),
            "Move applied"
        );
        debug_assert!(
            GameInvariants::check_all(&state).is_ok(),
            "invariants violated after move"
        );
        Ok(state)
    }

    /// Plays `next_mark` at `position`, or returns an unchanged copy when the
    /// viewed snapshot is won or the square is taken.
    pub fn apply_move(&self, position: Position) -> GameState {
        self.try_apply_move(position).unwrap_or_else(|rejected| {
            debug!(%rejected, "Move ignored");
            self.clone()
        })
    }

    /// [`apply_move`](Self::apply_move) addressed by raw cell index.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCell`] for an index outside 0-8.
    pub fn apply_index(&self, index: usize) -> Result<GameState, InvalidCell> {
        let position = Position::from_index(index).ok_or(InvalidCell { index })?;
        Ok(self.apply_move(position))
    }

    /// Views snapshot `step`. History is kept; the next mark follows `step` parity.
    ///
    /// # Errors
    ///
    /// Returns [`StepOutOfRange`] if `step` is not an index into history.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn jump_to(&self, step: usize) -> Result<GameState, StepOutOfRange> {
        if step >= self.history.len() {
            return Err(StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }

        let state = GameState {
            history: self.history.clone(),
            current_step: step,
        };
        debug_assert!(GameInvariants::check_all(&state).is_ok());
        Ok(state)
    }
}

impl TryFrom<SavedGame> for GameState {
    type Error = InvalidGameState;

    fn try_from(saved: SavedGame) -> Result<Self, Self::Error> {
        Self::from_snapshots(saved.boards, saved.current_step)
            .map_err(|violations| InvalidGameState { violations })
    }
}

impl From<GameState> for SavedGame {
    fn from(state: GameState) -> Self {
        Self {
            boards: state.history.iter().map(|s| *s.board()).collect(),
            current_step: state.current_step,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
