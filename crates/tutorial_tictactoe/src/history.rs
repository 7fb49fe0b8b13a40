//! Immutable board snapshots and the ordered history that holds them.

use super::position::Position;
use super::rules;
use super::types::{Board, Mark, Square};
use serde::{Deserialize, Serialize};

/// One immutable board configuration captured at a point in the game.
///
/// A snapshot has no mutating API. New snapshots are derived from old ones
/// with [`Snapshot::placing`], which leaves the original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Snapshot {
    board: Board,
}

impl Snapshot {
    /// The empty board every game starts from.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the board held by this snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.board.get(pos)
    }

    /// Returns the mark holding the first complete line, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::calculate_winner(&self.board)
    }

    pub(crate) fn placing(&self, pos: Position, mark: Mark) -> Self {
        Self {
            board: self.board.with(pos, mark),
        }
    }
}

impl From<Board> for Snapshot {
    fn from(board: Board) -> Self {
        Self { board }
    }
}

/// Ordered sequence of snapshots. Index 0 is always the empty board.
///
/// Built from [`History::new`] and grown by branching, so it is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    snapshots: Vec<Snapshot>,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::empty()],
        }
    }

    /// Number of snapshots (never zero).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; a history contains at least the starting board.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns the snapshot at `step`.
    pub fn get(&self, step: usize) -> Option<&Snapshot> {
        self.snapshots.get(step)
    }

    /// Iterates over snapshots from game start.
    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    /// Returns all snapshots as a slice.
    pub fn as_slice(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Keeps `snapshots[0..=step]` and appends `next`.
    pub(crate) fn branch(&self, step: usize, next: Snapshot) -> Self {
        let mut snapshots = Vec::with_capacity(step + 2);
        snapshots.extend_from_slice(&self.snapshots[..=step]);
        snapshots.push(next);
        Self { snapshots }
    }

    /// Wraps a raw snapshot sequence without checking it.
    pub(crate) fn from_snapshots_unchecked(snapshots: Vec<Snapshot>) -> Self {
        Self { snapshots }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
