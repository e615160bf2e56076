//! Draw detection and derived game status.

use super::win::winner;
use crate::{Board, Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status of a board, derived on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// A line was completed.
    Won(Mark),
    /// Board is full with no line.
    Draw,
}

impl GameStatus {
    /// True once no further placement is possible.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Checks if the board is full (all squares occupied).
#[instrument(level = "trace", skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Derives the status of a board.
pub fn status(board: &Board) -> GameStatus {
    match winner(board) {
        Some(mark) => GameStatus::Won(mark),
        None if is_full(board) => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}
