//! Derived render state.
//!
//! Nothing here is stored. A front end builds a [`GameView`] from the
//! current [`GameState`] after every transition and draws it.

use crate::{Board, GameState};
use serde::{Deserialize, Serialize};

/// Everything a front end needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// The displayed board.
    pub board: Board,
    /// `Winner: <mark>` or `Next player: <mark>`.
    pub status: String,
    /// One selectable label per history entry.
    pub moves: Vec<String>,
    /// Index of the displayed entry within `moves`.
    pub step: usize,
}

impl From<&GameState> for GameView {
    fn from(state: &GameState) -> Self {
        Self {
            board: state.board().clone(),
            status: status_text(state),
            moves: move_labels(state),
            step: state.step(),
        }
    }
}

/// Status line for the displayed board.
pub fn status_text(state: &GameState) -> String {
    match state.winner() {
        Some(mark) => format!("Winner: {}", mark),
        None => format!("Next player: {}", state.next_mark()),
    }
}

/// Label for the history entry at `step`.
pub fn move_label(step: usize) -> String {
    if step == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", step)
    }
}

/// Labels for every history entry, in order.
pub fn move_labels(state: &GameState) -> Vec<String> {
    (0..state.history().len()).map(move_label).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Action;

    #[test]
    fn test_initial_view() {
        let view = GameView::from(&GameState::new());
        assert_eq!(view.status, "Next player: X");
        assert_eq!(view.moves, vec!["Go to game start"]);
        assert_eq!(view.step, 0);
    }

    #[test]
    fn test_labels_follow_history() {
        let state = GameState::replay(&[Action::PlaceMark { cell: 0 }, Action::PlaceMark { cell: 1 }]);
        assert_eq!(
            move_labels(&state),
            vec!["Go to game start", "Go to move #1", "Go to move #2"]
        );
        assert_eq!(status_text(&state), "Next player: X");
    }

    #[test]
    fn test_winner_status() {
        let actions = [0, 3, 1, 4, 2].map(|cell| Action::PlaceMark { cell });
        let state = GameState::replay(&actions);
        assert_eq!(status_text(&state), "Winner: X");
    }
}
