//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::{GameState, Square};

/// Invariant: between consecutive history entries no square is cleared or
/// overwritten.
pub struct MonotonicBoards;

impl Invariant<GameState> for MonotonicBoards {
    fn holds(state: &GameState) -> bool {
        state.history().windows(2).all(|pair| {
            pair[0]
                .board()
                .squares()
                .iter()
                .zip(pair[1].board().squares())
                .all(|(before, after)| *before == Square::Empty || before == after)
        })
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never cleared or overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, Board, HistoryEntry, Mark, Position};

    #[test]
    fn test_holds_for_played_game() {
        let actions = [0, 3, 1, 4, 2].map(|cell| Action::PlaceMark { cell });
        assert!(MonotonicBoards::holds(&GameState::replay(&actions)));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let first = Board::new().with_mark(Position::Center, Mark::X);
        let second = Board::new().with_mark(Position::Center, Mark::O);
        let state = GameState::from_parts_unchecked(
            vec![
                HistoryEntry::default(),
                HistoryEntry::new(first),
                HistoryEntry::new(second),
            ],
            2,
        );
        assert!(!MonotonicBoards::holds(&state));
    }
}
