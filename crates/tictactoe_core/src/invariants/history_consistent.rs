//! History consistency invariant: one new mark per entry, alternating.

use super::Invariant;
use crate::{GameState, Mark, Square};

/// Invariant: entry N holds exactly N marks, and entry N adds one mark to
/// entry N-1, X on odd entries and O on even ones.
pub struct HistoryConsistent;

impl Invariant<GameState> for HistoryConsistent {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        if history.first().is_none_or(|entry| entry.board().occupied() != 0) {
            return false;
        }

        history.windows(2).enumerate().all(|(i, pair)| {
            let expected = if i % 2 == 0 { Mark::X } else { Mark::O };
            let added: Vec<Square> = pair[0]
                .board()
                .squares()
                .iter()
                .zip(pair[1].board().squares())
                .filter(|(before, after)| before != after)
                .map(|(_, after)| *after)
                .collect();
            added == [Square::Occupied(expected)]
        })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark, alternating X and O"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, Board, HistoryEntry};

    #[test]
    fn test_empty_game_holds() {
        assert!(HistoryConsistent::holds(&GameState::new()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let actions = [0, 4, 2, 6].map(|cell| Action::PlaceMark { cell });
        let state = GameState::replay(&actions);
        assert!(HistoryConsistent::holds(&state));
        assert_eq!(state.history().len(), 5);
    }

    #[test]
    fn test_holds_after_rewind_and_new_branch() {
        let actions = [
            Action::PlaceMark { cell: 0 },
            Action::PlaceMark { cell: 4 },
            Action::PlaceMark { cell: 8 },
            Action::JumpTo { step: 1 },
            Action::PlaceMark { cell: 5 },
        ];
        assert!(HistoryConsistent::holds(&GameState::replay(&actions)));
    }

    #[test]
    fn test_wrong_turn_order_violates() {
        let state: GameState = state_from_boards(&[
            [None; 9],
            [Some(Mark::O), None, None, None, None, None, None, None, None],
        ]);
        assert!(!HistoryConsistent::holds(&state));
    }

    /// Builds a state around hand-written boards, bypassing `apply`.
    fn state_from_boards(boards: &[[Option<Mark>; 9]]) -> GameState {
        let history: Vec<_> = boards
            .iter()
            .map(|squares| {
                HistoryEntry::new(Board::from_squares(squares.map(|sq| match sq {
                    Some(mark) => Square::Occupied(mark),
                    None => Square::Empty,
                })))
            })
            .collect();
        GameState::from_parts_unchecked(history, boards.len() - 1)
    }
}
