//! Game state machine with move history and time travel.
//!
//! A [`GameState`] is never mutated after construction. Every action goes
//! through [`apply`], which reads the complete prior state and returns the
//! next one. Invalid actions are not errors: they return the prior state
//! unchanged.

use crate::invariants::{self, InvariantViolation};
use crate::rules::{self, GameStatus};
use crate::{Action, Board, HistoryEntry, Mark, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete game state: every board so far plus which one is displayed.
///
/// Deserialization checks every invariant, so a `GameState` read from JSON
/// is as valid as one built through [`apply`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    /// Boards in move order; entry 0 is the empty starting board.
    history: Vec<HistoryEntry>,
    /// Index of the displayed entry.
    step: usize,
}

/// Error produced when a serialized game state breaks an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid game state: {}", _0)]
pub struct InvalidGameState(#[error(not(source))] String);

impl From<Vec<InvariantViolation>> for InvalidGameState {
    fn from(violations: Vec<InvariantViolation>) -> Self {
        let descriptions: Vec<&str> = violations
            .iter()
            .map(|violation| violation.description.as_str())
            .collect();
        Self(descriptions.join("; "))
    }
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    history: Vec<HistoryEntry>,
    step: usize,
}

impl TryFrom<RawGameState> for GameState {
    type Error = InvalidGameState;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = Self {
            history: raw.history,
            step: raw.step,
        };
        state.check_invariants()?;
        Ok(state)
    }
}

impl GameState {
    /// Creates a game with a single empty board at step 0.
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::default()],
            step: 0,
        }
    }

    /// Replays a sequence of actions from a fresh game.
    #[instrument(skip(actions))]
    pub fn replay<'a>(actions: impl IntoIterator<Item = &'a Action>) -> Self {
        actions
            .into_iter()
            .fold(Self::new(), |state, action| apply(&state, *action))
    }

    /// All history entries, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// The step pointer.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The displayed history entry.
    pub fn current(&self) -> &HistoryEntry {
        &self.history[self.step]
    }

    /// The displayed board.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Turn flag: X moves next on even steps.
    pub fn x_is_next(&self) -> bool {
        self.step % 2 == 0
    }

    /// The mark that would be placed by the next move.
    pub fn next_mark(&self) -> Mark {
        if self.x_is_next() { Mark::X } else { Mark::O }
    }

    /// Winner on the displayed board, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::winner(self.board())
    }

    /// Status of the displayed board.
    pub fn status(&self) -> GameStatus {
        rules::status(self.board())
    }

    /// Applies an action, returning the next state.
    pub fn apply(&self, action: Action) -> Self {
        apply(self, action)
    }

    /// Checks every state invariant.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        invariants::check_all(self)
    }

    /// Builds a state without checking invariants.
    #[cfg(test)]
    pub(crate) fn from_parts_unchecked(history: Vec<HistoryEntry>, step: usize) -> Self {
        Self { history, step }
    }

    #[instrument(skip(self), fields(step = self.step, history_len = self.history.len()))]
    fn place_mark(&self, cell: usize) -> Self {
        let Some(pos) = Position::from_index(cell) else {
            debug!("Ignoring placement: cell out of range");
            return self.clone();
        };

        let current = self.board();
        if let Some(winner) = rules::winner(current) {
            debug!(%winner, "Ignoring placement: game already won");
            return self.clone();
        }
        if !current.is_empty(pos) {
            debug!(position = %pos, "Ignoring placement: square occupied");
            return self.clone();
        }

        let mark = self.next_mark();
        let mut history = self.history[..=self.step].to_vec();
        history.push(HistoryEntry::new(current.with_mark(pos, mark)));
        let step = history.len() - 1;

        debug!(%mark, position = %pos, step, "Mark placed");
        Self { history, step }
    }

    #[instrument(skip(self), fields(history_len = self.history.len()))]
    fn jump_to(&self, step: usize) -> Self {
        if step >= self.history.len() {
            debug!("Ignoring jump: step out of range");
            return self.clone();
        }

        debug!(discarded = self.history.len() - step - 1, "Jumped to step");
        Self {
            history: self.history[..=step].to_vec(),
            step,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// The transition function: prior state plus action gives the next state.
///
/// Placement truncates history at the prior state's step pointer, so the
/// whole prior state is required, not just the action.
pub fn apply(state: &GameState, action: Action) -> GameState {
    let next = match action {
        Action::PlaceMark { cell } => state.place_mark(cell),
        Action::JumpTo { step } => state.jump_to(step),
    };
    debug_assert!(
        next.check_invariants().is_ok(),
        "invariants violated after {action}: {:?}",
        next.check_invariants()
    );
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn play(cells: &[usize]) -> GameState {
        let actions: Vec<Action> = cells.iter().map(|&cell| Action::PlaceMark { cell }).collect();
        GameState::replay(&actions)
    }

    #[test]
    fn test_new_game() {
        let state = GameState::new();
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.step(), 0);
        assert!(state.x_is_next());
        assert_eq!(state.board(), &Board::new());
        assert_eq!(state.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_place_appends_and_flips_turn() {
        let state = GameState::new().apply(Action::place(Position::Center));
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.step(), 1);
        assert!(!state.x_is_next());
        assert_eq!(state.board().get(Position::Center), Square::Occupied(Mark::X));
        // Entry 0 is untouched.
        assert_eq!(state.history()[0].board(), &Board::new());
    }

    #[test]
    fn test_occupied_cell_is_noop() {
        let state = play(&[4]);
        let again = state.apply(Action::PlaceMark { cell: 4 });
        assert_eq!(again, state);
    }

    #[test]
    fn test_out_of_range_cell_is_noop() {
        let state = play(&[0, 1]);
        assert_eq!(state.apply(Action::PlaceMark { cell: 9 }), state);
    }

    #[test]
    fn test_out_of_range_jump_is_noop() {
        let state = play(&[0, 1]);
        assert_eq!(state.apply(Action::JumpTo { step: 3 }), state);
    }

    #[test]
    fn test_jump_truncates_and_sets_turn() {
        let state = play(&[0, 4, 8]);
        let rewound = state.apply(Action::jump(1));
        assert_eq!(rewound.step(), 1);
        assert_eq!(rewound.history().len(), 2);
        assert!(!rewound.x_is_next());
        assert_eq!(rewound.board(), state.history()[1].board());
    }

    #[test]
    fn test_move_after_rewind_discards_future() {
        let state = play(&[0, 4, 8]).apply(Action::jump(1)).apply(Action::PlaceMark { cell: 2 });
        assert_eq!(state.history().len(), 3);
        assert_eq!(state.step(), 2);
        assert_eq!(state.board().get(Position::TopRight), Square::Occupied(Mark::X));
        assert!(state.board().is_empty(Position::BottomRight));
    }

    #[test]
    fn test_deserialize_rejects_step_past_history() {
        let json = serde_json::json!({
            "history": [HistoryEntry::default()],
            "step": 5,
        });
        let err = serde_json::from_value::<GameState>(json).unwrap_err();
        assert!(err.to_string().contains("Step pointer"), "{err}");
    }

    #[test]
    fn test_deserialize_rejects_empty_history() {
        let json = serde_json::json!({ "history": [], "step": 0 });
        assert!(serde_json::from_value::<GameState>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_inconsistent_history() {
        let json = serde_json::json!({
            "history": [
                HistoryEntry::default(),
                HistoryEntry::new(Board::new().with_mark(Position::Center, Mark::O)),
            ],
            "step": 1,
        });
        assert!(serde_json::from_value::<GameState>(json).is_err());
    }

    #[test]
    fn test_deserialize_accepts_played_game() {
        let state = play(&[0, 4, 8]);
        let json = serde_json::to_value(&state).unwrap();
        let back: GameState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
        assert_eq!(back.apply(Action::PlaceMark { cell: 1 }).step(), 4);
    }

    #[test]
    fn test_invalid_state_error_lists_violations() {
        let err = InvalidGameState::from(vec![
            InvariantViolation::new("first"),
            InvariantViolation::new("second"),
        ]);
        assert_eq!(err.to_string(), "Invalid game state: first; second");
    }

    #[test]
    fn test_win_blocks_further_moves() {
        let state = play(&[0, 3, 1, 4, 2]);
        assert_eq!(state.winner(), Some(Mark::X));
        for cell in 0..9 {
            assert_eq!(state.apply(Action::PlaceMark { cell }), state);
        }
    }
}
