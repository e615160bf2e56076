//! Step pointer invariant: the displayed entry is the newest one.

use super::Invariant;
use crate::GameState;

/// Invariant: the step pointer indexes the last history entry.
///
/// Both transitions truncate history at the step they leave behind, so the
/// displayed entry is always the newest one. This implies the step is a
/// valid index and that history is never empty.
pub struct StepAtHead;

impl Invariant<GameState> for StepAtHead {
    fn holds(state: &GameState) -> bool {
        state.step() + 1 == state.history().len()
    }

    fn description() -> &'static str {
        "Step pointer indexes the last history entry"
    }
}
