//! Tic-tac-toe game logic with move history and time travel.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over one [`Board`] (winner, full, status)
//! - **State**: [`GameState`] holds every board played so far plus a step
//!   pointer; [`apply`] is the only transition
//! - **Actions**: [`Action::PlaceMark`] and [`Action::JumpTo`]
//! - **View**: [`GameView`] derives status text and move labels for display
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Action, GameState, GameView, Mark, apply};
//!
//! let state = GameState::new();
//! let state = apply(&state, Action::PlaceMark { cell: 4 });
//! let state = apply(&state, Action::PlaceMark { cell: 4 }); // occupied: no-op
//! assert_eq!(state.step(), 1);
//!
//! let state = apply(&state, Action::JumpTo { step: 0 });
//! assert_eq!(state.next_mark(), Mark::X);
//! assert_eq!(GameView::from(&state).status, "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod invariants;
mod position;
pub mod rules;
mod state;
mod types;
mod view;

pub use action::{Action, ActionParseError};
pub use invariants::{Invariant, InvariantViolation};
pub use position::Position;
pub use rules::GameStatus;
pub use state::{GameState, InvalidGameState, apply};
pub use types::{Board, HistoryEntry, Mark, Square};
pub use view::{GameView, move_label, move_labels, status_text};
