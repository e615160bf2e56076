//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](crate::Board). Nothing here looks
//! at move history; the state machine composes these per history entry.

pub mod draw;
pub mod win;

pub use draw::{GameStatus, is_full, status};
pub use win::{LINES, winner};
