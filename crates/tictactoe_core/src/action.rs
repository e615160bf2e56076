//! First-class action types for the game.
//!
//! Actions are the only way a [`GameState`](crate::GameState) changes. They
//! carry the player's intent and nothing else; whether an action has any
//! effect is decided by [`apply`](crate::apply) against the prior state.

use crate::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A user interaction, as seen by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Place the current player's mark at a cell index (0-8).
    PlaceMark {
        /// Row-major cell index.
        cell: usize,
    },
    /// Rewind to a history entry, discarding everything after it.
    JumpTo {
        /// Index into the move history.
        step: usize,
    },
}

impl Action {
    /// Places a mark at a named position.
    pub fn place(pos: Position) -> Self {
        Action::PlaceMark {
            cell: pos.to_index(),
        }
    }

    /// Jumps to a history step.
    pub fn jump(step: usize) -> Self {
        Action::JumpTo { step }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::PlaceMark { cell } => write!(f, "place {}", cell),
            Action::JumpTo { step } => write!(f, "jump {}", step),
        }
    }
}

/// Error produced when text does not describe an action.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ActionParseError {
    /// Nothing but whitespace.
    #[display("Empty action")]
    Empty,

    /// The verb is neither `place` nor `jump`.
    #[display("Unknown action {:?} (expected \"place\" or \"jump\")", _0)]
    UnknownVerb(#[error(not(source))] String),

    /// The verb was given without an argument.
    #[display("Action {:?} needs an argument", _0)]
    MissingArgument(#[error(not(source))] String),

    /// The cell is not an index 0-8 or a position label.
    #[display("Invalid cell {:?}", _0)]
    InvalidCell(#[error(not(source))] String),

    /// The step is not a non-negative integer.
    #[display("Invalid step {:?}", _0)]
    InvalidStep(#[error(not(source))] String),
}

impl FromStr for Action {
    type Err = ActionParseError;

    /// Parses `place <cell>` or `jump <step>`.
    ///
    /// `<cell>` is an index (0-8) or a position label such as `center`.
    /// Labels made of several words may use spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (verb, arg) = match s.split_once(char::is_whitespace) {
            Some((verb, arg)) => (verb, arg.trim()),
            None => (s, ""),
        };

        if verb.is_empty() {
            return Err(ActionParseError::Empty);
        }

        let verb = verb.to_lowercase();
        if verb != "place" && verb != "jump" {
            return Err(ActionParseError::UnknownVerb(verb));
        }
        if arg.is_empty() {
            return Err(ActionParseError::MissingArgument(verb));
        }

        if verb == "place" {
            Position::from_label_or_number(arg)
                .map(Action::place)
                .ok_or_else(|| ActionParseError::InvalidCell(arg.to_string()))
        } else {
            arg.parse::<usize>()
                .map(Action::jump)
                .map_err(|_| ActionParseError::InvalidStep(arg.to_string()))
        }
    }
}
