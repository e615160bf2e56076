//! Terminal tic-tac-toe with move history and time travel.
//!
//! The game logic lives in [`tictactoe_core`]; this crate is the front end.
//!
//! # Architecture
//!
//! - **TUI**: ratatui board, status line and move list
//! - **Replay**: run an action script without a terminal
//! - **Config**: optional TOML file for logging and display settings

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod replay;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError};
pub use replay::{render_text, replay, run_replay};
pub use tui::{App, run_tui};
