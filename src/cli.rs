//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_core::Action;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timetravel")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply a script of actions and print the resulting view
    Replay {
        /// Actions such as "place 4", "place center" or "jump 2"
        #[arg(required = true)]
        actions: Vec<Action>,

        /// Print the final view as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// The command to run, `play` when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_plays() {
        let cli = Cli::try_parse_from(["tictactoe_timetravel"]).unwrap();
        assert_eq!(cli.command(), Command::Play);
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
    }

    #[test]
    fn test_replay_parses_actions() {
        let cli = Cli::try_parse_from([
            "tictactoe_timetravel",
            "replay",
            "place 4",
            "jump 0",
            "--json",
        ])
        .unwrap();
        assert_eq!(
            cli.command(),
            Command::Replay {
                actions: vec![Action::PlaceMark { cell: 4 }, Action::JumpTo { step: 0 }],
                json: true,
            }
        );
    }

    #[test]
    fn test_replay_rejects_bad_action() {
        assert!(Cli::try_parse_from(["tictactoe_timetravel", "replay", "undo"]).is_err());
    }
}
