//! Tic-tac-toe with move history and time travel.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tictactoe_timetravel::{
    AppConfig, Cli, Command,
    logging::{init_file_logging, init_stderr_logging},
    run_replay, run_tui,
};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    match cli.command() {
        Command::Play => {
            init_file_logging(&config)?;
            info!(config = ?config, "Starting game");
            run_tui(&config)
        }
        Command::Replay { actions, json } => {
            init_stderr_logging(&config);
            info!(count = actions.len(), "Replaying actions");
            run_replay(
                &actions,
                json,
                *config.show_cell_numbers(),
                std::io::stdout().lock(),
            )
        }
    }
}
