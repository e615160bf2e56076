//! Non-interactive replay of an action script.

use anyhow::{Context, Result};
use std::io::Write;
use tictactoe_core::{Action, GameState, GameView};
use tracing::{info, instrument};

/// Applies `actions` to a fresh game and returns the final view.
#[instrument(skip(actions), fields(count = actions.len()))]
pub fn replay(actions: &[Action]) -> GameView {
    let state = GameState::replay(actions);
    info!(step = state.step(), history_len = state.history().len(), "Replay finished");
    GameView::from(&state)
}

/// Renders a view as plain text: board, status, then the move list with
/// the displayed entry marked.
///
/// Empty cells show the index `place <cell>` takes when `show_cell_numbers`
/// is set.
pub fn render_text(view: &GameView, show_cell_numbers: bool) -> String {
    let mut out = view.board.display(show_cell_numbers);
    out.push_str("\n\n");
    out.push_str(&view.status);
    out.push('\n');
    for (i, label) in view.moves.iter().enumerate() {
        let marker = if i == view.step { '>' } else { ' ' };
        out.push_str(&format!("{} {}. {}\n", marker, i + 1, label));
    }
    out
}

/// Runs the `replay` command, writing to `out`.
pub fn run_replay(
    actions: &[Action],
    json: bool,
    show_cell_numbers: bool,
    mut out: impl Write,
) -> Result<()> {
    let view = replay(actions);
    if json {
        let text = serde_json::to_string_pretty(&view).context("Failed to serialize view")?;
        writeln!(out, "{}", text)?;
    } else {
        write!(out, "{}", render_text(&view, show_cell_numbers))?;
    }
    Ok(())
}
