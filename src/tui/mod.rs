//! Terminal UI.
//!
//! The loop is single-threaded: read one terminal event, turn it into at
//! most one game action, apply it, redraw.

mod app;
mod input;
mod ui;

pub use app::{App, Focus};
pub use input::{digit_position, move_cursor};
pub use ui::draw;

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{error, info, instrument, warn};

use crate::config::AppConfig;

/// Set while raw mode is on; cleared by the first restore.
static TERMINAL_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Runs the interactive game until the user quits.
#[instrument(skip_all)]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    info!("Starting terminal UI");

    let guard = TerminalGuard::enter()?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(io::stdout())).context("Failed to create terminal")?;

    let app = App::new(*config.show_cell_numbers());
    let res = run_app(&mut terminal, app);
    let restored = guard.restore();

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal UI closed");
    res.and(restored)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| draw(f, &app)).context("Failed to draw frame")?;

        if let Event::Key(key) = event::read().context("Failed to read terminal event")?
            && app.handle_key(key)
        {
            return Ok(());
        }
    }
}

/// Raw mode plus alternate screen, restored on drop.
///
/// Dropping covers early returns and unwinding; [`TerminalGuard::restore`]
/// reports teardown errors on the normal path.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        install_panic_hook();
        enable_raw_mode().context("Failed to enable raw mode")?;
        TERMINAL_ACTIVE.store(true, Ordering::SeqCst);
        let guard = Self;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        Ok(guard)
    }

    fn restore(self) -> Result<()> {
        restore_terminal()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = restore_terminal() {
            warn!(error = ?err, "Failed to restore terminal");
        }
    }
}

/// Leaves raw mode and the alternate screen if a session is active.
///
/// Every step runs even when an earlier one fails; the first error wins.
fn restore_terminal() -> Result<()> {
    if !TERMINAL_ACTIVE.swap(false, Ordering::SeqCst) {
        return Ok(());
    }

    let raw = disable_raw_mode().context("Failed to disable raw mode");
    let mut stdout = io::stdout();
    let screen = execute!(stdout, LeaveAlternateScreen, Show)
        .context("Failed to leave alternate screen");
    raw.and(screen)
}

/// Restores the terminal before the panic message is printed.
fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restore_terminal();
            previous(info);
        }));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_without_session_is_noop() {
        assert!(!TERMINAL_ACTIVE.load(Ordering::SeqCst));
        assert!(restore_terminal().is_ok());
        assert!(!TERMINAL_ACTIVE.load(Ordering::SeqCst));
    }
}
