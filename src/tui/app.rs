//! Application state and logic.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tictactoe_core::{Action, GameState, GameView, Position, apply, status_text};
use tracing::{debug, info, instrument};

use super::input::{digit_position, move_cursor};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    History,
}

/// Main application state.
///
/// Holds the only [`GameState`]; every change goes through [`App::dispatch`].
/// Cursor, focus and list selection are presentation state and never reach
/// the game logic.
pub struct App {
    state: GameState,
    cursor: Position,
    focus: Focus,
    selected: usize,
    show_cell_numbers: bool,
}

impl App {
    /// Creates a new application at the start of a game.
    pub fn new(show_cell_numbers: bool) -> Self {
        Self {
            state: GameState::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            show_cell_numbers,
        }
    }

    /// Gets the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Derives the view from the current state.
    pub fn view(&self) -> GameView {
        GameView::from(&self.state)
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted entry in the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether empty cells show their key number.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// Applies an action, replacing the game state.
    #[instrument(skip(self), fields(step = self.state.step()))]
    pub fn dispatch(&mut self, action: Action) {
        let next = apply(&self.state, action);
        if next == self.state {
            debug!(%action, "Action had no effect");
            return;
        }

        self.state = next;
        self.selected = self.state.step();
        info!(%action, status = %status_text(&self.state), "State updated");
    }

    /// Handles a key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => {
                info!("Exit requested");
                return true;
            }
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                info!("Exit requested");
                return true;
            }
            (KeyCode::Tab, _) | (KeyCode::BackTab, _) => self.toggle_focus(),
            (KeyCode::Char('r'), _) => self.dispatch(Action::jump(0)),
            (KeyCode::Char(c), _) if digit_position(c).is_some() => {
                if let Some(pos) = digit_position(c) {
                    self.cursor = pos;
                    self.dispatch(Action::place(pos));
                }
            }
            (code, _) => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::History => self.handle_history_key(code),
            },
        }
        false
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.dispatch(Action::place(self.cursor)),
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        let last = self.state.step();
        match code {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(last),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = last,
            KeyCode::Enter | KeyCode::Char(' ') => self.dispatch(Action::jump(self.selected)),
            _ => {}
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        };
        self.selected = self.state.step();
        debug!(focus = ?self.focus, "Focus changed");
    }
}
