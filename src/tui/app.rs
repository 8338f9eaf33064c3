//! Application state and key handling.

use super::input::{digit_position, move_cursor};
use crossterm::event::KeyCode;
use tictactoe_timeline::{GameState, Position, Settings, Snapshot};
use tracing::{debug, info, warn};

/// Which panel receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    Board,
    /// Arrow keys move the history selection.
    History,
}

/// Main application state.
pub struct App {
    state: GameState,
    settings: Settings,
    cursor: Position,
    focus: Focus,
    selected: usize,
    running: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(settings: Settings) -> Self {
        Self {
            state: GameState::new(),
            settings,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            running: true,
        }
    }

    /// Gets the current game.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row of the history list, in display order.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// False once the user asked to quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render-ready view of the game.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(&self.state, &self.settings)
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.running = false;
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
                self.sync_selection();
            }
            KeyCode::Char('s') => {
                let order = self.settings.history_order().toggled();
                debug!(%order, "Toggling history order");
                self.settings = self.settings.clone().with_history_order(order);
                self.sync_selection();
            }
            KeyCode::Char('r') => self.restart(),
            _ => {
                if let Some(pos) = digit_position(key) {
                    self.cursor = pos;
                    self.place(pos);
                    return;
                }
                match self.focus {
                    Focus::Board => self.handle_board_key(key),
                    Focus::History => self.handle_history_key(key),
                }
            }
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            _ => self.cursor = move_cursor(self.cursor, key),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        let rows = self.state.history().len();
        match key {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(rows - 1),
            KeyCode::Enter | KeyCode::Char(' ') => self.jump_selected(),
            _ => {}
        }
    }

    /// Places the current player's mark; refused moves change nothing.
    fn place(&mut self, pos: Position) {
        match self.state.try_apply_move(pos.to_index()) {
            Ok(next) => {
                debug!(position = %pos, step = next.step(), "Move applied to UI state");
                self.state = next;
                self.sync_selection();
            }
            Err(e) => debug!(position = %pos, error = %e, "Move ignored"),
        }
    }

    fn jump_selected(&mut self) {
        let snapshot = self.snapshot();
        let Some(entry) = snapshot.history.get(self.selected) else {
            return;
        };
        match self.state.jump_to_step(entry.step) {
            Ok(next) => {
                debug!(step = entry.step, "Jumped in history");
                self.state = next;
            }
            Err(e) => warn!(error = %e, "History selection out of range"),
        }
        self.sync_selection();
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.state = GameState::new();
        self.cursor = Position::Center;
        self.sync_selection();
    }

    fn sync_selection(&mut self) {
        self.selected = self.snapshot().current_row();
    }
}
