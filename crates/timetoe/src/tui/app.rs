//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use timetoe_rules::{GameState, Position};
use tracing::{debug, info, instrument};

use super::input::{digit_to_position, move_cursor, move_selection};
use crate::view::{HistoryEntry, MoveOrder, history_entries};

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
/// Owns the single [`GameState`] of the session and replaces it wholesale
/// on every accepted move or jump.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    order: MoveOrder,
    /// History step under the move-list selection.
    selected: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application with an empty game.
    pub fn new(order: MoveOrder) -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            order,
            selected: 0,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Move list order.
    pub fn order(&self) -> MoveOrder {
        self.order
    }

    /// History step under the move-list selection.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The move list as displayed.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        history_entries(&self.game, self.order)
    }

    /// Plays the current player's mark at `position`.
    ///
    /// Occupied squares and moves after a win are ignored.
    #[instrument(skip(self))]
    pub fn play(&mut self, position: Position) {
        match self.game.apply_move(position) {
            Ok(next) => {
                self.game = next;
                self.selected = self.game.step();
            }
            Err(reason) => debug!(%reason, "Move ignored"),
        }
    }

    /// Shows the board as it was after `step` moves.
    #[instrument(skip(self))]
    pub fn jump(&mut self, step: usize) {
        match self.game.jump_to(step) {
            Ok(next) => {
                self.game = next;
                self.selected = step;
            }
            Err(reason) => debug!(%reason, "Jump ignored"),
        }
    }

    /// Flips the move list between ascending and descending.
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggle();
        debug!(order = ?self.order, "Move order toggled");
    }

    /// Starts a new game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.game = GameState::new();
        self.selected = 0;
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        // crossterm reports both press and release on some platforms.
        if key.kind == KeyEventKind::Release {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::BackTab => self.switch_focus(),
            KeyCode::Char('o') | KeyCode::Char('O') => self.toggle_order(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(position) = digit_to_position(c) {
                    self.cursor = position;
                    self.play(position);
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::History => self.handle_history_key(code),
            },
        }
    }

    fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Board => {
                self.selected = self.game.step();
                Focus::History
            }
            Focus::History => Focus::Board,
        };
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            _ => self.cursor = move_cursor(self.cursor, code),
        }
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        let entries = self.entries();
        let row = entries
            .iter()
            .position(|e| e.step == self.selected)
            .unwrap_or(0);

        match code {
            KeyCode::Enter | KeyCode::Char(' ') => self.jump(self.selected),
            _ => {
                let row = move_selection(row, entries.len(), code);
                if let Some(entry) = entries.get(row) {
                    self.selected = entry.step;
                }
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(MoveOrder::default())
    }
}
