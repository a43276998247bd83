//! Application state and logic.

use crate::alerts::OutcomeAlert;
use crate::input::move_cursor;
use crate::orchestrator::GameEvent;
use crossterm::event::KeyCode;
use noughts::{Board, GameOutcome, Player as Mark, Position};
use tracing::debug;

/// What the UI loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Nothing to forward.
    None,
    /// Send this square to the human player.
    Place(Position),
    /// Dismiss the alert and start a new game.
    Restart,
    /// Leave the program.
    Quit,
}

/// Main application state.
pub struct App {
    board: Board,
    cursor: Position,
    status_message: String,
    board_enabled: bool,
    outcome: GameOutcome,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            cursor: Position::Center,
            status_message: "Waiting for game to start...".to_string(),
            board_enabled: false,
            outcome: GameOutcome::Ongoing,
        }
    }

    /// Board as last reported by the orchestrator.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether square selections are accepted right now.
    pub fn board_enabled(&self) -> bool {
        self.board_enabled
    }

    /// Alert to show, once the game has ended.
    pub fn alert(&self) -> Option<OutcomeAlert> {
        OutcomeAlert::for_outcome(self.outcome)
    }

    /// Handles a game event from the orchestrator.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::GameStarted { first } => {
                self.board = Board::new();
                self.outcome = GameOutcome::Ongoing;
                self.board_enabled = false;
                self.status_message = match first {
                    Mark::Human => "New game. You go first.".to_string(),
                    Mark::Computer => "New game. Computer goes first.".to_string(),
                };
            }
            GameEvent::AwaitingHuman => {
                self.board_enabled = true;
                self.status_message =
                    "Your turn: 1-9 or arrows + Enter to place X.".to_string();
            }
            GameEvent::ComputerThinking => {
                self.board_enabled = false;
                self.status_message = "Computer is thinking...".to_string();
            }
            GameEvent::MoveMade { mv, board } => {
                self.board = board;
                self.status_message = format!("{} played {}", mv.player(), mv.position().label());
            }
            GameEvent::MoveRejected { reason, .. } => {
                self.status_message = format!("{}. Try again.", reason);
            }
            GameEvent::GameOver { outcome } => {
                self.board_enabled = false;
                self.outcome = outcome;
                self.status_message = "Press Enter or 'r' for a new game, 'q' to quit.".to_string();
            }
        }
    }

    /// Maps a key press to an action, updating local state along the way.
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => AppAction::Quit,
            KeyCode::Char('r') | KeyCode::Enter if self.alert().is_some() => {
                // Dismiss now so a repeated key cannot request a second game.
                self.outcome = GameOutcome::Ongoing;
                self.board_enabled = false;
                self.status_message = "Starting a new game...".to_string();
                AppAction::Restart
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
                AppAction::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.select(self.cursor),
            KeyCode::Char(c) => match Position::from_key(c) {
                Some(position) => {
                    self.cursor = position;
                    self.select(position)
                }
                None => AppAction::None,
            },
            _ => AppAction::None,
        }
    }

    fn select(&mut self, position: Position) -> AppAction {
        if !self.board_enabled {
            return AppAction::None;
        }
        if self.board.is_occupied(position) {
            self.status_message = format!("{} is taken. Try again.", position.label());
            return AppAction::None;
        }
        // One selection per turn; the next AwaitingHuman re-enables input.
        self.board_enabled = false;
        AppAction::Place(position)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
