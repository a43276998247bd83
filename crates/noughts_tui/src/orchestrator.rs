//! Game orchestration between the human and the computer.
//!
//! The orchestrator owns the only mutable board. Each turn it asks the side
//! to move for a square, applies it through the engine, and classifies the
//! result before handing the turn over.

use crate::players::Player;
use anyhow::Result;
use noughts::{
    Board, GameOutcome, Move, MoveError, Player as Mark, Position, new_game, outcome_after,
};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A fresh board is in play.
    GameStarted {
        /// Side that opens.
        first: Mark,
    },
    /// Waiting for the human to pick a square.
    AwaitingHuman,
    /// The computer is pausing before its move.
    ComputerThinking,
    /// A move landed.
    MoveMade {
        /// The move applied.
        mv: Move,
        /// Board after the move.
        board: Board,
    },
    /// The human picked a square that cannot take a mark.
    MoveRejected {
        /// The square picked.
        position: Position,
        /// Why it was refused.
        reason: String,
    },
    /// Game ended.
    GameOver {
        /// Final classification.
        outcome: GameOutcome,
    },
}

/// Orchestrates gameplay between the two sides.
pub struct Orchestrator {
    board: Board,
    first: Mark,
    human: Box<dyn Player>,
    computer: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
    restart_rx: mpsc::UnboundedReceiver<()>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    ///
    /// After each game it waits on `restart_rx`; closing that channel ends
    /// [`Orchestrator::run`].
    pub fn new(
        human: Box<dyn Player>,
        computer: Box<dyn Player>,
        first: Mark,
        event_tx: mpsc::UnboundedSender<GameEvent>,
        restart_rx: mpsc::UnboundedReceiver<()>,
    ) -> Self {
        Self {
            board: new_game(),
            first,
            human,
            computer,
            event_tx,
            restart_rx,
        }
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays games until the restart channel closes.
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting game orchestration");

        loop {
            let outcome = self.play_game().await?;
            debug!(%outcome, "Waiting for restart");

            if self.restart_rx.recv().await.is_none() {
                info!("Restart channel closed, stopping");
                return Ok(());
            }
            // Collapse repeated requests into one new game.
            while self.restart_rx.try_recv().is_ok() {}
            self.restart();
        }
    }

    /// Plays the current board to a terminal outcome.
    #[instrument(skip(self), fields(first = %self.first))]
    pub async fn play_game(&mut self) -> Result<GameOutcome> {
        self.event_tx.send(GameEvent::GameStarted { first: self.first })?;
        let mut to_move = self.first;

        loop {
            let player = match to_move {
                Mark::Human => {
                    self.event_tx.send(GameEvent::AwaitingHuman)?;
                    &mut self.human
                }
                Mark::Computer => {
                    self.event_tx.send(GameEvent::ComputerThinking)?;
                    &mut self.computer
                }
            };

            debug!(player = %player.name(), "Waiting for move");
            let position = player.get_move(&self.board).await?;
            let mv = Move::new(to_move, position);

            self.board = match self.board.apply(mv) {
                Ok(board) => board,
                Err(err @ MoveError::InvalidMove { .. }) if to_move == Mark::Human => {
                    warn!(%position, "Human picked an occupied square");
                    self.event_tx.send(GameEvent::MoveRejected {
                        position,
                        reason: err.to_string(),
                    })?;
                    continue;
                }
                Err(err) => return Err(err.into()),
            };

            self.event_tx.send(GameEvent::MoveMade {
                mv,
                board: self.board,
            })?;

            let outcome = outcome_after(&self.board, to_move);
            if outcome.is_terminal() {
                info!(%outcome, moves = self.board.move_count(), "Game over");
                self.event_tx.send(GameEvent::GameOver { outcome })?;
                return Ok(outcome);
            }

            to_move = to_move.opponent();
        }
    }

    /// Discards the board and starts from empty.
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.board = new_game();
    }
}
