//! Synchronous entry points for an orchestrating shell.
//!
//! A shell drives one turn as: [`apply_move`] for the human, [`outcome`],
//! then, while ongoing, [`select_move`] and [`apply_move`] for the computer
//! followed by another [`outcome`]. [`new_game`] resets.

use crate::action::Move;
use crate::ai;
use crate::board::Board;
use crate::error::{MoveError, Result};
use crate::rules::{self, GameOutcome};
use crate::types::{Player, Position};
use rand::Rng;
use tracing::{info, instrument};

/// Returns an empty board.
#[instrument]
pub fn new_game() -> Board {
    info!("Starting new game");
    Board::new()
}

/// Places `player`'s mark at `index`, returning the resulting board.
///
/// # Errors
///
/// - [`MoveError::OutOfBounds`] if `index` is not in 0-8.
/// - [`MoveError::InvalidMove`] if the square is taken. `board` is unchanged.
#[instrument(skip(board))]
pub fn apply_move(board: &Board, player: Player, index: usize) -> Result<Board> {
    let position = Position::from_index(index).ok_or(MoveError::OutOfBounds { index })?;
    board.apply(Move::new(player, position))
}

/// Classifies the board.
pub fn outcome(board: &Board) -> GameOutcome {
    rules::outcome(board)
}

/// Picks the computer's next square using the supplied random source.
///
/// # Errors
///
/// Returns [`MoveError::NoAvailableMove`] if the board is full.
pub fn select_move<R: Rng>(board: &Board, rng: &mut R) -> Result<Position> {
    ai::select_move(board, rng)
}
