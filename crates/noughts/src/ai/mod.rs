//! Computer move selection.
//!
//! A greedy, non-lookahead policy evaluated in strict priority order:
//!
//! 1. complete one of the computer's own lines,
//! 2. block a line the human is one square from completing,
//! 3. take the center,
//! 4. take a uniformly random empty square.
//!
//! The first rule that applies wins. The policy never builds forks and does
//! not see double threats.

mod agent;

pub use agent::HeuristicAi;

use crate::board::Board;
use crate::error::{MoveError, Result};
use crate::positions::PositionSet;
use crate::rules::WIN_PATTERNS;
use crate::types::{Player, Position};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which priority rule produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum MoveReason {
    /// Completes a computer line.
    Win,
    /// Denies the human a line.
    Block,
    /// Takes the free center square.
    Center,
    /// Uniform pick among empty squares.
    Random,
}

/// A chosen square together with the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Decision {
    position: Position,
    reason: MoveReason,
}

impl Decision {
    /// The chosen square.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The rule that fired.
    pub fn reason(&self) -> MoveReason {
        self.reason
    }
}

/// Finds a free square that would complete a line for the owner of `own`.
///
/// Patterns are scanned in [`WIN_PATTERNS`] order; the first pattern missing
/// exactly one square, with that square free on `board`, decides.
#[instrument(skip(board))]
pub fn completable_cell(board: &Board, own: PositionSet) -> Option<Position> {
    WIN_PATTERNS
        .iter()
        .filter_map(|pattern| pattern.difference(own).single())
        .find(|&pos| !board.is_occupied(pos))
}

/// Picks the computer's next square and reports which rule picked it.
///
/// # Errors
///
/// Returns [`MoveError::NoAvailableMove`] if the board is full.
#[instrument(skip(board, rng))]
pub fn decide<R: Rng>(board: &Board, rng: &mut R) -> Result<Decision> {
    let empty = board.empty_positions();
    if empty.is_empty() {
        return Err(MoveError::NoAvailableMove);
    }

    let (position, reason) =
        if let Some(pos) = completable_cell(board, board.positions_of(Player::Computer)) {
            (pos, MoveReason::Win)
        } else if let Some(pos) = completable_cell(board, board.positions_of(Player::Human)) {
            (pos, MoveReason::Block)
        } else if empty.contains(Position::Center) {
            (Position::Center, MoveReason::Center)
        } else {
            let pick = rng.random_range(0..empty.len());
            let pos = empty.nth(pick).ok_or(MoveError::NoAvailableMove)?;
            (pos, MoveReason::Random)
        };

    debug!(%position, %reason, "Computer chose square");
    Ok(Decision { position, reason })
}

/// Picks the computer's next square.
///
/// # Errors
///
/// Returns [`MoveError::NoAvailableMove`] if the board is full.
pub fn select_move<R: Rng>(board: &Board, rng: &mut R) -> Result<Position> {
    decide(board, rng).map(|decision| decision.position())
}
