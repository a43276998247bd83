//! Draw detection logic for tic-tac-toe.

use super::win::has_won;
use crate::board::Board;
use crate::types::Player;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board on which neither player holds a line.
///
/// The winner check comes first, so a board completed by a winning move is
/// never reported as a draw.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    !has_won(board, Player::Human) && !has_won(board, Player::Computer) && is_full(board)
}
