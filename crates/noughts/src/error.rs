//! Engine error types.

use crate::types::Position;
use derive_more::{Display, Error};

/// Error raised when a caller breaks a move precondition.
///
/// Every variant signals a bug in the caller's turn sequencing rather than
/// a transient failure; none of them are retried by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The target square already holds a mark.
    #[display("Square {position} is already occupied")]
    InvalidMove {
        /// The occupied square.
        position: Position,
    },

    /// The index does not name a square (valid range is 0-8).
    #[display("Position {index} is out of bounds (must be 0-8)")]
    OutOfBounds {
        /// The rejected index.
        index: usize,
    },

    /// The computer was asked to move on a full board.
    #[display("No available move: the board is full")]
    NoAvailableMove,
}

/// Convenience result type for engine operations.
pub type Result<T> = std::result::Result<T, MoveError>;
