//! The 3x3 board and the moves placed on it.

use crate::action::Move;
use crate::error::{MoveError, Result};
use crate::positions::PositionSet;
use crate::types::{Player, Position};
use serde::Serialize;
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// Slot `i` holds the move placed at position index `i`, so a position can
/// never carry more than one move. Boards only grow: [`Board::apply`] returns
/// a new board and leaves the receiver untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Board {
    /// Slots in row-major order (0-8).
    slots: [Option<Move>; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self { slots: [None; 9] }
    }

    /// Gets the move recorded at the given position.
    pub fn get(&self, pos: Position) -> Option<Move> {
        self.slots[pos.to_index()]
    }

    /// Returns true if a move is recorded at the position.
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.get(pos).is_some()
    }

    /// Returns a new board with `mv` recorded at its position.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidMove`] if the position is already occupied.
    #[instrument(skip(self), fields(player = %mv.player(), position = %mv.position()))]
    pub fn apply(&self, mv: Move) -> Result<Board> {
        let pos = mv.position();
        if self.is_occupied(pos) {
            debug!("Rejecting move onto occupied square");
            return Err(MoveError::InvalidMove { position: pos });
        }

        let mut next = *self;
        next.slots[pos.to_index()] = Some(mv);
        Ok(next)
    }

    /// All positions holding one of `player`'s moves.
    pub fn positions_of(&self, player: Player) -> PositionSet {
        self.moves()
            .filter(|mv| mv.player() == player)
            .map(|mv| mv.position())
            .collect()
    }

    /// All positions holding any move.
    pub fn occupied(&self) -> PositionSet {
        self.moves().map(|mv| mv.position()).collect()
    }

    /// All positions still free.
    pub fn empty_positions(&self) -> PositionSet {
        self.occupied().complement()
    }

    /// Returns true if all 9 positions are occupied.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Number of moves placed so far.
    pub fn move_count(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Iterates recorded moves in position order.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.slots.iter().flatten().copied()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based key number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.slots[pos] {
                    Some(mv) => result.push(mv.player().mark()),
                    None => result.push_str(&(pos + 1).to_string()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}
