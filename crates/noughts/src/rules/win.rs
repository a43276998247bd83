//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::positions::PositionSet;
use crate::types::Player;
use crate::types::Position::*;
use tracing::instrument;

/// The eight winning lines.
pub const WIN_PATTERNS: [PositionSet; 8] = [
    // Rows
    PositionSet::triple(TopLeft, TopCenter, TopRight),
    PositionSet::triple(MiddleLeft, Center, MiddleRight),
    PositionSet::triple(BottomLeft, BottomCenter, BottomRight),
    // Columns
    PositionSet::triple(TopLeft, MiddleLeft, BottomLeft),
    PositionSet::triple(TopCenter, Center, BottomCenter),
    PositionSet::triple(TopRight, MiddleRight, BottomRight),
    // Diagonals
    PositionSet::triple(TopLeft, Center, BottomRight),
    PositionSet::triple(TopRight, Center, BottomLeft),
];

/// Returns true if `player` occupies every square of some win pattern.
#[instrument(skip(board))]
pub fn has_won(board: &Board, player: Player) -> bool {
    let owned = board.positions_of(player);
    WIN_PATTERNS.iter().any(|pattern| pattern.is_subset(owned))
}

/// Returns the player holding a complete line, checking the human first.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    [Player::Human, Player::Computer]
        .into_iter()
        .find(|&player| has_won(board, player))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Position};

    fn board_with(player: Player, positions: &[Position]) -> Board {
        positions.iter().fold(Board::new(), |board, &pos| {
            board.apply(Move::new(player, pos)).unwrap()
        })
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!has_won(&board, Player::Human));
        assert!(!has_won(&board, Player::Computer));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(
            Player::Human,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
        );
        assert!(has_won(&board, Player::Human));
        assert!(!has_won(&board, Player::Computer));
        assert_eq!(winner(&board), Some(Player::Human));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(
            Player::Computer,
            &[Position::TopRight, Position::Center, Position::BottomLeft],
        );
        assert_eq!(winner(&board), Some(Player::Computer));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Player::Human, &[Position::TopLeft, Position::TopCenter]);
        assert!(!has_won(&board, Player::Human));
    }

    #[test]
    fn test_patterns_are_distinct_triples() {
        for (i, a) in WIN_PATTERNS.iter().enumerate() {
            assert_eq!(a.len(), 3);
            for b in &WIN_PATTERNS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
