//! Game outcome classification.

use super::draw::is_draw;
use super::win::has_won;
use crate::board::Board;
use crate::types::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// State of a game as judged from its board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// No winner and at least one empty square.
    Ongoing,
    /// The human holds a complete line.
    HumanWin,
    /// The computer holds a complete line.
    ComputerWin,
    /// Full board, no line.
    Draw,
}

impl GameOutcome {
    /// Returns true once the game can accept no more moves.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::Ongoing)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::HumanWin => Some(Player::Human),
            GameOutcome::ComputerWin => Some(Player::Computer),
            GameOutcome::Ongoing | GameOutcome::Draw => None,
        }
    }

    fn win_for(player: Player) -> Self {
        match player {
            Player::Human => GameOutcome::HumanWin,
            Player::Computer => GameOutcome::ComputerWin,
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::Ongoing => write!(f, "Ongoing"),
            GameOutcome::HumanWin => write!(f, "Human wins"),
            GameOutcome::ComputerWin => write!(f, "Computer wins"),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Classifies the board, checking the human's lines before the computer's.
#[instrument(skip(board))]
pub fn outcome(board: &Board) -> GameOutcome {
    outcome_after(board, Player::Human)
}

/// Classifies the board right after `last_mover` played.
///
/// The mover's lines are checked first, then the opponent's, then the draw
/// condition. Only one move lands per turn, so in legal play at most one
/// player can hold a line.
#[instrument(skip(board))]
pub fn outcome_after(board: &Board, last_mover: Player) -> GameOutcome {
    for player in [last_mover, last_mover.opponent()] {
        if has_won(board, player) {
            return GameOutcome::win_for(player);
        }
    }

    if is_draw(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Position};

    #[test]
    fn test_empty_board_ongoing() {
        assert_eq!(outcome(&Board::new()), GameOutcome::Ongoing);
        assert!(!GameOutcome::Ongoing.is_terminal());
    }

    #[test]
    fn test_computer_win_reported_after_either_mover() {
        let board = [Position::TopLeft, Position::Center, Position::BottomRight]
            .into_iter()
            .fold(Board::new(), |b, pos| b.apply(Move::new(Player::Computer, pos)).unwrap());
        assert_eq!(outcome(&board), GameOutcome::ComputerWin);
        assert_eq!(outcome_after(&board, Player::Computer), GameOutcome::ComputerWin);
        assert_eq!(outcome_after(&board, Player::Human), GameOutcome::ComputerWin);
        assert_eq!(GameOutcome::ComputerWin.winner(), Some(Player::Computer));
    }
}
