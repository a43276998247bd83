//! Computer opponent owning its random source.

use super::{Decision, decide};
use crate::board::Board;
use crate::error::Result;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::instrument;

/// The heuristic opponent with a seedable random source for its fallback
/// rule.
#[derive(Debug, Clone)]
pub struct HeuristicAi {
    rng: ChaCha8Rng,
}

impl HeuristicAi {
    /// Creates an opponent seeded from the operating system.
    #[instrument]
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_os_rng(),
        }
    }

    /// Creates an opponent whose random choices are reproducible.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Chooses the next square for `board`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoAvailableMove`](crate::MoveError::NoAvailableMove)
    /// if the board is full.
    pub fn choose(&mut self, board: &Board) -> Result<Decision> {
        decide(board, &mut self.rng)
    }
}

impl Default for HeuristicAi {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Player, Position};

    #[test]
    fn test_same_seed_same_choices() {
        // Human on center forces every reply through the random rule.
        let board = Board::new()
            .apply(Move::new(Player::Human, Position::Center))
            .unwrap();
        let mut a = HeuristicAi::with_seed(42);
        let mut b = HeuristicAi::with_seed(42);
        for _ in 0..20 {
            assert_eq!(a.choose(&board).unwrap(), b.choose(&board).unwrap());
        }
    }
}
