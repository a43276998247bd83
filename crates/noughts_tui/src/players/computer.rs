//! Computer player wrapping the heuristic policy.

use super::Player;
use anyhow::Result;
use noughts::{Board, HeuristicAi, Position};
use std::time::Duration;
use tracing::debug;

/// Computer opponent that pauses before answering.
pub struct ComputerPlayer {
    name: String,
    ai: HeuristicAi,
    delay: Duration,
}

impl ComputerPlayer {
    /// Creates a computer player that waits `delay` before each move.
    pub fn new(name: impl Into<String>, ai: HeuristicAi, delay: Duration) -> Self {
        Self {
            name: name.into(),
            ai,
            delay,
        }
    }
}

#[async_trait::async_trait]
impl Player for ComputerPlayer {
    async fn get_move(&mut self, board: &Board) -> Result<Position> {
        debug!(ai = %self.name, delay_ms = self.delay.as_millis() as u64, "Computer thinking");

        // Pacing only; the policy itself answers immediately.
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let decision = self.ai.choose(board)?;
        debug!(
            ai = %self.name,
            position = %decision.position(),
            reason = %decision.reason(),
            "Computer chose square"
        );
        Ok(decision.position())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_takes_center_on_empty_board() {
        let mut player = ComputerPlayer::new("AI", HeuristicAi::with_seed(1), Duration::ZERO);
        let pos = player.get_move(&Board::new()).await.unwrap();
        assert_eq!(pos, Position::Center);
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_for_delay() {
        let mut player =
            ComputerPlayer::new("AI", HeuristicAi::with_seed(1), Duration::from_millis(500));
        let started = tokio::time::Instant::now();
        player.get_move(&Board::new()).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(500));
    }
}
