//! Human player fed by the UI's cell selections.

use super::Player;
use anyhow::Result;
use noughts::{Board, Position};
use tokio::sync::mpsc;
use tracing::debug;

/// Human player reading selected squares from a channel.
pub struct HumanPlayer {
    name: String,
    input_rx: mpsc::UnboundedReceiver<Position>,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input_rx: mpsc::UnboundedReceiver<Position>) -> Self {
        Self {
            name: name.into(),
            input_rx,
        }
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn get_move(&mut self, _board: &Board) -> Result<Position> {
        match self.input_rx.recv().await {
            Some(position) => {
                debug!(player = %self.name, %position, "Human selected square");
                Ok(position)
            }
            None => anyhow::bail!("Input channel closed"),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
