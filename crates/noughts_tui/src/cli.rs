//! Command-line interface for noughts.

use crate::config::{FirstPlayer, GameConfig};
use clap::Parser;
use std::path::PathBuf;

/// Noughts - play tic-tac-toe against a heuristic computer opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe against the computer, in your terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(short, long, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Fixed seed for the computer's random choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause before the computer answers, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Who moves first
    #[arg(long, value_enum)]
    pub first: Option<FirstPlayer>,

    /// File receiving log output
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Layers the flags that were given over `config`.
    pub fn apply(&self, mut config: GameConfig) -> GameConfig {
        if let Some(seed) = self.seed {
            config = config.with_seed(Some(seed));
        }
        if let Some(delay) = self.delay_ms {
            config = config.with_computer_delay_ms(delay);
        }
        if let Some(first) = self.first {
            config = config.with_first_player(first);
        }
        if let Some(log_file) = &self.log_file {
            config = config.with_log_file(log_file.clone());
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "noughts", "--seed", "3", "--first", "computer", "--delay-ms", "0",
        ])
        .unwrap();
        let config = cli.apply(GameConfig::default());
        assert_eq!(*config.seed(), Some(3));
        assert_eq!(*config.first_player(), FirstPlayer::Computer);
        assert_eq!(*config.computer_delay_ms(), 0);
    }

    #[test]
    fn test_absent_flags_keep_config() {
        let cli = Cli::try_parse_from(["noughts"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("noughts.toml"));
        let base = GameConfig::default().with_seed(Some(11));
        assert_eq!(cli.apply(base.clone()), base);
    }
}
