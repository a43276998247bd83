//! Terminal shell for noughts.
//!
//! The shell owns everything stateful about a play session: the board in
//! play, turn sequencing, pacing of the computer's replies, configuration
//! and rendering. Game rules live in the `noughts` crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod alerts;
mod app;
mod cli;
mod config;
mod input;
mod orchestrator;
mod players;
mod ui;

pub use alerts::OutcomeAlert;
pub use app::{App, AppAction};
pub use cli::Cli;
pub use config::{ConfigError, FirstPlayer, GameConfig};
pub use input::move_cursor;
pub use orchestrator::{GameEvent, Orchestrator};
pub use players::{ComputerPlayer, HumanPlayer, Player};
pub use ui::draw;
