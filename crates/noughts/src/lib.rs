//! Noughts - tic-tac-toe rules and a heuristic computer opponent.
//!
//! The crate is a functional core: a [`Board`] is an owned value passed
//! through pure rule functions, and the computer's policy takes its random
//! source as a parameter. Turn sequencing, pacing and rendering belong to
//! the caller.
//!
//! # Example
//!
//! ```
//! use noughts::{GameOutcome, Player, apply_move, new_game, outcome, select_move};
//! use rand::SeedableRng;
//!
//! let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(1);
//! let board = apply_move(&new_game(), Player::Human, 0)?;
//! assert_eq!(outcome(&board), GameOutcome::Ongoing);
//!
//! let reply = select_move(&board, &mut rng)?;
//! let board = apply_move(&board, Player::Computer, reply.to_index())?;
//! assert_eq!(board.move_count(), 2);
//! # Ok::<(), noughts::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod engine;
mod error;
mod positions;
mod types;

pub mod ai;
pub mod rules;

pub use action::Move;
pub use ai::{Decision, HeuristicAi, MoveReason, completable_cell, decide};
pub use board::Board;
pub use engine::{apply_move, new_game, outcome, select_move};
pub use error::{MoveError, Result};
pub use positions::PositionSet;
pub use rules::{GameOutcome, WIN_PATTERNS, has_won, is_draw, is_full, outcome_after, winner};
pub use types::{Player, Position};
