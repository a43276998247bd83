//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the AI policy can reuse the same win patterns.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::{is_draw, is_full};
pub use outcome::{GameOutcome, outcome, outcome_after};
pub use win::{WIN_PATTERNS, has_won, winner};
