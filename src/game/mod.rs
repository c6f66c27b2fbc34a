//! Game session state machine
//!
//! Owns the candidate pool, row counter and keyboard state for one player and
//! drives the engine once per submitted guess.

mod config;
mod session;

pub use config::{DEFAULT_MAX_ROWS, GameConfig, Mode};
pub use session::{GameSession, GameState, Outcome, Rejection, Turn};
