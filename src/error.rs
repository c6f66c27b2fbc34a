//! Error types for dictionary setup and game play

use crate::game::GameState;
use std::io;
use thiserror::Error;

/// Errors raised by the dictionary and the game session
///
/// A rejected guess is not an error; it comes back as `Outcome::InvalidWord`.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("guess list is empty")]
    EmptyGuessList,

    #[error("candidate pool is empty")]
    EmptyCandidatePool,

    #[error("a game needs at least one row")]
    NoRows,

    #[error("game is over ({0}); start a new game first")]
    GameOver(GameState),

    #[error("can only keep trying after a loss (game is {0})")]
    NotLost(GameState),

    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),
}
