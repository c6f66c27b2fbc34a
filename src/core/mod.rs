//! Core domain types for the puzzle
//!
//! Words, feedback codes and per-letter keyboard state. Everything here is
//! pure and free of game state.

mod feedback;
mod letters;
mod word;

pub use feedback::{Feedback, Mark};
pub use letters::LetterStates;
pub use word::{WORD_LEN, Word, WordError};
