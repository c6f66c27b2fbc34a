//! Adversarial Wordle
//!
//! A five-letter word puzzle that never commits to an answer. Each guess is
//! scored against every word still possible, and the game reveals whichever
//! feedback keeps the most words alive.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use adversarial_wordle::game::{GameConfig, GameSession, Outcome};
//! use adversarial_wordle::wordlists::embedded_dictionary;
//!
//! let dictionary = Arc::new(embedded_dictionary().unwrap());
//! let mut session = GameSession::new(dictionary, GameConfig::default()).unwrap();
//!
//! if let Outcome::Continue(turn) = session.submit_guess("crane").unwrap() {
//!     println!("{} {} ({} left)", turn.guess, turn.feedback.to_emoji(), turn.remaining);
//! }
//! ```

// Core domain types
pub mod core;

// Scoring, partitioning and adversarial selection
pub mod engine;

// Error types
pub mod error;

// Game session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
