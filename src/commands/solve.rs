//! Auto-play command
//!
//! Plays hint after hint against the adversary and records every row.

use crate::core::Feedback;
use crate::game::{GameConfig, GameSession, Outcome};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result, bail};
use std::sync::Arc;

/// Configuration for an auto-played game
#[derive(Debug, Clone)]
pub struct SolveConfig {
    /// Forced first guess; hints are used when `None`
    pub opener: Option<String>,
    pub game: GameConfig,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(game: GameConfig) -> Self {
        Self { opener: None, game }
    }

    #[must_use]
    pub fn with_opener(mut self, opener: impl Into<String>) -> Self {
        self.opener = Some(opener.into());
        self
    }
}

/// Result of an auto-played game
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub won: bool,
    pub steps: Vec<GuessStep>,
    /// Candidates left when the game ended
    pub remaining: Vec<String>,
}

/// A single row of an auto-played game
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Play one full game using minimax hints
///
/// # Errors
///
/// Returns an error if the session cannot be created, the opener is not a
/// valid guess, or no hint is available.
pub fn solve_game(dictionary: Arc<Dictionary>, config: &SolveConfig) -> Result<SolveResult> {
    let mut session = GameSession::new(dictionary, config.game)?;
    let mut opener = config.opener.clone();
    let mut steps = Vec::new();

    loop {
        let candidates_before = session.remaining();
        let guess = match opener.take() {
            Some(word) => word,
            None => session
                .hint()
                .map(|(word, _)| word.text().to_string())
                .context("no guesses available")?,
        };

        let outcome = session.submit_guess(&guess)?;
        let turn = match &outcome {
            Outcome::InvalidWord(reason) => bail!("cannot play '{guess}': {reason}"),
            Outcome::Continue(turn) | Outcome::Won(turn) | Outcome::Lost(turn) => turn,
        };

        steps.push(GuessStep {
            word: turn.guess.text().to_string(),
            feedback: turn.feedback,
            candidates_before,
            candidates_after: turn.remaining,
        });

        if outcome.is_terminal() {
            break;
        }
    }

    Ok(SolveResult {
        won: matches!(steps.last(), Some(step) if step.feedback.is_all_correct()),
        steps,
        remaining: session
            .pool()
            .iter()
            .map(|word| word.text().to_string())
            .collect(),
    })
}
