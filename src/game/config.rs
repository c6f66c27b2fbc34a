//! Session configuration

use clap::ValueEnum;
use std::fmt;

/// Rows on the standard board
pub const DEFAULT_MAX_ROWS: usize = 6;

/// How the session decides which feedback to reveal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Commit to the largest candidate group every turn
    #[default]
    Adversarial,
    /// Draw one target at game start and score against it
    Classic,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Adversarial => write!(f, "adversarial"),
            Self::Classic => write!(f, "classic"),
        }
    }
}

/// Per-session settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of guesses before the game is lost
    pub max_rows: usize,
    pub mode: Mode,
    /// Seed for the classic-mode target draw; `None` uses the thread RNG
    pub seed: Option<u64>,
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_rows: usize, mode: Mode, seed: Option<u64>) -> Self {
        Self {
            max_rows,
            mode,
            seed,
        }
    }

    #[must_use]
    pub const fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ROWS, Mode::Adversarial, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_standard_board() {
        let config = GameConfig::default();
        assert_eq!(config.max_rows, 6);
        assert_eq!(config.mode, Mode::Adversarial);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn builder_methods() {
        let config = GameConfig::default()
            .with_max_rows(3)
            .with_mode(Mode::Classic)
            .with_seed(7);
        assert_eq!(config, GameConfig::new(3, Mode::Classic, Some(7)));
    }

    #[test]
    fn mode_display() {
        assert_eq!(Mode::Adversarial.to_string(), "adversarial");
        assert_eq!(Mode::Classic.to_string(), "classic");
    }
}
