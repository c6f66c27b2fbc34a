//! One player's game: candidate pool, row counter and keyboard state
//!
//! The session owns only game data. Presentation layers read the returned
//! [`Outcome`] and the accessors; nothing here calls back into a UI.

use super::config::{GameConfig, Mode};
use crate::core::{Feedback, LetterStates, Mark, WORD_LEN, Word, WordError};
use crate::engine::{best_guess, partition, select};
use crate::error::GameError;
use crate::wordlists::Dictionary;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::fmt;
use std::sync::Arc;

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    /// `Won` or `Lost`
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Why a submission was turned away
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Not five ASCII letters
    Malformed(WordError),
    /// Well-formed but not in the dictionary
    UnknownWord(Word),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed(e) => write!(f, "{e}"),
            Self::UnknownWord(word) => write!(f, "'{}' is not in the word list", word.text()),
        }
    }
}

/// A scored row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// 0-based row the guess was played on
    pub row: usize,
    pub guess: Word,
    pub feedback: Feedback,
    /// Keyboard state after merging this row
    pub letters: LetterStates,
    /// Candidates still consistent after this row
    pub remaining: usize,
}

impl Turn {
    /// `(letter, mark)` for each position, in order
    #[must_use]
    pub fn tiles(&self) -> [(u8, Mark); WORD_LEN] {
        let marks = self.feedback.marks();
        std::array::from_fn(|i| (self.guess.char_at(i), marks[i]))
    }
}

/// Result of a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Scored; more rows remain
    Continue(Turn),
    /// Every letter correct
    Won(Turn),
    /// Scored on the last row without winning
    Lost(Turn),
    /// Rejected; no row consumed
    InvalidWord(Rejection),
}

impl Outcome {
    /// The scored row, if the guess was accepted
    #[must_use]
    pub const fn turn(&self) -> Option<&Turn> {
        match self {
            Self::Continue(turn) | Self::Won(turn) | Self::Lost(turn) => Some(turn),
            Self::InvalidWord(_) => None,
        }
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Won(_) | Self::Lost(_))
    }
}

/// A single game against the dictionary
///
/// Sessions are independent: each owns its pool and row state and shares only
/// the read-only dictionary.
pub struct GameSession {
    dictionary: Arc<Dictionary>,
    config: GameConfig,
    rng: StdRng,
    pool: Vec<Word>,
    row: usize,
    letters: LetterStates,
    state: GameState,
    history: Vec<Turn>,
    target: Option<Word>,
}

impl GameSession {
    /// Start a session with a fresh game
    ///
    /// # Errors
    /// Returns `GameError::NoRows` if `config.max_rows` is 0 and
    /// `GameError::EmptyCandidatePool` if the dictionary has no solutions.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use adversarial_wordle::core::Word;
    /// use adversarial_wordle::game::{GameConfig, GameSession, Outcome};
    /// use adversarial_wordle::wordlists::Dictionary;
    ///
    /// let words: Vec<Word> = ["apple", "angle", "angel", "ample", "amble"]
    ///     .iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let dictionary = Arc::new(Dictionary::new(words.clone(), words).unwrap());
    ///
    /// let mut session = GameSession::new(dictionary, GameConfig::default()).unwrap();
    /// let outcome = session.submit_guess("angle").unwrap();
    ///
    /// assert!(matches!(outcome, Outcome::Continue(_)));
    /// assert_eq!(session.remaining(), 3);
    /// ```
    pub fn new(dictionary: Arc<Dictionary>, config: GameConfig) -> Result<Self, GameError> {
        if config.max_rows == 0 {
            return Err(GameError::NoRows);
        }
        if dictionary.solutions().is_empty() {
            return Err(GameError::EmptyCandidatePool);
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        let mut session = Self {
            dictionary,
            config,
            rng,
            pool: Vec::new(),
            row: 0,
            letters: LetterStates::new(),
            state: GameState::InProgress,
            history: Vec::new(),
            target: None,
        };
        session.new_game();
        Ok(session)
    }

    /// Reset pool, rows and keyboard for a new game
    pub fn new_game(&mut self) {
        self.pool = self.dictionary.solutions().to_vec();
        self.row = 0;
        self.letters.reset();
        self.history.clear();
        self.state = GameState::InProgress;
        self.target = match self.config.mode {
            Mode::Adversarial => None,
            Mode::Classic => self.dictionary.solutions().choose(&mut self.rng).cloned(),
        };

        log::info!(
            "new {} game: {} candidates, {} rows",
            self.config.mode,
            self.pool.len(),
            self.config.max_rows
        );
    }

    /// Score a guess and narrow the pool
    ///
    /// Input is trimmed and lowercased. Words that are malformed or not in the
    /// dictionary come back as `Outcome::InvalidWord` without using a row.
    ///
    /// # Errors
    /// Returns `GameError::GameOver` once the game is won or lost, and
    /// `GameError::EmptyCandidatePool` if the pool is somehow empty.
    pub fn submit_guess(&mut self, raw: &str) -> Result<Outcome, GameError> {
        if self.state.is_over() {
            return Err(GameError::GameOver(self.state));
        }

        let guess = match Word::new(raw) {
            Ok(word) => word,
            Err(e) => {
                log::warn!("rejected {raw:?}: {e}");
                return Ok(Outcome::InvalidWord(Rejection::Malformed(e)));
            }
        };

        if !self.dictionary.is_valid_guess(&guess) {
            log::warn!("rejected {guess}: not in dictionary");
            return Ok(Outcome::InvalidWord(Rejection::UnknownWord(guess)));
        }

        let before = self.pool.len();
        let mut groups = partition(&guess, &self.pool);
        let group_count = groups.len();

        let (feedback, survivors) = match &self.target {
            None => select(groups),
            Some(target) => {
                let code = Feedback::compute(&guess, target);
                groups.take(&code).map(|survivors| (code, survivors))
            }
        }
        .ok_or(GameError::EmptyCandidatePool)?;

        log::debug!(
            "row {}: {guess} -> {feedback} ({group_count} groups, {before} -> {} candidates)",
            self.row + 1,
            survivors.len()
        );

        self.letters.merge_row(&guess, feedback);
        self.pool = survivors;

        let turn = Turn {
            row: self.row,
            guess,
            feedback,
            letters: self.letters,
            remaining: self.pool.len(),
        };
        self.history.push(turn.clone());

        if feedback.is_all_correct() {
            self.state = GameState::Won;
            log::info!("won on row {}", self.row + 1);
            return Ok(Outcome::Won(turn));
        }

        self.row += 1;
        if self.row >= self.config.max_rows {
            self.state = GameState::Lost;
            log::info!("lost with {} candidates left", self.pool.len());
            return Ok(Outcome::Lost(turn));
        }

        Ok(Outcome::Continue(turn))
    }

    /// After a loss, clear the board and play on with the same pool and keyboard
    ///
    /// # Errors
    /// Returns `GameError::NotLost` unless the game is currently lost.
    pub fn keep_trying(&mut self) -> Result<(), GameError> {
        if self.state != GameState::Lost {
            return Err(GameError::NotLost(self.state));
        }

        self.row = 0;
        self.history.clear();
        self.state = GameState::InProgress;
        log::info!("keep trying with {} candidates", self.pool.len());
        Ok(())
    }

    /// Guess that leaves the adversary the smallest group, with that group's size
    #[must_use]
    pub fn hint(&self) -> Option<(&Word, usize)> {
        best_guess(self.dictionary.guesses(), &self.pool)
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// 0-based index of the row the next guess goes on
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn max_rows(&self) -> usize {
        self.config.max_rows
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Words still consistent with every committed row
    #[must_use]
    pub fn pool(&self) -> &[Word] {
        &self.pool
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    #[must_use]
    pub const fn letters(&self) -> &LetterStates {
        &self.letters
    }

    /// Rows played on the current board
    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// The fixed answer in classic mode
    #[must_use]
    pub const fn target(&self) -> Option<&Word> {
        self.target.as_ref()
    }

    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}
