//! Guess-validity set plus the initial candidate list

use crate::core::Word;
use crate::error::GameError;
use rustc_hash::FxHashSet;

/// The words a session may accept and the words it may converge to
///
/// Every solution is also a valid guess. Solutions keep their file order with
/// duplicates removed.
#[derive(Debug, Clone)]
pub struct Dictionary {
    valid: FxHashSet<Word>,
    guesses: Vec<Word>,
    solutions: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary from a guess list and a solution list
    ///
    /// # Errors
    /// Returns `GameError::EmptyGuessList` if the guess list is empty and
    /// `GameError::EmptyCandidatePool` if there are no solutions.
    pub fn new(guesses: Vec<Word>, solutions: Vec<Word>) -> Result<Self, GameError> {
        if guesses.is_empty() {
            return Err(GameError::EmptyGuessList);
        }

        let mut seen = FxHashSet::default();
        let solutions: Vec<Word> = solutions
            .into_iter()
            .filter(|word| seen.insert(word.clone()))
            .collect();

        if solutions.is_empty() {
            return Err(GameError::EmptyCandidatePool);
        }

        let mut valid = seen;
        let mut all_guesses = solutions.clone();
        for word in guesses {
            if valid.insert(word.clone()) {
                all_guesses.push(word);
            }
        }

        all_guesses.sort();
        log::info!(
            "dictionary ready: {} solutions, {} valid guesses",
            solutions.len(),
            all_guesses.len()
        );

        Ok(Self {
            valid,
            guesses: all_guesses,
            solutions,
        })
    }

    /// Whether `word` may be submitted
    #[must_use]
    pub fn is_valid_guess(&self, word: &Word) -> bool {
        self.valid.contains(word)
    }

    /// All accepted guesses in alphabetical order
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Initial candidate pool
    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }
}
