//! Word lists for the puzzle
//!
//! Provides embedded word lists compiled into the binary and the
//! [`Dictionary`] every session reads from.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{GUESSES, GUESSES_COUNT, SOLUTIONS, SOLUTIONS_COUNT};

use crate::error::GameError;
use loader::{load_from_file, words_from_slice};
use std::path::Path;

/// Dictionary built from the embedded lists
///
/// # Errors
/// Fails only if the embedded lists are empty.
pub fn embedded_dictionary() -> Result<Dictionary, GameError> {
    load_dictionary(None, None)
}

/// Build a dictionary, reading either list from a file when a path is given
///
/// Missing paths fall back to the embedded lists.
///
/// # Errors
/// Returns `GameError::Io` if a file cannot be read, or the `Dictionary::new`
/// errors if a list ends up empty.
pub fn load_dictionary(
    guesses: Option<&Path>,
    solutions: Option<&Path>,
) -> Result<Dictionary, GameError> {
    let guesses = match guesses {
        Some(path) => load_from_file(path)?,
        None => words_from_slice(GUESSES),
    };
    let solutions = match solutions {
        Some(path) => load_from_file(path)?,
        None => words_from_slice(SOLUTIONS),
    };

    Dictionary::new(guesses, solutions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn solutions_count_matches_const() {
        assert_eq!(SOLUTIONS.len(), SOLUTIONS_COUNT);
    }

    #[test]
    fn guesses_count_matches_const() {
        assert_eq!(GUESSES.len(), GUESSES_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in SOLUTIONS.iter().chain(GUESSES) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_dictionary_builds() {
        let dict = embedded_dictionary().unwrap();
        assert!(!dict.solutions().is_empty());
        assert!(dict.guesses().len() >= dict.solutions().len());

        for solution in dict.solutions() {
            assert!(dict.is_valid_guess(solution));
        }
        assert!(dict.is_valid_guess(&Word::new("crane").unwrap()));
    }

    #[test]
    fn everyday_words_are_accepted() {
        let dict = embedded_dictionary().unwrap();
        assert!(dict.solutions().len() >= 2000);

        for text in [
            "sloth", "bumpy", "hello", "zesty", "pizza", "lemon", "happy", "jumbo", "fuzzy",
            "wound", "zebra", "fight",
        ] {
            let word = Word::new(text).unwrap();
            assert!(dict.is_valid_guess(&word), "'{text}' should be a valid guess");
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load_dictionary(Some(Path::new("/definitely/not/here.txt")), None);
        assert!(matches!(result, Err(GameError::Io(_))));
    }
}
