//! Best-known mark per letter of the alphabet
//!
//! Drives keyboard highlighting. Merging is a join on `Absent < Present < Correct`,
//! so a letter's state can only move upwards until the game is reset.

use super::{Feedback, Mark, Word};

const ALPHABET_LEN: usize = 26;

/// Per-letter keyboard state for `a..=z`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterStates([Option<Mark>; ALPHABET_LEN]);

impl LetterStates {
    /// All letters unknown
    #[must_use]
    pub const fn new() -> Self {
        Self([None; ALPHABET_LEN])
    }

    /// Current mark for `letter`, or `None` if it has not been played
    ///
    /// Non-lowercase bytes always report `None`.
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<Mark> {
        Self::index(letter).and_then(|i| self.0[i])
    }

    /// Raise `letter` to `mark` unless it already holds a stronger mark
    pub fn merge(&mut self, letter: u8, mark: Mark) {
        if let Some(i) = Self::index(letter) {
            self.0[i] = self.0[i].max(Some(mark));
        }
    }

    /// Merge every tile of a scored row
    pub fn merge_row(&mut self, guess: &Word, feedback: Feedback) {
        for (&letter, &mark) in guess.chars().iter().zip(feedback.marks()) {
            self.merge(letter, mark);
        }
    }

    /// Forget everything
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Iterate `(letter, mark)` for every letter that has been played
    pub fn iter(&self) -> impl Iterator<Item = (u8, Mark)> + '_ {
        (b'a'..=b'z')
            .zip(self.0.iter())
            .filter_map(|(letter, mark)| mark.map(|m| (letter, m)))
    }

    fn index(letter: u8) -> Option<usize> {
        letter
            .is_ascii_lowercase()
            .then(|| usize::from(letter - b'a'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let states = LetterStates::new();
        assert_eq!(states.get(b'a'), None);
        assert_eq!(states.iter().count(), 0);
    }

    #[test]
    fn merge_never_downgrades() {
        let mut states = LetterStates::new();
        states.merge(b'e', Mark::Present);
        states.merge(b'e', Mark::Absent);
        assert_eq!(states.get(b'e'), Some(Mark::Present));

        states.merge(b'e', Mark::Correct);
        states.merge(b'e', Mark::Present);
        assert_eq!(states.get(b'e'), Some(Mark::Correct));
    }

    #[test]
    fn merge_row_keeps_strongest_mark_for_repeated_letter() {
        let mut states = LetterStates::new();
        let guess = Word::new("sheep").unwrap();
        let feedback = Feedback::parse("GGG--").unwrap();
        states.merge_row(&guess, feedback);

        assert_eq!(states.get(b's'), Some(Mark::Correct));
        assert_eq!(states.get(b'e'), Some(Mark::Correct));
        assert_eq!(states.get(b'p'), Some(Mark::Absent));
        assert_eq!(states.get(b'z'), None);
    }

    #[test]
    fn ignores_non_letters() {
        let mut states = LetterStates::new();
        states.merge(b'!', Mark::Correct);
        assert_eq!(states.get(b'!'), None);
        assert_eq!(states.iter().count(), 0);
    }

    #[test]
    fn reset_clears() {
        let mut states = LetterStates::new();
        states.merge(b'a', Mark::Correct);
        states.reset();
        assert_eq!(states, LetterStates::new());
    }
}
