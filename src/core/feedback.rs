//! Per-letter feedback for a guess
//!
//! A [`Feedback`] holds one [`Mark`] per guess position:
//! - `Absent` (gray): no unclaimed occurrence of the letter remains
//! - `Present` (yellow): the letter occurs elsewhere in the candidate
//! - `Correct` (green): the letter is in the right position
//!
//! `Mark` is ordered `Absent < Present < Correct`, which doubles as the merge
//! priority for keyboard highlighting and as the tie-break order for codes.

use super::word::{WORD_LEN, Word, WordError};
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    Absent,
    Present,
    Correct,
}

impl Mark {
    /// Weight of this mark in the informativeness score
    #[inline]
    #[must_use]
    pub const fn weight(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    /// Emoji square for this mark
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single-letter code: `G`, `Y` or `-`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Feedback code for one guess against one candidate
///
/// Ordered lexicographically by position, which makes it usable as a final,
/// deterministic tie-break between otherwise equivalent codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Feedback([Mark; WORD_LEN]);

impl Feedback {
    /// All greens (the guess is the candidate)
    pub const ALL_CORRECT: Self = Self([Mark::Correct; WORD_LEN]);

    /// All grays
    pub const ALL_ABSENT: Self = Self([Mark::Absent; WORD_LEN]);

    /// The marks in guess-position order
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LEN] {
        &self.0
    }

    /// Check if every position is `Correct`
    #[inline]
    #[must_use]
    pub fn is_all_correct(self) -> bool {
        self == Self::ALL_CORRECT
    }

    /// Compute the feedback when `guess` is played and `candidate` is the answer
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches `Correct` and consume those letters
    /// 2. Return early if every letter matched
    /// 3. Second pass: for each remaining guess letter, consume the leftmost
    ///    unclaimed occurrence in the candidate and mark it `Present`
    ///
    /// A letter occurring `k` times in the candidate earns at most `k`
    /// non-`Absent` marks.
    ///
    /// # Examples
    /// ```
    /// use adversarial_wordle::core::{Feedback, Word};
    ///
    /// let guess = Word::new("sheep").unwrap();
    /// let candidate = Word::new("shelf").unwrap();
    ///
    /// // Only one E in SHELF, so the second E of SHEEP stays gray
    /// assert_eq!(Feedback::compute(&guess, &candidate).to_string(), "GGG--");
    /// ```
    #[must_use]
    pub fn compute(guess: &Word, candidate: &Word) -> Self {
        let guess = guess.chars();
        let mut remaining = *candidate.chars();
        let mut marks = [Mark::Absent; WORD_LEN];

        for (i, mark) in marks.iter_mut().enumerate() {
            if guess[i] == remaining[i] {
                *mark = Mark::Correct;
                remaining[i] = 0;
            }
        }

        if marks == Self::ALL_CORRECT.0 {
            return Self::ALL_CORRECT;
        }

        for (i, mark) in marks.iter_mut().enumerate() {
            if *mark == Mark::Correct {
                continue;
            }
            if let Some(slot) = remaining.iter_mut().find(|slot| **slot == guess[i]) {
                *mark = Mark::Present;
                *slot = 0;
            }
        }

        Self(marks)
    }

    /// Compute feedback from raw strings, validating both words first
    ///
    /// # Errors
    /// Returns `WordError` if either string is not a valid 5-letter word.
    pub fn from_strs(guess: &str, candidate: &str) -> Result<Self, WordError> {
        Ok(Self::compute(&Word::new(guess)?, &Word::new(candidate)?))
    }

    /// Weighted count of revealed information: `Correct` = 2, `Present` = 1
    ///
    /// Lower means the player learns less.
    #[must_use]
    pub fn informativeness(self) -> u8 {
        self.0.iter().map(|mark| mark.weight()).sum()
    }

    /// Count the number of green squares
    #[must_use]
    pub fn count_correct(self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Correct).count()
    }

    /// Count the number of yellow squares
    #[must_use]
    pub fn count_present(self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Present).count()
    }

    /// Parse a code from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/⬜ for gray
    ///
    /// # Examples
    /// ```
    /// use adversarial_wordle::core::Feedback;
    ///
    /// let p1 = Feedback::parse("GY-GY").unwrap();
    /// let p2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut chars = s.chars();

        for mark in &mut marks {
            *mark = match chars.next()? {
                'G' | 'g' | '🟩' => Mark::Correct,
                'Y' | 'y' | '🟨' => Mark::Present,
                '-' | '_' | '⬜' => Mark::Absent,
                _ => return None,
            };
        }

        if chars.next().is_some() {
            return None;
        }

        Some(Self(marks))
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|mark| mark.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(guess: &str, candidate: &str) -> String {
        Feedback::from_strs(guess, candidate).unwrap().to_string()
    }

    #[test]
    fn all_correct_constant() {
        assert!(Feedback::ALL_CORRECT.is_all_correct());
        assert_eq!(Feedback::ALL_CORRECT.count_correct(), 5);
        assert_eq!(Feedback::ALL_CORRECT.informativeness(), 10);
        assert_eq!(Feedback::ALL_ABSENT.informativeness(), 0);
    }

    #[test]
    fn all_gray() {
        assert_eq!(code("abcde", "fghij"), "-----");
    }

    #[test]
    fn all_green_for_identical_words() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            let w = Word::new(word).unwrap();
            assert!(Feedback::compute(&w, &w).is_all_correct());
        }
    }

    #[test]
    fn anagram_is_all_yellow_not_all_green() {
        let feedback = Feedback::from_strs("angle", "angel").unwrap();
        assert_eq!(feedback.to_string(), "GGGYY");
        assert!(!feedback.is_all_correct());
    }

    #[test]
    fn duplicate_guess_letter_single_in_candidate() {
        // SHEEP vs SHELF: one E is green, the extra E is gray
        assert_eq!(code("sheep", "shelf"), "GGG--");
    }

    #[test]
    fn duplicate_letters_green_takes_priority() {
        // SPEED vs ERASE: S yellow, both E's yellow
        assert_eq!(code("speed", "erase"), "Y-YY-");
    }

    #[test]
    fn duplicate_letters_mixed() {
        // ROBOT vs FLOOR: first O yellow, second O green
        assert_eq!(code("robot", "floor"), "YY-G-");
    }

    #[test]
    fn yellows_consume_leftmost_first() {
        // Only one L in ANGLE; the first L of LLAMA claims it
        assert_eq!(code("llama", "angle"), "Y-Y--");
    }

    #[test]
    fn real_example() {
        // CRANE vs SLATE: A and E green, no R in SLATE
        let feedback = Feedback::from_strs("crane", "slate").unwrap();
        assert_eq!(feedback.to_string(), "--G-G");
        assert_eq!(feedback.count_correct(), 2);
        assert_eq!(feedback.count_present(), 0);
        assert_eq!(feedback.informativeness(), 4);
    }

    #[test]
    fn from_strs_rejects_bad_lengths() {
        assert_eq!(
            Feedback::from_strs("crane", "slates"),
            Err(WordError::InvalidLength(6))
        );
        assert_eq!(
            Feedback::from_strs("cran", "slate"),
            Err(WordError::InvalidLength(4))
        );
    }

    #[test]
    fn compute_is_idempotent() {
        let guess = Word::new("geese").unwrap();
        let candidate = Word::new("creep").unwrap();
        let first = Feedback::compute(&guess, &candidate);
        let second = Feedback::compute(&guess, &candidate);
        assert_eq!(first, second);
    }

    #[test]
    fn parse_valid() {
        let p1 = Feedback::parse("GYG--").unwrap();
        let p2 = Feedback::parse("🟩🟨🟩⬜⬜").unwrap();
        let p3 = Feedback::parse("gyg__").unwrap();

        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1.informativeness(), 5);
    }

    #[test]
    fn parse_invalid() {
        assert!(Feedback::parse("GYGGYX").is_none());
        assert!(Feedback::parse("GYG").is_none());
        assert!(Feedback::parse("GXGGY").is_none());
        assert!(Feedback::parse("").is_none());
    }

    #[test]
    fn emoji_and_display() {
        let feedback = Feedback::parse("GY-GY").unwrap();
        assert_eq!(feedback.to_emoji(), "🟩🟨⬜🟩🟨");
        assert_eq!(feedback.to_string(), "GY-GY");
    }

    #[test]
    fn ordering_is_positional() {
        let low = Feedback::parse("-GGGG").unwrap();
        let high = Feedback::parse("Y----").unwrap();
        assert!(low < high);
        assert!(Feedback::ALL_ABSENT < Feedback::ALL_CORRECT);
    }
}
