//! Minimax hints against the adversary
//!
//! The adversary always answers with its largest group, so the best a player
//! can do is pick the guess whose largest group is smallest.

use super::partition::group_sizes;
use super::selector::choose;
use crate::core::Word;
use rayon::prelude::*;

/// How many candidates survive if the adversary answers `guess`
///
/// A committed all-Correct answer ends the game, so it counts as 0.
///
/// # Examples
/// ```
/// use adversarial_wordle::core::Word;
/// use adversarial_wordle::engine::adversary_survivors;
///
/// let pool: Vec<Word> = ["angle", "apple", "ample", "amble", "angel"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let guess = Word::new("angle").unwrap();
/// assert_eq!(adversary_survivors(&guess, &pool), 3);
/// ```
#[must_use]
pub fn adversary_survivors(guess: &Word, pool: &[Word]) -> usize {
    match choose(group_sizes(guess, pool)) {
        Some((code, _)) if code.is_all_correct() => 0,
        Some((_, size)) => size,
        None => 0,
    }
}

/// Select the guess that minimizes the adversary's surviving group
///
/// Returns the word and its survivor count, or `None` if there are no guesses.
/// Ties go to the alphabetically first word so the result is the same no
/// matter how the work is split across threads.
#[must_use]
pub fn best_guess<'a>(guesses: &'a [Word], pool: &[Word]) -> Option<(&'a Word, usize)> {
    guesses
        .par_iter()
        .map(|guess| (guess, adversary_survivors(guess, pool)))
        .min_by_key(|&(guess, survivors)| (survivors, guess))
}
