//! Adversarial choice of the feedback to reveal
//!
//! The adversary commits to the code whose candidate group is largest, so the
//! player eliminates as few words as possible. Ties go to the code revealing
//! the least (lowest informativeness), then to the lowest code in positional
//! order, which makes the choice independent of hash-map iteration order.

use super::partition::Partition;
use crate::core::{Feedback, Word};
use std::cmp::Reverse;

/// Ranking key for a candidate group: bigger groups first, then least informative,
/// then lowest code
fn rank(code: Feedback, size: usize) -> (usize, Reverse<u8>, Reverse<Feedback>) {
    (size, Reverse(code.informativeness()), Reverse(code))
}

/// Pick the code the adversary would commit to, given per-code group sizes
///
/// Returns `None` when there are no groups.
///
/// # Examples
/// ```
/// use adversarial_wordle::core::Feedback;
/// use adversarial_wordle::engine::choose;
///
/// let win = Feedback::ALL_CORRECT;
/// let miss = Feedback::parse("G--GG").unwrap();
///
/// let chosen = choose([(win, 1), (miss, 3)]);
/// assert_eq!(chosen, Some((miss, 3)));
/// ```
pub fn choose<I>(sizes: I) -> Option<(Feedback, usize)>
where
    I: IntoIterator<Item = (Feedback, usize)>,
{
    sizes
        .into_iter()
        .filter(|&(_, size)| size > 0)
        .max_by_key(|&(code, size)| rank(code, size))
}

/// Commit to the adversarial code and return it with its surviving candidates
///
/// Returns `None` for an empty partition.
#[must_use]
pub fn select(mut partition: Partition) -> Option<(Feedback, Vec<Word>)> {
    let (code, size) = choose(partition.iter().map(|(&code, group)| (code, group.len())))?;
    let survivors = partition.take(&code)?;

    log::trace!(
        "adversary kept {code} with {size} of {} candidates across {} groups",
        partition.total() + size,
        partition.len() + 1
    );

    Some((code, survivors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::partition;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn code(s: &str) -> Feedback {
        Feedback::parse(s).unwrap()
    }

    #[test]
    fn empty_partition_selects_nothing() {
        assert!(select(Partition::default()).is_none());
        assert!(choose(Vec::new()).is_none());
    }

    #[test]
    fn prefers_largest_group_over_immediate_win() {
        let pool = words(&["apple", "angle", "angel", "ample", "amble"]);
        let guess = Word::new("angle").unwrap();

        let (chosen, survivors) = select(partition(&guess, &pool)).unwrap();

        assert_eq!(chosen, code("G--GG"));
        assert!(!chosen.is_all_correct());
        assert_eq!(survivors, words(&["apple", "ample", "amble"]));
    }

    #[test]
    fn survivors_reproduce_chosen_code() {
        let pool = words(&[
            "crane", "slate", "crate", "grate", "irate", "trace", "angle", "apple",
        ]);

        for guess in &pool {
            let groups = partition(guess, &pool);
            let largest = groups.largest();
            let (chosen, survivors) = select(groups).unwrap();

            assert_eq!(survivors.len(), largest);
            for survivor in &survivors {
                assert_eq!(Feedback::compute(guess, survivor), chosen);
            }
        }
    }

    #[test]
    fn tie_goes_to_least_informative_code() {
        let chosen = choose([
            (code("GG---"), 2),
            (code("Y----"), 2),
            (code("-----"), 1),
        ]);
        assert_eq!(chosen, Some((code("Y----"), 2)));
    }

    #[test]
    fn equal_score_tie_goes_to_lowest_code() {
        // Both score 1; "----Y" sorts before "Y----"
        let forward = choose([(code("Y----"), 4), (code("----Y"), 4)]);
        let backward = choose([(code("----Y"), 4), (code("Y----"), 4)]);

        assert_eq!(forward, Some((code("----Y"), 4)));
        assert_eq!(forward, backward);
    }

    #[test]
    fn all_singletons_avoid_the_win() {
        let chosen = choose([
            (Feedback::ALL_CORRECT, 1),
            (code("GGGYY"), 1),
            (code("G--GG"), 1),
        ]);
        assert_eq!(chosen, Some((code("G--GG"), 1)));
    }

    #[test]
    fn single_remaining_word_guessed_is_a_win() {
        let pool = words(&["angle"]);
        let guess = Word::new("angle").unwrap();

        let (chosen, survivors) = select(partition(&guess, &pool)).unwrap();
        assert!(chosen.is_all_correct());
        assert_eq!(survivors, pool);
    }
}
