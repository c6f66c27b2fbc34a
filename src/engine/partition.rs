//! Grouping of a candidate pool by feedback code
//!
//! For a fixed guess every candidate scores to exactly one code, so the groups
//! form a true partition of the pool.

use crate::core::{Feedback, Word};
use rustc_hash::FxHashMap;

/// Candidates grouped by the code the guess would receive against them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    groups: FxHashMap<Feedback, Vec<Word>>,
}

impl Partition {
    /// Number of distinct codes
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of candidates across all groups
    #[must_use]
    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Candidates that would produce `feedback`
    #[must_use]
    pub fn get(&self, feedback: &Feedback) -> Option<&[Word]> {
        self.groups.get(feedback).map(Vec::as_slice)
    }

    /// Size of the largest group, 0 for an empty partition
    #[must_use]
    pub fn largest(&self) -> usize {
        self.groups.values().map(Vec::len).max().unwrap_or(0)
    }

    /// Iterate over `(code, group)` pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&Feedback, &[Word])> {
        self.groups.iter().map(|(code, words)| (code, words.as_slice()))
    }

    /// Groups sorted by descending size, then ascending code
    #[must_use]
    pub fn sorted(&self) -> Vec<(Feedback, &[Word])> {
        let mut groups: Vec<(Feedback, &[Word])> = self
            .groups
            .iter()
            .map(|(&code, words)| (code, words.as_slice()))
            .collect();
        groups.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then(a.0.cmp(&b.0)));
        groups
    }

    /// Take ownership of one group, leaving the others in place
    pub fn take(&mut self, feedback: &Feedback) -> Option<Vec<Word>> {
        self.groups.remove(feedback)
    }
}

/// Group `pool` by the feedback `guess` would receive against each candidate
///
/// Within a group, candidates keep their pool order.
///
/// # Examples
/// ```
/// use adversarial_wordle::core::{Feedback, Word};
/// use adversarial_wordle::engine::partition;
///
/// let guess = Word::new("sills").unwrap();
/// let pool: Vec<Word> = ["bills", "fills", "sills"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let groups = partition(&guess, &pool);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups.get(&Feedback::ALL_CORRECT).unwrap().len(), 1);
/// ```
#[must_use]
pub fn partition(guess: &Word, pool: &[Word]) -> Partition {
    let mut groups: FxHashMap<Feedback, Vec<Word>> = FxHashMap::default();

    for candidate in pool {
        groups
            .entry(Feedback::compute(guess, candidate))
            .or_default()
            .push(candidate.clone());
    }

    Partition { groups }
}

/// Count how many candidates fall under each code, without cloning words
#[must_use]
pub fn group_sizes(guess: &Word, pool: &[Word]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for candidate in pool {
        *counts.entry(Feedback::compute(guess, candidate)).or_insert(0) += 1;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn empty_pool_gives_empty_partition() {
        let guess = Word::new("crane").unwrap();
        let groups = partition(&guess, &[]);
        assert!(groups.is_empty());
        assert_eq!(groups.largest(), 0);
        assert_eq!(groups.total(), 0);
    }

    #[test]
    fn every_candidate_lands_in_exactly_one_group() {
        let pool = words(&["apple", "angle", "angel", "ample", "amble", "crane", "slate"]);

        for guess in &pool {
            let groups = partition(guess, &pool);
            assert_eq!(groups.total(), pool.len());

            for candidate in &pool {
                let hits = groups
                    .iter()
                    .filter(|(_, group)| group.contains(candidate))
                    .count();
                assert_eq!(hits, 1, "{candidate} in {hits} groups for {guess}");
            }

            for (code, group) in groups.iter() {
                for candidate in group {
                    assert_eq!(Feedback::compute(guess, candidate), *code);
                }
            }
        }
    }

    #[test]
    fn groups_preserve_pool_order() {
        let pool = words(&["wills", "bills", "tills", "fills"]);
        let guess = Word::new("gecko").unwrap();
        let groups = partition(&guess, &pool);

        let group = groups.get(&Feedback::ALL_ABSENT).unwrap();
        let texts: Vec<&str> = group.iter().map(Word::text).collect();
        assert_eq!(texts, ["wills", "bills", "tills", "fills"]);
    }

    #[test]
    fn sorted_puts_largest_first() {
        let pool = words(&["apple", "angle", "angel", "ample", "amble"]);
        let guess = Word::new("angle").unwrap();
        let groups = partition(&guess, &pool);
        let sorted = groups.sorted();

        assert_eq!(sorted[0].0.to_string(), "G--GG");
        assert_eq!(sorted[0].1.len(), 3);
        assert_eq!(sorted.len(), 3);
    }

    #[test]
    fn group_sizes_match_partition() {
        let pool = words(&["apple", "angle", "angel", "ample", "amble"]);
        let guess = Word::new("ample").unwrap();

        let sizes = group_sizes(&guess, &pool);
        let groups = partition(&guess, &pool);

        assert_eq!(sizes.len(), groups.len());
        for (code, group) in groups.iter() {
            assert_eq!(sizes[code], group.len());
        }
    }

    #[test]
    fn take_removes_group() {
        let pool = words(&["bills", "sills"]);
        let guess = Word::new("sills").unwrap();
        let mut groups = partition(&guess, &pool);

        let winners = groups.take(&Feedback::ALL_CORRECT).unwrap();
        assert_eq!(winners, words(&["sills"]));
        assert!(groups.get(&Feedback::ALL_CORRECT).is_none());
        assert_eq!(groups.len(), 1);
    }
}
