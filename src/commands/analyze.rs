//! Word analysis command
//!
//! Shows how a guess splits the candidate pool and which group the adversary
//! would keep.

use crate::core::{Feedback, Word};
use crate::engine::{adversary_survivors, partition, select};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result, bail};

/// Sample words shown per group
const SAMPLE_SIZE: usize = 5;

/// One feedback group of an analyzed guess
#[derive(Debug, Clone)]
pub struct GroupSummary {
    pub feedback: Feedback,
    pub size: usize,
    pub sample: Vec<String>,
}

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: String,
    pub total_candidates: usize,
    /// Groups ordered largest first
    pub groups: Vec<GroupSummary>,
    /// Feedback the adversary would answer with
    pub chosen: Feedback,
    /// Candidates left after that answer (0 if it would be a win)
    pub survivors: usize,
}

impl AnalysisResult {
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn largest_group(&self) -> usize {
        self.groups.first().map_or(0, |g| g.size)
    }

    /// Score of the chosen code (Correct 2, Present 1)
    #[must_use]
    pub fn informativeness(&self) -> u8 {
        self.chosen.informativeness()
    }
}

/// Analyze a guess against the full solution pool
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (not 5 letters or contains non-letters)
/// - The word is not in the dictionary
pub fn analyze_word(word: &str, dictionary: &Dictionary) -> Result<AnalysisResult> {
    analyze_against(word, dictionary, dictionary.solutions())
}

/// Analyze a guess against an explicit candidate pool
///
/// # Errors
///
/// Same as [`analyze_word`], plus an error if `pool` is empty.
pub fn analyze_against(
    word: &str,
    dictionary: &Dictionary,
    pool: &[Word],
) -> Result<AnalysisResult> {
    let guess = Word::new(word).with_context(|| format!("invalid word '{word}'"))?;

    if !dictionary.is_valid_guess(&guess) {
        bail!("word '{guess}' not in word list");
    }

    let survivors = adversary_survivors(&guess, pool);
    let groups = partition(&guess, pool);

    let summaries = groups
        .sorted()
        .into_iter()
        .map(|(feedback, words)| GroupSummary {
            feedback,
            size: words.len(),
            sample: words
                .iter()
                .take(SAMPLE_SIZE)
                .map(|w| w.text().to_string())
                .collect(),
        })
        .collect();

    let (chosen, _) = select(groups).context("candidate pool is empty")?;

    Ok(AnalysisResult {
        word: guess.text().to_string(),
        total_candidates: pool.len(),
        groups: summaries,
        chosen,
        survivors,
    })
}
