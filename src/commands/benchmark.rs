//! Benchmark command
//!
//! Plays one auto-solved game per opener and reports how the hint strategy
//! fares against the adversary.

use super::solve::{SolveConfig, solve_game};
use crate::game::GameConfig;
use crate::wordlists::Dictionary;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Result of one benchmarked game
#[derive(Debug, Clone)]
pub struct OpenerResult {
    pub opener: String,
    pub won: bool,
    pub rows: usize,
    pub remaining: usize,
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_games: usize,
    pub wins: usize,
    pub losses: usize,
    /// Rows used, for won games only
    pub distribution: HashMap<usize, usize>,
    pub average_rows: Option<f64>,
    pub duration: Duration,
    /// Every game, best first
    pub games: Vec<OpenerResult>,
}

impl BenchmarkResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_games as f64 * 100.0
        }
    }
}

/// Play one game per opener, taking the first `count` solution words as openers
///
/// # Errors
///
/// Returns an error if a game cannot be played or the progress bar template is
/// rejected.
pub fn run_benchmark(
    dictionary: &Arc<Dictionary>,
    game: GameConfig,
    count: usize,
    show_progress: bool,
) -> Result<BenchmarkResult> {
    let openers: Vec<String> = dictionary
        .solutions()
        .iter()
        .take(count)
        .map(|w| w.text().to_string())
        .collect();

    let pb = if show_progress {
        let pb = ProgressBar::new(openers.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    log::info!("benchmarking {} openers in {} mode", openers.len(), game.mode);
    let start = Instant::now();

    let mut games = openers
        .par_iter()
        .map(|opener| -> Result<OpenerResult> {
            let config = SolveConfig::new(game).with_opener(opener.as_str());
            let result = solve_game(Arc::clone(dictionary), &config)?;
            pb.inc(1);
            pb.set_message(opener.clone());
            Ok(OpenerResult {
                opener: opener.clone(),
                won: result.won,
                rows: result.steps.len(),
                remaining: result.remaining.len(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    pb.finish_with_message("done");
    let duration = start.elapsed();

    games.sort_by(|a, b| {
        b.won
            .cmp(&a.won)
            .then(a.rows.cmp(&b.rows))
            .then(a.remaining.cmp(&b.remaining))
            .then(a.opener.cmp(&b.opener))
    });

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut total_rows = 0;
    for game in games.iter().filter(|g| g.won) {
        *distribution.entry(game.rows).or_insert(0) += 1;
        total_rows += game.rows;
    }

    let wins = games.iter().filter(|g| g.won).count();

    Ok(BenchmarkResult {
        total_games: games.len(),
        wins,
        losses: games.len() - wins,
        distribution,
        average_rows: (wins > 0).then(|| total_rows as f64 / wins as f64),
        duration,
        games,
    })
}
