//! Display functions for command results

use super::formatters::{create_progress_bar, plural};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;

/// Candidates listed when few enough remain
const SHOW_REMAINING: usize = 10;

/// Print an auto-played game
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("{}", "Auto-play against the adversary".bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nRow {}: {} {}",
            i + 1,
            step.word.to_uppercase(),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if result.won {
        println!(
            "{}",
            format!(
                "✅ Cornered the adversary in {} row{}!",
                result.steps.len(),
                plural(result.steps.len())
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ Out of rows with {} candidate{} left",
                result.remaining.len(),
                plural(result.remaining.len())
            )
            .red()
            .bold()
        );
        if result.remaining.len() <= SHOW_REMAINING {
            println!("   {}", result.remaining.join(", ").to_uppercase());
        }
    }
}

/// Print how a guess splits the pool
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\n📊 Against {} possible answers: {} group{}",
        result.total_candidates,
        result.group_count(),
        plural(result.group_count())
    );
    println!(
        "   Adversary answers: {} ({} left, informativeness {})",
        result.chosen.to_emoji(),
        format!("{}", result.survivors).bright_yellow(),
        result.informativeness()
    );
    println!("   Largest group:     {}", result.largest_group());

    let largest = result.largest_group();
    println!();
    for group in &result.groups {
        let bar = create_progress_bar(group.size as f64, largest as f64, 20);
        let marker = if group.feedback == result.chosen { "◀" } else { " " };
        println!(
            "   {} {}G{}Y [{}] {:5} {} {}",
            group.feedback.to_emoji(),
            group.feedback.count_correct(),
            group.feedback.count_present(),
            bar.green(),
            group.size,
            marker,
            group.sample.join(" ").bright_black()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Won:              {} ({:.1}%)",
        format!("{}", result.wins).green(),
        result.win_rate()
    );
    println!("   Lost:             {}", format!("{}", result.losses).red());
    if let Some(average) = result.average_rows {
        println!(
            "   Average rows:     {}",
            format!("{average:.2}").bright_yellow().bold()
        );
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.wins > 0 {
        let max_rows = result.distribution.keys().copied().max().unwrap_or(0);
        println!("\n📈 {}", "Rows to win:".bright_cyan().bold());
        for rows in 1..=max_rows {
            let count = result.distribution.get(&rows).copied().unwrap_or(0);
            let pct = count as f64 / result.total_games as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {rows}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    println!("\n🏆 {}", "Best openers:".bright_cyan().bold());
    for game in result.games.iter().take(5) {
        let status = if game.won {
            format!("won in {}", game.rows).green()
        } else {
            format!("lost, {} left", game.remaining).red()
        };
        println!("   {} {status}", game.opener.to_uppercase().bright_white().bold());
    }
}
