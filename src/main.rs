//! Adversarial Wordle - CLI
//!
//! Play in the TUI or on plain lines, or let the minimax hint play for you.

use adversarial_wordle::{
    commands::{SolveConfig, analyze_word, run_benchmark, run_simple, solve_game},
    game::{DEFAULT_MAX_ROWS, GameConfig, GameSession, Mode},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    wordlists::{Dictionary, load_dictionary},
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "adversarial_wordle",
    about = "Wordle where the answer keeps dodging your guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Guesses allowed before the game is lost
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_ROWS)]
    rows: usize,

    /// How feedback is chosen
    #[arg(short, long, global = true, value_enum, default_value_t = Mode::Adversarial)]
    mode: Mode,

    /// Seed for the classic-mode answer
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// File of extra accepted guesses, one word per line
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// File of candidate answers, one word per line
    #[arg(short = 's', long, global = true)]
    solutions: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Let the minimax hint play one game
    Solve {
        /// Force the first guess
        #[arg(short, long)]
        opener: Option<String>,

        /// Show candidate counts per row
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how a guess splits the candidate pool
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Auto-play one game per opener
    Benchmark {
        /// Number of solution words to use as openers
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        let config = GameConfig::default()
            .with_max_rows(self.rows)
            .with_mode(self.mode);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    fn dictionary(&self) -> Result<Arc<Dictionary>> {
        let dictionary = load_dictionary(self.wordlist.as_deref(), self.solutions.as_deref())
            .context("failed to load word lists")?;
        log::info!(
            "loaded {} guesses, {} solutions",
            dictionary.guesses().len(),
            dictionary.solutions().len()
        );
        Ok(Arc::new(dictionary))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let dictionary = cli.dictionary()?;
    let config = cli.game_config();

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(dictionary, config),
        Commands::Simple => run_simple(dictionary, config),
        Commands::Solve { opener, verbose } => {
            run_solve_command(dictionary, config, opener, verbose)
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &dictionary)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { count } => run_benchmark_command(&dictionary, config, count),
    }
}

fn run_solve_command(
    dictionary: Arc<Dictionary>,
    config: GameConfig,
    opener: Option<String>,
    verbose: bool,
) -> Result<()> {
    let mut solve_config = SolveConfig::new(config);
    if let Some(opener) = opener {
        solve_config = solve_config.with_opener(opener);
    }

    let result = solve_game(dictionary, &solve_config)?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(
    dictionary: &Arc<Dictionary>,
    config: GameConfig,
    count: usize,
) -> Result<()> {
    println!(
        "Running benchmark on {} openers ({} mode, {} rows)...",
        count.min(dictionary.solutions().len()),
        config.mode,
        config.max_rows
    );

    let result = run_benchmark(dictionary, config, count, true)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_play_command(dictionary: Arc<Dictionary>, config: GameConfig) -> Result<()> {
    use adversarial_wordle::interactive::{App, run_tui};

    let session = GameSession::new(dictionary, config)?;
    run_tui(App::new(session))
}
