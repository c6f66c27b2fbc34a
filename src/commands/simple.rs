//! Simple interactive CLI mode
//!
//! Line-based game without the TUI.

use crate::game::{GameConfig, GameSession, GameState, Outcome};
use crate::output::formatters::{format_keyboard, format_tiles, plural};
use crate::wordlists::Dictionary;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use std::sync::Arc;

/// Candidates listed after a loss when few enough remain
const SHOW_REMAINING: usize = 10;

/// A line typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    New,
    Hint,
    Keep,
    Guess(String),
}

impl Command {
    /// Commands are matched case-insensitively; anything else is a guess
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => Self::Quit,
            "new" | "n" => Self::New,
            "hint" | "h" | "?" => Self::Hint,
            "keep" | "k" => Self::Keep,
            _ => Self::Guess(line.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the session cannot be created or there's an I/O error
/// reading user input.
pub fn run_simple(dictionary: Arc<Dictionary>, config: GameConfig) -> Result<()> {
    let mut session = GameSession::new(dictionary, config)?;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Adversarial Wordle - Simple Mode              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the five-letter word. The game will not make it easy.");
    println!("Commands: 'hint', 'new', 'keep' (after a loss), 'quit'\n");

    loop {
        let prompt = match session.state() {
            GameState::InProgress => format!(
                "Row {}/{} ({} candidate{})",
                session.row() + 1,
                session.max_rows(),
                session.remaining(),
                plural(session.remaining())
            ),
            GameState::Won => "Won! 'new' or 'quit'".to_string(),
            GameState::Lost => "Lost! 'keep', 'new' or 'quit'".to_string(),
        };

        let Some(line) = get_user_input(&prompt)? else {
            println!();
            return Ok(());
        };

        match Command::parse(&line) {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::New => {
                session.new_game();
                println!("\n🔄 New game started!\n");
            }
            Command::Keep => match session.keep_trying() {
                Ok(()) => println!(
                    "\n🔁 Board cleared. {} candidate{} still in play.\n",
                    session.remaining(),
                    plural(session.remaining())
                ),
                Err(e) => println!("{}", e.to_string().red()),
            },
            Command::Hint => {
                if session.state().is_over() {
                    println!("{}", "The game is over.".red());
                } else if let Some((word, survivors)) = session.hint() {
                    println!(
                        "💡 Try {} (at most {survivors} left)",
                        word.text().to_uppercase().bright_yellow().bold()
                    );
                }
            }
            Command::Guess(guess) => {
                if session.state().is_over() {
                    println!("{}", "The game is over. Type 'new' or 'keep'.".red());
                    continue;
                }
                play_guess(&mut session, &guess)?;
            }
        }
    }
}

fn play_guess(session: &mut GameSession, guess: &str) -> Result<()> {
    let outcome = session.submit_guess(guess)?;

    if let Outcome::InvalidWord(reason) = &outcome {
        println!("❌ {}", reason.to_string().red());
        return Ok(());
    }

    for turn in session.history() {
        println!("   {}", format_tiles(&turn.tiles()));
    }
    println!();
    for row in format_keyboard(session.letters()) {
        println!("   {row}");
    }
    println!();

    match outcome {
        Outcome::Won(turn) => {
            println!(
                "{}",
                format!("🎉 Solved on row {}!", turn.row + 1).green().bold()
            );
        }
        Outcome::Lost(turn) => {
            println!(
                "{}",
                format!(
                    "💀 Out of rows. {} word{} still fit.",
                    turn.remaining,
                    plural(turn.remaining)
                )
                .red()
                .bold()
            );
            if session.remaining() <= SHOW_REMAINING {
                let words: Vec<&str> = session.pool().iter().map(|w| w.text()).collect();
                println!("   {}", words.join(", ").to_uppercase());
            }
        }
        Outcome::Continue(_) | Outcome::InvalidWord(_) => {}
    }

    Ok(())
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse("quit"), Command::Quit);
        assert_eq!(Command::parse(" Q "), Command::Quit);
        assert_eq!(Command::parse("NEW"), Command::New);
        assert_eq!(Command::parse("hint"), Command::Hint);
        assert_eq!(Command::parse("k"), Command::Keep);
    }

    #[test]
    fn anything_else_is_a_guess() {
        assert_eq!(Command::parse(" Crane "), Command::Guess("Crane".to_string()));
        assert_eq!(Command::parse("zz"), Command::Guess("zz".to_string()));
    }
}
