//! Formatting utilities for terminal output

use crate::core::{LetterStates, Mark, WORD_LEN};
use colored::{ColoredString, Colorize};

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Paint one letter tile for its mark
#[must_use]
pub fn colored_tile(letter: u8, mark: Mark) -> ColoredString {
    let text = format!(" {} ", char::from(letter.to_ascii_uppercase()));
    match mark {
        Mark::Correct => text.black().on_green().bold(),
        Mark::Present => text.black().on_yellow().bold(),
        Mark::Absent => text.white().on_bright_black(),
    }
}

/// Format a scored row as colored tiles
#[must_use]
pub fn format_tiles(tiles: &[(u8, Mark); WORD_LEN]) -> String {
    tiles
        .iter()
        .map(|&(letter, mark)| colored_tile(letter, mark).to_string())
        .collect()
}

/// Format the keyboard, one string per row
///
/// Letters that were never guessed stay uncolored.
#[must_use]
pub fn format_keyboard(letters: &LetterStates) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys: String = row
                .bytes()
                .map(|letter| match letters.get(letter) {
                    Some(mark) => colored_tile(letter, mark).to_string(),
                    None => format!(" {} ", char::from(letter.to_ascii_uppercase())),
                })
                .collect();
            format!("{}{keys}", " ".repeat(i * 2))
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Plural suffix
#[must_use]
pub const fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
