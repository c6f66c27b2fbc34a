//! Terminal output formatting
//!
//! Colored tiles, keyboard rows and pretty-printing for CLI results.

pub mod display;
pub mod formatters;

pub use display::{print_analysis_result, print_benchmark_result, print_solve_result};
pub use formatters::{KEYBOARD_ROWS, format_keyboard, format_tiles};
