//! TUI application state and logic

use crate::core::WORD_LEN;
use crate::game::{GameSession, GameState, Outcome};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App {
    pub session: GameSession,
    /// Letters typed on the current row
    pub input: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index is the row the game was won on (1-based)
    pub row_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    fn record_win(&mut self, row: usize) {
        self.total_games += 1;
        self.games_won += 1;
        if self.row_distribution.len() <= row {
            self.row_distribution.resize(row + 1, 0);
        }
        self.row_distribution[row] += 1;
    }

    fn record_loss(&mut self) {
        self.total_games += 1;
    }

    /// A kept-trying game is still the same game; its final result is recorded later
    fn undo_loss(&mut self) {
        self.total_games = self.total_games.saturating_sub(1);
    }
}

impl App {
    #[must_use]
    pub fn new(session: GameSession) -> Self {
        let mut app = Self {
            session,
            input: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message(
            "Welcome! Guess the five-letter word... if it ever settles on one.",
            MessageStyle::Info,
        );
        app.add_message("Tab asks for a hint.", MessageStyle::Info);
        app
    }

    pub fn type_letter(&mut self, c: char) {
        if self.session.state().is_over() || !c.is_ascii_alphabetic() {
            return;
        }
        if self.input.len() < WORD_LEN {
            self.input.push(c.to_ascii_lowercase());
        }
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Submit the typed row, or start a new game once this one is over
    pub fn submit(&mut self) {
        if self.session.state().is_over() {
            self.new_game();
            return;
        }

        if self.input.len() < WORD_LEN {
            self.add_message("Not enough letters", MessageStyle::Error);
            return;
        }

        let guess = std::mem::take(&mut self.input);
        match self.session.submit_guess(&guess) {
            Ok(Outcome::Continue(turn)) => {
                self.add_message(
                    &format!("{} candidates remaining", turn.remaining),
                    MessageStyle::Info,
                );
            }
            Ok(Outcome::Won(turn)) => {
                self.stats.record_win(turn.row + 1);
                let celebration = match turn.row + 1 {
                    1 => "🎯 HOLE IN ONE! The adversary had nowhere to hide!",
                    2 | 3 => "🔥 MAGNIFICENT! Cornered it fast!",
                    4 | 5 => "👏 GREAT JOB! Pinned it down!",
                    _ => "😅 PHEW! Got it in the end!",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press Enter for a new game.", MessageStyle::Info);
            }
            Ok(Outcome::Lost(turn)) => {
                self.stats.record_loss();
                self.add_message(
                    &format!("Out of rows! {} words still fit.", turn.remaining),
                    MessageStyle::Error,
                );
                self.add_message(
                    "Press 'k' to keep trying or Enter for a new game.",
                    MessageStyle::Info,
                );
            }
            Ok(Outcome::InvalidWord(reason)) => {
                self.add_message(&reason.to_string(), MessageStyle::Error);
                self.input = guess;
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn request_hint(&mut self) {
        if self.session.state().is_over() {
            return;
        }
        let hint = self
            .session
            .hint()
            .map(|(word, survivors)| (word.text().to_uppercase(), survivors));
        match hint {
            Some((word, survivors)) => self.add_message(
                &format!("💡 Try {word} (at most {survivors} left)"),
                MessageStyle::Info,
            ),
            None => self.add_message("No hint available", MessageStyle::Error),
        }
    }

    pub fn keep_trying(&mut self) {
        match self.session.keep_trying() {
            Ok(()) => {
                self.stats.undo_loss();
                self.input.clear();
                self.add_message(
                    &format!(
                        "Board cleared. {} candidates still in play.",
                        self.session.remaining()
                    ),
                    MessageStyle::Info,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        self.session.new_game();
        self.input.clear();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Tab => self.request_hint(),
            KeyCode::Char('k' | 'K') if self.session.state() == GameState::Lost => {
                self.keep_trying();
            }
            KeyCode::Char(c) => self.type_letter(c),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only key presses; Windows also reports releases
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
