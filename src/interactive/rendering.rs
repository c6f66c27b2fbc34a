//! TUI rendering with ratatui
//!
//! Board, keyboard and game status panels.

use super::app::{App, MessageStyle};
use crate::core::{Mark, WORD_LEN};
use crate::game::GameState;
use crate::output::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_play_area(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("😈 ADVERSARIAL WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_play_area(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(5)])
        .split(area);

    render_board(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

fn mark_style(mark: Mark) -> Style {
    match mark {
        Mark::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Mark::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Mark::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn tile(letter: char, style: Style) -> [Span<'static>; 2] {
    [
        Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style),
        Span::raw(" "),
    ]
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let empty = Style::default().fg(Color::DarkGray);
    let typing = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::with_capacity(session.max_rows());
    for row in 0..session.max_rows() {
        let spans: Vec<Span> = if let Some(turn) = session.history().get(row) {
            turn.tiles()
                .iter()
                .flat_map(|&(letter, mark)| tile(char::from(letter), mark_style(mark)))
                .collect()
        } else if row == session.row() && session.state() == GameState::InProgress {
            let mut letters = app.input.chars();
            (0..WORD_LEN)
                .flat_map(|_| match letters.next() {
                    Some(c) => tile(c, typing),
                    None => tile('_', empty),
                })
                .collect()
        } else {
            (0..WORD_LEN).flat_map(|_| tile('·', empty)).collect()
        };
        lines.push(Line::from(spans));
    }

    let title = format!(
        " Row {}/{} ",
        session.row().min(session.max_rows()),
        session.max_rows()
    );
    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let letters = app.session.letters();
    let unplayed = Style::default().fg(Color::White);

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .flat_map(|letter| {
                    let style = letters.get(letter).map_or(unplayed, mark_style);
                    tile(char::from(letter), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Candidate gauge
            Constraint::Min(5),    // Messages
            Constraint::Length(5), // Stats
        ])
        .split(area);

    render_candidates(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
    render_stats(f, app, chunks[2]);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let total = app.session.dictionary().solutions().len().max(1);
    let remaining = app.session.remaining();
    let ratio = (remaining as f64 / total as f64).clamp(0.0, 1.0);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Candidates ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Magenta))
        .ratio(ratio)
        .label(format!("{remaining}/{total} words still fit"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let distribution: Vec<Span> = stats
        .row_distribution
        .iter()
        .enumerate()
        .skip(1)
        .map(|(row, count)| Span::raw(format!("{row}:{count} ")))
        .collect();

    let content = vec![
        Line::from(format!(
            "Games: {} | Won: {} | Win Rate: {:.0}%",
            stats.total_games,
            stats.games_won,
            stats.win_rate()
        )),
        Line::from(format!("Mode: {}", app.session.config().mode)),
        Line::from(distribution),
    ];

    let paragraph =
        Paragraph::new(content).block(Block::default().title(" Stats ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let (help_text, color) = match app.session.state() {
        GameState::InProgress => (
            "Enter: Submit | Backspace: Delete | Tab: Hint | Esc: Quit",
            Color::DarkGray,
        ),
        GameState::Won => ("🎉 Solved! | Enter: New Game | Esc: Quit", Color::Green),
        GameState::Lost => (
            "Out of rows | k: Keep Trying | Enter: New Game | Esc: Quit",
            Color::Red,
        ),
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}
