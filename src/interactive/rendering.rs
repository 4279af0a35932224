//! TUI rendering with ratatui
//!
//! Draws the board grid, the hint-colored keyboard, and the status line.

use super::app::{Advisory, AdvisoryStyle, App};
use crate::core::{LetterEval, LetterState, MAX_GUESSES};
use crate::game::GameStatus;
use crate::stats::StatsStore;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui<R: Rng, S: StatsStore>(f: &mut Frame, app: &App<'_, R, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(MAX_GUESSES as u16 + 2), // Board
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Advisory
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_advisory(f, app.advisory.as_ref(), chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
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

fn render_board<R: Rng, S: StatsStore>(f: &mut Frame, app: &App<'_, R, S>, area: Rect) {
    let lines: Vec<Line> = (0..MAX_GUESSES)
        .map(|row| {
            let cells = app.session.visible_row(row);
            let spans: Vec<Span> = cells
                .iter()
                .flat_map(|cell| [cell_span(cell), Span::raw(" ")])
                .collect();
            Line::from(spans)
        })
        .collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn cell_span(cell: &LetterEval) -> Span<'static> {
    let letter = cell
        .letter
        .map_or(' ', |c| c.to_ascii_uppercase());

    match cell.state {
        LetterState::Correct => Span::styled(
            format!(" {letter} "),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        LetterState::Present => Span::styled(
            format!(" {letter} "),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        LetterState::Absent => Span::styled(
            format!(" {letter} "),
            Style::default().fg(Color::White).bg(Color::DarkGray),
        ),
        LetterState::Empty => {
            if cell.letter.is_some() {
                Span::styled(
                    format!("[{letter}]"),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled("[ ]", Style::default().fg(Color::DarkGray))
            }
        }
    }
}

fn render_keyboard<R: Rng, S: StatsStore>(f: &mut Frame, app: &App<'_, R, S>, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|ch| [key_span(ch, app.session.hints().hint(ch)), Span::raw(" ")])
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(keyboard, area);
}

fn key_span(letter: char, hint: Option<LetterState>) -> Span<'static> {
    let text = letter.to_ascii_uppercase().to_string();

    let style = match hint {
        Some(LetterState::Correct) => Style::default().fg(Color::Black).bg(Color::Green),
        Some(LetterState::Present) => Style::default().fg(Color::Black).bg(Color::Yellow),
        Some(LetterState::Absent) => Style::default().fg(Color::DarkGray),
        _ => Style::default().fg(Color::White),
    };

    Span::styled(text, style)
}

fn render_advisory(f: &mut Frame, advisory: Option<&Advisory>, area: Rect) {
    let (text, color) = match advisory {
        Some(advisory) => {
            let color = match advisory.style {
                AdvisoryStyle::Info => Color::White,
                AdvisoryStyle::Success => Color::Green,
                AdvisoryStyle::Error => Color::Red,
            };
            (advisory.text.clone(), color)
        }
        None => (String::new(), Color::DarkGray),
    };

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );

    f.render_widget(paragraph, area);
}

fn render_status<R: Rng, S: StatsStore>(f: &mut Frame, app: &App<'_, R, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(area);

    let mode_text = match app.session.status() {
        GameStatus::Playing => format!(
            "Guess {}/{}",
            app.session.current_row() + 1,
            MAX_GUESSES
        ),
        GameStatus::Won => "Won!".to_string(),
        GameStatus::Lost => "Lost".to_string(),
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats = app.session.stats();
    let stats_text = format!(
        "Played: {} | Win rate: {:.0}% | Streak: {} (max {})",
        stats.games_played,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak
    );
    let stats_widget = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats_widget, chunks[1]);

    let help_text = match app.session.status() {
        GameStatus::Playing => "Type a word | Enter: Submit | Esc: Quit",
        GameStatus::Won | GameStatus::Lost => "Enter/n: New Game | q/Esc: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
