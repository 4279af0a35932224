//! TUI application state and logic

use crate::game::{GameSession, GameStatus, GuessError};
use crate::stats::StatsStore;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long a transient advisory stays on screen
pub const ADVISORY_TTL: Duration = Duration::from_secs(2);

/// A short message shown to the player
///
/// Transient advisories carry a dismissal deadline; sticky ones (win and
/// loss banners) have none. Every advisory is tagged with the session
/// generation it was scheduled in, so a pending dismissal from a previous
/// game can never touch a fresh one.
#[derive(Debug, Clone)]
pub struct Advisory {
    pub text: String,
    pub style: AdvisoryStyle,
    deadline: Option<Instant>,
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvisoryStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<'a, R: Rng, S: StatsStore> {
    pub session: GameSession<'a, R, S>,
    pub advisory: Option<Advisory>,
    pub should_quit: bool,
    generation: u64,
}

impl<'a, R: Rng, S: StatsStore> App<'a, R, S> {
    #[must_use]
    pub fn new(session: GameSession<'a, R, S>) -> Self {
        Self {
            session,
            advisory: None,
            should_quit: false,
            generation: 0,
        }
    }

    /// Drop the advisory once its deadline passes or its session is gone
    pub fn tick(&mut self, now: Instant) {
        if let Some(advisory) = &self.advisory
            && (advisory.generation != self.generation
                || advisory.deadline.is_some_and(|deadline| now >= deadline))
        {
            self.advisory = None;
        }
    }

    /// Show a transient advisory that auto-dismisses after [`ADVISORY_TTL`]
    pub fn show_advisory(&mut self, text: &str, style: AdvisoryStyle, now: Instant) {
        self.advisory = Some(Advisory {
            text: text.to_string(),
            style,
            deadline: Some(now + ADVISORY_TTL),
            generation: self.generation,
        });
    }

    /// Show an advisory that stays until superseded
    pub fn show_sticky(&mut self, text: &str, style: AdvisoryStyle) {
        self.advisory = Some(Advisory {
            text: text.to_string(),
            style,
            deadline: None,
            generation: self.generation,
        });
    }

    /// Start a fresh game, invalidating anything scheduled by the old one
    pub fn new_game(&mut self) {
        self.generation += 1;
        self.advisory = None;
        self.session.start_new_game();
    }

    /// Process one key event
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers, now: Instant) {
        if let KeyCode::Char('c') = code
            && modifiers.contains(KeyModifiers::CONTROL)
        {
            self.should_quit = true;
            return;
        }

        match self.session.status() {
            GameStatus::Playing => match code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) if c.is_ascii_alphabetic() => self.session.append_letter(c),
                KeyCode::Backspace => self.session.delete_letter(),
                KeyCode::Enter => self.commit(now),
                _ => {}
            },
            GameStatus::Won | GameStatus::Lost => match code {
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Enter | KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
        }
    }

    fn commit(&mut self, now: Instant) {
        match self.session.commit_guess() {
            Err(GuessError::GameOver) => {}
            Err(err) => self.show_advisory(&err.to_string(), AdvisoryStyle::Error, now),
            Ok(()) => match self.session.status() {
                GameStatus::Playing => {}
                GameStatus::Won => {
                    let celebration = match self.session.current_row() + 1 {
                        1 => "🏆 Genius!",
                        2 => "⭐ Magnificent!",
                        3 => "💫 Impressive!",
                        4 => "✨ Splendid!",
                        5 => "👍 Great!",
                        _ => "✓ Phew!",
                    };
                    self.show_sticky(
                        &format!("{celebration} Press Enter for a new game, 'q' to quit."),
                        AdvisoryStyle::Success,
                    );
                }
                GameStatus::Lost => {
                    self.show_sticky(
                        &format!(
                            "The word was {}. Press Enter for a new game, 'q' to quit.",
                            self.session.solution().text().to_uppercase()
                        ),
                        AdvisoryStyle::Error,
                    );
                }
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng, S: StatsStore>(app: App<'_, R, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
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

fn run_app<B: ratatui::backend::Backend, R: Rng, S: StatsStore>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, R, S>,
) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code, key.modifiers, Instant::now());
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
