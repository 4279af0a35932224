//! Formatting utilities for terminal output

use crate::core::{LetterEval, LetterState, WORD_LENGTH};
use colored::Colorize;

/// Format an evaluated row as an emoji string
#[must_use]
pub fn row_to_emoji(cells: &[LetterEval; WORD_LENGTH]) -> String {
    let mut result = String::with_capacity(WORD_LENGTH);

    for cell in cells {
        result.push(match cell.state {
            LetterState::Correct => '🟩',
            LetterState::Present => '🟨',
            LetterState::Absent => '⬛',
            LetterState::Empty => '⬜',
        });
    }

    result
}

/// Format an evaluated row as colored uppercase letters
#[must_use]
pub fn row_colored(cells: &[LetterEval; WORD_LENGTH]) -> String {
    cells
        .iter()
        .map(|cell| {
            let letter = cell.letter.map_or(' ', |c| c.to_ascii_uppercase());
            let text = format!(" {letter} ");
            match cell.state {
                LetterState::Correct => text.black().on_green().to_string(),
                LetterState::Present => text.black().on_yellow().to_string(),
                LetterState::Absent => text.white().on_bright_black().to_string(),
                LetterState::Empty => format!("[{letter}]"),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a single keyboard key according to its hint
#[must_use]
pub fn key_colored(letter: char, hint: Option<LetterState>) -> String {
    let text = letter.to_ascii_uppercase().to_string();
    match hint {
        Some(LetterState::Correct) => text.black().on_green().to_string(),
        Some(LetterState::Present) => text.black().on_yellow().to_string(),
        Some(LetterState::Absent) => text.bright_black().to_string(),
        _ => text.white().to_string(),
    }
}
