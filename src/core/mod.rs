//! Core domain types for the game
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod evaluation;
mod word;

pub use evaluation::{Evaluation, LetterEval, LetterState};
pub use word::{Word, WordError};

/// Number of letters in every guess and solution
pub const WORD_LENGTH: usize = 5;

/// Number of guesses a player gets before the game is lost
pub const MAX_GUESSES: usize = 6;
