//! Word lists for the game
//!
//! The practice list holds candidate solutions; the allowed set is the larger
//! dictionary a guess must belong to. Both are embedded at build time, with a
//! loader for custom practice lists.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, PRACTICE, PRACTICE_COUNT};

use crate::core::Word;
use anyhow::{Result, ensure};
use rustc_hash::FxHashSet;

/// Candidate solutions plus the guess-legality dictionary
///
/// The allowed set is built as the union of both inputs, so every practice
/// word is guessable by construction.
#[derive(Debug, Clone)]
pub struct WordLists {
    practice: Vec<Word>,
    allowed: FxHashSet<String>,
}

impl WordLists {
    /// Build from explicit lists
    ///
    /// # Errors
    /// Returns an error if the practice list is empty; a session cannot pick
    /// a solution from nothing.
    pub fn new(practice: Vec<Word>, allowed: Vec<Word>) -> Result<Self> {
        ensure!(!practice.is_empty(), "practice word list is empty");

        let allowed: FxHashSet<String> = allowed
            .iter()
            .chain(practice.iter())
            .map(|w| w.text().to_string())
            .collect();

        Ok(Self { practice, allowed })
    }

    /// The embedded lists compiled into the binary
    ///
    /// # Panics
    /// Will not panic - the embedded practice list is known to be non-empty.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(
            loader::words_from_slice(PRACTICE),
            loader::words_from_slice(ALLOWED),
        )
        .expect("embedded practice list is non-empty")
    }

    /// Candidate solutions
    #[must_use]
    pub fn practice(&self) -> &[Word] {
        &self.practice
    }

    /// Whether a normalized guess is a legal word
    #[must_use]
    pub fn is_allowed(&self, guess: &str) -> bool {
        self.allowed.contains(guess)
    }

    /// Size of the guess dictionary
    #[must_use]
    pub fn allowed_len(&self) -> usize {
        self.allowed.len()
    }
}
