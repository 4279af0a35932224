//! Keyboard hint aggregation
//!
//! Tracks, per letter, the best feedback seen across every committed guess in
//! the current session. The on-screen keyboard colors itself from this map.

use crate::core::{Evaluation, LetterState};

const ALPHABET: usize = 26;

/// Best observed `LetterState` per letter a-z
///
/// Invariant: a hint is never downgraded. `Correct` is final, and `Present`
/// never regresses to `Absent`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardHints {
    best: [Option<LetterState>; ALPHABET],
}

impl KeyboardHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a committed evaluation into the hint map
    pub fn absorb(&mut self, evaluation: &Evaluation) {
        for cell in evaluation.cells() {
            if let Some(letter) = cell.letter
                && cell.state != LetterState::Empty
            {
                self.merge(letter, cell.state);
            }
        }
    }

    /// The best state seen so far for `letter`, or `None` if never guessed
    ///
    /// Accepts either case; non-alphabetic input has no hint.
    #[must_use]
    pub fn hint(&self, letter: char) -> Option<LetterState> {
        let lower = letter.to_ascii_lowercase();
        if lower.is_ascii_lowercase() {
            self.best[(lower as u8 - b'a') as usize]
        } else {
            None
        }
    }

    fn merge(&mut self, letter: char, state: LetterState) {
        let lower = letter.to_ascii_lowercase();
        if !lower.is_ascii_lowercase() {
            return;
        }

        let slot = &mut self.best[(lower as u8 - b'a') as usize];
        match slot {
            Some(current) if current.rank() >= state.rank() => {}
            _ => *slot = Some(state),
        }
    }
}
