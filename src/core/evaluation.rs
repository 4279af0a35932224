//! Guess evaluation
//!
//! Scores a guess against the hidden solution cell by cell:
//! - `Correct` = right letter, right position
//! - `Present` = letter occurs elsewhere in the solution
//! - `Absent` = letter does not occur (or no unmatched occurrence remains)
//! - `Empty` = no letter entered yet
//!
//! Duplicate letters are handled with the standard frequency rule: a letter
//! is only credited as many times as it occurs in the solution, exact matches
//! first, then remaining positions left to right.

use super::WORD_LENGTH;
use rustc_hash::FxHashMap;

/// Feedback state of a single board cell or keyboard key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterState {
    Correct,
    Present,
    Absent,
    Empty,
}

impl LetterState {
    /// Ordering used when merging keyboard hints: a higher rank is never
    /// replaced by a lower one.
    #[inline]
    #[must_use]
    pub(crate) const fn rank(self) -> u8 {
        match self {
            Self::Correct => 3,
            Self::Present => 2,
            Self::Absent => 1,
            Self::Empty => 0,
        }
    }
}

/// One evaluated (or not-yet-filled) board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterEval {
    pub letter: Option<char>,
    pub state: LetterState,
}

impl LetterEval {
    /// An unfilled cell
    pub const EMPTY: Self = Self {
        letter: None,
        state: LetterState::Empty,
    };
}

/// Full evaluation of one guess row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    cells: [LetterEval; WORD_LENGTH],
    is_correct: bool,
}

impl Evaluation {
    /// Score `guess` against `solution`
    ///
    /// Both inputs are trimmed and lowercased first. If either is not exactly
    /// `WORD_LENGTH` characters the result is all `Empty` cells carrying the
    /// guess's available letters and `is_correct` is false; validated callers
    /// never hit that path.
    ///
    /// This is a pure function: identical inputs always produce identical
    /// output.
    ///
    /// # Examples
    /// ```
    /// use wordle_play::core::{Evaluation, LetterState};
    ///
    /// let eval = Evaluation::score("crane", "crane");
    /// assert!(eval.is_correct());
    /// assert!(
    ///     eval.cells()
    ///         .iter()
    ///         .all(|c| c.state == LetterState::Correct)
    /// );
    /// ```
    #[must_use]
    pub fn score(guess: &str, solution: &str) -> Self {
        let guess = guess.trim().to_lowercase();
        let solution = solution.trim().to_lowercase();

        let guess_chars: Vec<char> = guess.chars().collect();
        let solution_chars: Vec<char> = solution.chars().collect();

        if guess_chars.len() != WORD_LENGTH || solution_chars.len() != WORD_LENGTH {
            // Defensive no-op path for unvalidated input
            let mut cells = [LetterEval::EMPTY; WORD_LENGTH];
            for (cell, &ch) in cells.iter_mut().zip(guess_chars.iter()) {
                cell.letter = Some(ch);
            }
            return Self {
                cells,
                is_correct: false,
            };
        }

        let mut remaining: FxHashMap<char, u8> = FxHashMap::default();
        for &ch in &solution_chars {
            *remaining.entry(ch).or_insert(0) += 1;
        }

        let mut cells = [LetterEval::EMPTY; WORD_LENGTH];

        // First pass: exact matches consume from the letter pool
        // Allow: Index needed to compare guess[i] against solution[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            cells[i].letter = Some(guess_chars[i]);

            if guess_chars[i] == solution_chars[i] {
                cells[i].state = LetterState::Correct;

                if let Some(count) = remaining.get_mut(&guess_chars[i]) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: left to right, misplaced letters while the pool lasts
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if cells[i].state == LetterState::Correct {
                continue;
            }

            if let Some(count) = remaining.get_mut(&guess_chars[i])
                && *count > 0
            {
                cells[i].state = LetterState::Present;
                *count -= 1;
            } else {
                cells[i].state = LetterState::Absent;
            }
        }

        let is_correct = cells.iter().all(|c| c.state == LetterState::Correct);

        Self { cells, is_correct }
    }

    /// An unevaluated all-`Empty` row
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [LetterEval::EMPTY; WORD_LENGTH],
            is_correct: false,
        }
    }

    /// The per-position cell states
    #[inline]
    #[must_use]
    pub const fn cells(&self) -> &[LetterEval; WORD_LENGTH] {
        &self.cells
    }

    /// Whether every cell matched exactly
    #[inline]
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        self.is_correct
    }
}
