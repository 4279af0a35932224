//! Word list loading utilities
//!
//! Loads custom word lists from files or converts the embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one word per line
///
/// Returns a vector of valid `Word` instances, skipping blank and invalid
/// lines.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_play::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/practice.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert an embedded string slice to a `Word` vector
///
/// # Examples
/// ```
/// use wordle_play::wordlists::{PRACTICE, loader::words_from_slice};
///
/// let words = words_from_slice(PRACTICE);
/// assert_eq!(words.len(), PRACTICE.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
