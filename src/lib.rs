//! Wordle Play
//!
//! A terminal Wordle game: six guesses at a hidden five-letter word, with a
//! colored board, keyboard hints, and streak statistics persisted between
//! runs.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_play::core::Evaluation;
//!
//! let eval = Evaluation::score("speed", "erase");
//! assert!(!eval.is_correct());
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Play statistics and persistence
pub mod stats;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
