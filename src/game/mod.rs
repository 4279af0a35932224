//! Game state machine
//!
//! The session drives the guess -> evaluate -> commit -> advance-or-end cycle
//! and owns everything a renderer needs to draw one game.

mod hints;
mod session;

pub use hints::KeyboardHints;
pub use session::{Board, GameSession, GameStatus, GuessError};
