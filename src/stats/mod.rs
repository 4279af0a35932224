//! Play statistics
//!
//! Win/loss totals and streaks, persisted across sessions through a
//! [`StatsStore`].

mod store;

pub use store::{FileStore, MemoryStore, StatsStore};

use serde::{Deserialize, Serialize};

/// Accumulated statistics across finished games
///
/// `games_won <= games_played` always holds; `max_streak` is the running
/// maximum of `current_streak`. Every field defaults to zero so a persisted
/// record with missing fields still loads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameStats {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
}

impl GameStats {
    /// Record one finished game
    pub fn record(&mut self, won: bool) {
        self.games_played += 1;

        if won {
            self.games_won += 1;
            self.current_streak += 1;
            self.max_streak = self.max_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }
    }

    /// Percentage of games won (0.0 when nothing has been played)
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            f64::from(self.games_won) / f64::from(self.games_played) * 100.0
        }
    }
}
