//! Stats persistence
//!
//! The store is deliberately forgiving: missing or malformed data loads as
//! `None` (the caller falls back to zeroed stats) and a failed write never
//! surfaces to the player.

use super::GameStats;
use anyhow::{Context, Result};
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

/// Where finished-game statistics are kept between runs
pub trait StatsStore {
    /// Load previously saved stats, or `None` if absent or unreadable
    fn load(&self) -> Option<GameStats>;

    /// Persist the current stats
    ///
    /// # Errors
    /// Returns an error if the stats cannot be written.
    fn save(&self, stats: &GameStats) -> Result<()>;
}

/// JSON file backed store
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl StatsStore for FileStore {
    fn load(&self) -> Option<GameStats> {
        let content = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&content).ok()
    }

    fn save(&self, stats: &GameStats) -> Result<()> {
        let json = serde_json::to_string_pretty(stats)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write stats to {}", self.path.display()))
    }
}

/// In-memory store, used by tests and by callers that opt out of persistence
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<GameStats>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatsStore for MemoryStore {
    fn load(&self) -> Option<GameStats> {
        *self.slot.borrow()
    }

    fn save(&self, stats: &GameStats) -> Result<()> {
        *self.slot.borrow_mut() = Some(*stats);
        Ok(())
    }
}
