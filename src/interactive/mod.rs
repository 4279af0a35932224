//! Interactive TUI interface

pub mod app;
pub mod rendering;

pub use app::{ADVISORY_TTL, Advisory, AdvisoryStyle, App, run_tui};
