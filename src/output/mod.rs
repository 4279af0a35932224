//! Terminal output formatting
//!
//! Display utilities for the plain CLI mode and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::print_stats;
pub use formatters::{key_colored, row_colored, row_to_emoji};
