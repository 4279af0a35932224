//! Command implementations
//!
//! Each CLI subcommand that is not the TUI lives here.

mod simple;

pub use simple::run_simple;
