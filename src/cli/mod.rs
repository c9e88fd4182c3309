//! CLI commands
//!
//! Command implementations for the `bumpify` binary.

mod bump;
mod progress;
mod style;

pub use bump::run_bump;
