//! bumpify - bump a vendored submodule and open a tracked pull request
//!
//! Library crate behind the `bumpify` binary. The [`bump`] module holds the
//! orchestrator; everything it talks to sits behind a trait so the workflow
//! can run against GitHub and real `git`, or against test doubles.

pub mod bump;
pub mod config;
pub mod error;
pub mod notes;
pub mod platform;
pub mod types;
pub mod vcs;
pub mod workspace;
