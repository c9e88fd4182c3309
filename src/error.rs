//! Error types for bumpify

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while bumping a submodule
#[derive(Debug, Error)]
pub enum Error {
    /// GitHub API call failed
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// The platform answered, but not with something usable
    #[error("platform error: {0}")]
    Platform(String),

    /// A git command exited unsuccessfully
    #[error("`git {command}` failed: {stderr}")]
    Git {
        /// Arguments passed to git, space separated
        command: String,
        /// Captured standard error
        stderr: String,
    },

    /// An external program could not be started
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        /// Program name
        program: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Release notes generation failed
    #[error("release notes generation failed: {0}")]
    Notes(String),

    /// Working directory could not be prepared
    #[error("working directory {}: {source}", .path.display())]
    Workspace {
        /// Directory that was being prepared
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Unexpected internal state
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        Self::GitHubApi(err.to_string())
    }
}

/// Result alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
