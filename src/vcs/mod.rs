//! Version-control backend
//!
//! Every operation is scoped to an explicit directory; nothing depends on the
//! process working directory.

mod git;

pub use git::GitCli;

use crate::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Git operations used by the bump workflow
#[async_trait]
pub trait GitBackend: Send + Sync {
    /// Clone `url` into `dest`, including submodules
    ///
    /// The outer repository's remote is named `remote`; submodules always get
    /// git's default `origin`.
    async fn clone_recursive(&self, url: &str, dest: &Path, remote: &str) -> Result<()>;

    /// Check out an existing branch or revision
    async fn checkout(&self, repo: &Path, rev: &str) -> Result<()>;

    /// Create `branch` at HEAD and switch to it
    async fn checkout_new_branch(&self, repo: &Path, branch: &str) -> Result<()>;

    /// Bring submodule checkouts in line with the recorded pins
    async fn submodule_update(&self, repo: &Path) -> Result<()>;

    /// Full identifier of the most recent commit
    async fn head_revision(&self, repo: &Path) -> Result<String>;

    /// Stage a path
    async fn add(&self, repo: &Path, path: &str) -> Result<()>;

    /// Commit staged changes
    async fn commit(&self, repo: &Path, message: &str) -> Result<()>;

    /// Push `branch` to `remote`
    async fn push(&self, repo: &Path, remote: &str, branch: &str) -> Result<()>;
}
