//! Mock git backend for testing

#![allow(dead_code)]

use async_trait::async_trait;
use bumpify::error::{Error, Result};
use bumpify::vcs::GitBackend;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Which git operation a call was
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitOp {
    Clone,
    Checkout,
    NewBranch,
    SubmoduleUpdate,
    HeadRevision,
    Add,
    Commit,
    Push,
}

/// Recorded git call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCall {
    Clone { url: String, dest: PathBuf, remote: String },
    Checkout { repo: PathBuf, rev: String },
    NewBranch { repo: PathBuf, branch: String },
    SubmoduleUpdate { repo: PathBuf },
    HeadRevision { repo: PathBuf },
    Add { repo: PathBuf, path: String },
    Commit { repo: PathBuf, message: String },
    Push { repo: PathBuf, remote: String, branch: String },
}

impl GitCall {
    pub const fn op(&self) -> GitOp {
        match self {
            Self::Clone { .. } => GitOp::Clone,
            Self::Checkout { .. } => GitOp::Checkout,
            Self::NewBranch { .. } => GitOp::NewBranch,
            Self::SubmoduleUpdate { .. } => GitOp::SubmoduleUpdate,
            Self::HeadRevision { .. } => GitOp::HeadRevision,
            Self::Add { .. } => GitOp::Add,
            Self::Commit { .. } => GitOp::Commit,
            Self::Push { .. } => GitOp::Push,
        }
    }
}

/// Git backend that records calls and hands out scripted revisions
///
/// `clone_recursive` creates the destination directory (with a marker file)
/// so cleanup has something real to remove.
pub struct MockGit {
    calls: Mutex<Vec<GitCall>>,
    revisions: Mutex<VecDeque<String>>,
    fail_on: Mutex<Option<(GitOp, String)>>,
}

impl MockGit {
    /// `head_revision` returns `revisions` in order
    pub fn with_revisions(revisions: &[&str]) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            revisions: Mutex::new(revisions.iter().map(ToString::to_string).collect()),
            fail_on: Mutex::new(None),
        }
    }

    /// Make every call of `op` fail with `stderr`
    pub fn fail_on(&self, op: GitOp, stderr: &str) {
        *self.fail_on.lock().unwrap() = Some((op, stderr.to_string()));
    }

    pub fn get_calls(&self) -> Vec<GitCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn get_ops(&self) -> Vec<GitOp> {
        self.get_calls().iter().map(GitCall::op).collect()
    }

    pub fn count(&self, op: GitOp) -> usize {
        self.get_ops().iter().filter(|o| **o == op).count()
    }

    fn record(&self, call: GitCall) -> Result<()> {
        let op = call.op();
        self.calls.lock().unwrap().push(call);
        match self.fail_on.lock().unwrap().as_ref() {
            Some((failing, stderr)) if *failing == op => Err(Error::Git {
                command: format!("{op:?}").to_lowercase(),
                stderr: stderr.clone(),
            }),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl GitBackend for MockGit {
    async fn clone_recursive(&self, url: &str, dest: &Path, remote: &str) -> Result<()> {
        self.record(GitCall::Clone {
            url: url.to_string(),
            dest: dest.to_path_buf(),
            remote: remote.to_string(),
        })?;
        std::fs::create_dir_all(dest).map_err(|e| Error::Internal(e.to_string()))?;
        std::fs::write(dest.join(".gitmodules"), "[submodule]\n")
            .map_err(|e| Error::Internal(e.to_string()))?;
        Ok(())
    }

    async fn checkout(&self, repo: &Path, rev: &str) -> Result<()> {
        self.record(GitCall::Checkout {
            repo: repo.to_path_buf(),
            rev: rev.to_string(),
        })
    }

    async fn checkout_new_branch(&self, repo: &Path, branch: &str) -> Result<()> {
        self.record(GitCall::NewBranch {
            repo: repo.to_path_buf(),
            branch: branch.to_string(),
        })
    }

    async fn submodule_update(&self, repo: &Path) -> Result<()> {
        self.record(GitCall::SubmoduleUpdate {
            repo: repo.to_path_buf(),
        })
    }

    async fn head_revision(&self, repo: &Path) -> Result<String> {
        self.record(GitCall::HeadRevision {
            repo: repo.to_path_buf(),
        })?;
        self.revisions
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Error::Internal("no scripted revision left".to_string()))
    }

    async fn add(&self, repo: &Path, path: &str) -> Result<()> {
        self.record(GitCall::Add {
            repo: repo.to_path_buf(),
            path: path.to_string(),
        })
    }

    async fn commit(&self, repo: &Path, message: &str) -> Result<()> {
        self.record(GitCall::Commit {
            repo: repo.to_path_buf(),
            message: message.to_string(),
        })
    }

    async fn push(&self, repo: &Path, remote: &str, branch: &str) -> Result<()> {
        self.record(GitCall::Push {
            repo: repo.to_path_buf(),
            remote: remote.to_string(),
            branch: branch.to_string(),
        })
    }
}
