//! `git` command-line backend

use crate::error::{Error, Result};
use crate::vcs::GitBackend;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Runs the `git` executable found on `PATH`
#[derive(Debug, Clone, Copy, Default)]
pub struct GitCli;

const GIT: &str = "git";

impl GitCli {
    async fn run(cwd: &Path, args: &[&str]) -> Result<String> {
        let command = args.join(" ");
        debug!(cwd = %cwd.display(), "git {command}");

        let output = Command::new(GIT)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| Error::Spawn {
                program: GIT.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::Git {
                command,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait]
impl GitBackend for GitCli {
    async fn clone_recursive(&self, url: &str, dest: &Path, remote: &str) -> Result<()> {
        let parent = dest
            .parent()
            .ok_or_else(|| Error::Internal(format!("no parent for {}", dest.display())))?;
        let dest_str = dest.to_string_lossy().into_owned();
        Self::run(
            parent,
            &["clone", "--recursive", "--origin", remote, url, dest_str.as_str()],
        )
        .await?;
        Ok(())
    }

    async fn checkout(&self, repo: &Path, rev: &str) -> Result<()> {
        Self::run(repo, &["checkout", rev]).await?;
        Ok(())
    }

    async fn checkout_new_branch(&self, repo: &Path, branch: &str) -> Result<()> {
        Self::run(repo, &["checkout", "-b", branch]).await?;
        Ok(())
    }

    async fn submodule_update(&self, repo: &Path) -> Result<()> {
        Self::run(repo, &["submodule", "update", "--init", "--recursive"])
            .await?;
        Ok(())
    }

    async fn head_revision(&self, repo: &Path) -> Result<String> {
        let stdout = Self::run(repo, &["log", "-n", "1", "--format=%H"]).await?;
        let revision = stdout.trim();
        if revision.is_empty() {
            return Err(Error::Git {
                command: "log -n 1 --format=%H".to_string(),
                stderr: format!("no commits in {}", repo.display()),
            });
        }
        Ok(revision.to_string())
    }

    async fn add(&self, repo: &Path, path: &str) -> Result<()> {
        Self::run(repo, &["add", path]).await?;
        Ok(())
    }

    async fn commit(&self, repo: &Path, message: &str) -> Result<()> {
        // An unchanged pin still gets its commit and PR.
        Self::run(repo, &["commit", "--allow-empty", "-m", message]).await?;
        Ok(())
    }

    async fn push(&self, repo: &Path, remote: &str, branch: &str) -> Result<()> {
        Self::run(repo, &["push", remote, branch]).await?;
        Ok(())
    }
}
