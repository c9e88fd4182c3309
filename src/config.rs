//! Run configuration
//!
//! A [`RunConfig`] is captured once at startup and only ever shared by
//! reference afterwards.

use crate::error::{Error, Result};
use crate::types::PlatformConfig;
use std::fmt;
use std::path::PathBuf;

/// Default repository owner
pub const DEFAULT_OWNER: &str = "rcbops";
/// Default acting user, used as the branch namespace
pub const DEFAULT_USER: &str = "alextricity25";
/// Default outer repository name
pub const DEFAULT_REPO: &str = "rpc-openstack";
/// Default path of the vendored submodule inside the outer repository
pub const DEFAULT_SUBMODULE: &str = "openstack-ansible";
/// Default remote name
pub const DEFAULT_REMOTE: &str = "origin";
/// Remote name `git submodule update` gives every submodule clone
pub const SUBMODULE_REMOTE: &str = "origin";

/// Configuration for a single bump run
#[derive(Clone)]
pub struct RunConfig {
    /// Repository owner
    pub owner: String,
    /// Acting user, used only for branch naming
    pub user: String,
    /// GitHub token
    pub token: String,
    /// Source branch of the submodule whose tip gets pinned
    pub osa_branch: String,
    /// Target branch of the outer repository
    pub rpco_branch: String,
    /// Smoke run: no remote side effects
    pub dry_run: bool,
    /// Outer repository name
    pub repo: String,
    /// Submodule path relative to the outer repository root
    pub submodule: String,
    /// Name of the outer repository's remote, used for cloning and pushing
    pub remote: String,
    /// Scratch directory owned by this run
    pub working_dir: PathBuf,
    /// Clone URL override (defaults to the GitHub SSH URL)
    pub clone_url: Option<String>,
}

impl RunConfig {
    /// Create a configuration with defaults for everything optional
    pub fn new(
        token: impl Into<String>,
        osa_branch: impl Into<String>,
        rpco_branch: impl Into<String>,
    ) -> Self {
        Self {
            owner: DEFAULT_OWNER.to_string(),
            user: DEFAULT_USER.to_string(),
            token: token.into(),
            osa_branch: osa_branch.into(),
            rpco_branch: rpco_branch.into(),
            dry_run: false,
            repo: DEFAULT_REPO.to_string(),
            submodule: DEFAULT_SUBMODULE.to_string(),
            remote: DEFAULT_REMOTE.to_string(),
            working_dir: default_working_dir(),
            clone_url: None,
        }
    }

    /// Check that required fields are present
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("owner", &self.owner),
            ("user", &self.user),
            ("github token", &self.token),
            ("osa branch", &self.osa_branch),
            ("rpco branch", &self.rpco_branch),
            ("repo", &self.repo),
            ("submodule", &self.submodule),
            ("remote", &self.remote),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(Error::Config(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }

    /// Repository coordinates for the platform client
    pub fn platform_config(&self) -> PlatformConfig {
        PlatformConfig {
            owner: self.owner.clone(),
            repo: self.repo.clone(),
        }
    }

    /// URL the outer repository is cloned from
    pub fn clone_url(&self) -> String {
        self.clone_url
            .clone()
            .unwrap_or_else(|| format!("git@github.com:{}/{}.git", self.owner, self.repo))
    }

    /// Remote-tracking ref of the source branch inside the submodule
    pub fn source_ref(&self) -> String {
        format!("{SUBMODULE_REMOTE}/{}", self.osa_branch)
    }

    /// Where the outer repository is checked out
    pub fn outer_repo_dir(&self) -> PathBuf {
        self.working_dir.join(&self.repo)
    }

    /// Where the submodule is checked out
    pub fn submodule_dir(&self) -> PathBuf {
        self.outer_repo_dir().join(&self.submodule)
    }

    /// Scratch space for the release notes tool
    pub fn notes_cache_dir(&self) -> PathBuf {
        self.working_dir.join("osa-differ")
    }
}

// Keep the token out of logs.
impl fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunConfig")
            .field("owner", &self.owner)
            .field("user", &self.user)
            .field("token", &"<redacted>")
            .field("osa_branch", &self.osa_branch)
            .field("rpco_branch", &self.rpco_branch)
            .field("dry_run", &self.dry_run)
            .field("repo", &self.repo)
            .field("submodule", &self.submodule)
            .field("remote", &self.remote)
            .field("working_dir", &self.working_dir)
            .field("clone_url", &self.clone_url)
            .finish()
    }
}

/// Default scratch directory: `<tmp>/bumpify`
pub fn default_working_dir() -> PathBuf {
    std::env::temp_dir().join("bumpify")
}
