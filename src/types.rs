//! Core types for bumpify

use serde::{Deserialize, Serialize};

/// A tracking issue on the code-hosting platform
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Issue {
    /// Issue number
    pub number: u64,
    /// Web URL for the issue
    pub html_url: String,
    /// Issue title
    pub title: String,
}

/// A pull request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// Web URL for the PR
    pub html_url: String,
    /// Base branch name
    pub base_ref: String,
    /// Head branch name
    pub head_ref: String,
    /// PR title
    pub title: String,
}

/// Repository coordinates on the code-hosting platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
}

impl PlatformConfig {
    /// `owner/repo` form used in messages
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    /// Web URL of an issue in this repository
    pub fn issue_url(&self, number: u64) -> String {
        format!(
            "https://github.com/{}/{}/issues/{number}",
            self.owner, self.repo
        )
    }
}

/// Submodule revisions before and after the bump
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionPair {
    /// Revision pinned by the target branch
    pub old: String,
    /// Tip of the source branch
    pub new: String,
}

impl RevisionPair {
    /// True when the source branch tip is already pinned
    pub fn is_noop(&self) -> bool {
        self.old == self.new
    }
}
