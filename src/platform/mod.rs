//! Code-hosting platform services
//!
//! The orchestrator only needs two remote operations: file a tracking issue
//! and open a pull request. Both sit behind [`PlatformService`].

mod github;

pub use github::GitHubService;

use crate::error::Result;
use crate::types::{Issue, PlatformConfig, PullRequest};
use async_trait::async_trait;

/// Platform service trait for issue and PR operations
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// Create an issue with the given labels
    async fn create_issue(&self, title: &str, body: &str, labels: &[String]) -> Result<Issue>;

    /// Create a new PR from `head` into `base`
    async fn create_pr(&self, head: &str, base: &str, title: &str, body: &str)
    -> Result<PullRequest>;

    /// Get the platform configuration
    fn config(&self) -> &PlatformConfig;
}
