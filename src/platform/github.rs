//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{Issue, PlatformConfig, PullRequest};
use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::debug;

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
    config: PlatformConfig,
}

impl GitHubService {
    /// Create a new GitHub service authenticated with a personal token
    pub fn new(token: &str, config: PlatformConfig) -> Result<Self> {
        let client = Octocrab::builder()
            .personal_token(token.to_string())
            .build()
            .map_err(|e| Error::GitHubApi(e.to_string()))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl PlatformService for GitHubService {
    async fn create_issue(&self, title: &str, body: &str, labels: &[String]) -> Result<Issue> {
        debug!(repo = %self.config.slug(), title, "creating issue");

        let issue = self
            .client
            .issues(&self.config.owner, &self.config.repo)
            .create(title)
            .body(body)
            .labels(labels.to_vec())
            .send()
            .await?;

        Ok(Issue {
            number: issue.number,
            html_url: issue.html_url.to_string(),
            title: issue.title,
        })
    }

    async fn create_pr(
        &self,
        head: &str,
        base: &str,
        title: &str,
        body: &str,
    ) -> Result<PullRequest> {
        debug!(repo = %self.config.slug(), head, base, "creating pull request");

        let pr = self
            .client
            .pulls(&self.config.owner, &self.config.repo)
            .create(title, head, base)
            .body(body)
            .send()
            .await?;

        Ok(PullRequest {
            number: pr.number,
            html_url: required_field(pr.html_url.as_ref(), "html_url", pr.number)?,
            base_ref: pr.base.ref_field.clone(),
            head_ref: pr.head.ref_field.clone(),
            title: pr.title.as_deref().unwrap_or_default().to_string(),
        })
    }

    fn config(&self) -> &PlatformConfig {
        &self.config
    }
}

/// A field GitHub documents as optional but the workflow cannot do without
fn required_field<T: ToString>(value: Option<T>, field: &str, number: u64) -> Result<String> {
    value
        .map(|v| v.to_string())
        .ok_or_else(|| Error::Platform(format!("pull request #{number} has no {field}")))
}
