//! CLI progress callback with styled output

use crate::cli::style::{Stream, Stylize, check, cross, dash, hyperlink_url};
use anstream::{eprintln, println};
use async_trait::async_trait;
use bumpify::bump::{ProgressCallback, RevisionKind, Stage};
use bumpify::error::Error;
use bumpify::types::{Issue, PullRequest};

/// Prints one line per workflow step to stdout, failures to stderr
pub struct CliProgress;

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_stage(&self, stage: Stage) {
        match stage {
            Stage::Complete => println!("{} {}", check(), stage.to_string().emphasis()),
            _ => println!("{}...", stage.to_string().emphasis()),
        }
    }

    async fn on_stage_skipped(&self, stage: Stage) {
        println!(
            "{} {} {}",
            dash(),
            stage.to_string().muted(),
            "(smoke run, skipped)".warn().for_stdout()
        );
    }

    async fn on_branch(&self, branch: &str) {
        println!("  Bump branch: {}", branch.accent());
    }

    async fn on_issue_created(&self, issue: &Issue) {
        let number = format!("#{}", issue.number);
        println!("  {} Created issue {}", check(), number.accent());
        println!("    {}", hyperlink_url(Stream::Stdout, &issue.html_url));
    }

    async fn on_revision(&self, kind: RevisionKind, revision: &str) {
        let label = match kind {
            RevisionKind::Old => "pinned",
            RevisionKind::New => "new",
        };
        println!("  {} {}", label.muted(), revision.accent());
    }

    async fn on_pr_created(&self, pr: &PullRequest) {
        let number = format!("#{}", pr.number);
        println!(
            "  {} Created PR {} ({} → {})",
            check(),
            number.accent(),
            pr.head_ref.accent(),
            pr.base_ref.accent()
        );
        println!("    {}", hyperlink_url(Stream::Stdout, &pr.html_url));
    }

    async fn on_error(&self, err: &Error) {
        eprintln!("{} {}: {}", cross(), "error".error(), err);
    }

    async fn on_message(&self, message: &str) {
        println!("{message}");
    }
}
