//! Progress callback trait for interface-agnostic updates
//!
//! The orchestrator reports each workflow step through [`ProgressCallback`];
//! the CLI prints them, tests record them.

use crate::error::Error;
use crate::types::{Issue, PullRequest};
use async_trait::async_trait;
use std::fmt;

/// Workflow step, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Creating the working directory
    PreparingWorkspace,
    /// Filing the tracking issue
    FilingIssue,
    /// Cloning the outer repository with submodules
    Cloning,
    /// Checking out the target branch
    CheckingOutBase,
    /// Syncing the submodule to the recorded pin
    SyncingSubmodule,
    /// Reading the currently pinned revision
    CapturingOldRevision,
    /// Creating the bump branch
    CreatingBranch,
    /// Moving the submodule to the source branch tip
    CheckingOutSource,
    /// Reading the new revision
    CapturingNewRevision,
    /// Generating release notes
    GeneratingNotes,
    /// Staging the submodule change
    Staging,
    /// Committing
    Committing,
    /// Pushing the bump branch
    Pushing,
    /// Opening the pull request
    CreatingPr,
    /// Removing the working directory
    CleaningUp,
    /// Workflow finished successfully
    Complete,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::PreparingWorkspace => "Preparing working directory",
            Self::FilingIssue => "Creating tracking issue",
            Self::Cloning => "Cloning repository",
            Self::CheckingOutBase => "Checking out target branch",
            Self::SyncingSubmodule => "Updating submodules",
            Self::CapturingOldRevision => "Reading pinned revision",
            Self::CreatingBranch => "Creating bump branch",
            Self::CheckingOutSource => "Checking out source branch",
            Self::CapturingNewRevision => "Reading new revision",
            Self::GeneratingNotes => "Generating release notes",
            Self::Staging => "Staging submodule",
            Self::Committing => "Committing",
            Self::Pushing => "Pushing branch",
            Self::CreatingPr => "Creating pull request",
            Self::CleaningUp => "Cleaning up",
            Self::Complete => "Done",
        };
        f.write_str(text)
    }
}

/// Which end of the bump a revision belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevisionKind {
    /// Pinned by the target branch
    Old,
    /// Tip of the source branch
    New,
}

/// Progress callback trait
///
/// Implement this trait to receive progress updates during a bump.
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when a step starts
    async fn on_stage(&self, stage: Stage);

    /// Called instead of `on_stage` for steps suppressed by a smoke run
    async fn on_stage_skipped(&self, stage: Stage);

    /// Called once the bump branch name is known
    async fn on_branch(&self, branch: &str);

    /// Called when the tracking issue exists
    async fn on_issue_created(&self, issue: &Issue);

    /// Called when a submodule revision has been read
    async fn on_revision(&self, kind: RevisionKind, revision: &str);

    /// Called when the pull request exists
    async fn on_pr_created(&self, pr: &PullRequest);

    /// Called when the workflow aborts
    async fn on_error(&self, error: &Error);

    /// Called with a general status message
    async fn on_message(&self, message: &str);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_stage(&self, _stage: Stage) {}
    async fn on_stage_skipped(&self, _stage: Stage) {}
    async fn on_branch(&self, _branch: &str) {}
    async fn on_issue_created(&self, _issue: &Issue) {}
    async fn on_revision(&self, _kind: RevisionKind, _revision: &str) {}
    async fn on_pr_created(&self, _pr: &PullRequest) {}
    async fn on_error(&self, _error: &Error) {}
    async fn on_message(&self, _message: &str) {}
}
