//! Submodule bump orchestration
//!
//! Runs the fixed sequence of steps that turns a new submodule revision into
//! a tracked pull request:
//! 1. Prepare the working directory and file the tracking issue
//! 2. Clone, check out the target branch and capture the pinned revision
//! 3. Branch, move the submodule to the source tip and capture it
//! 4. Generate release notes, commit, push and open the pull request
//!
//! Local state is always cleaned up. Remote state is never rolled back.

mod execute;
mod naming;
mod progress;

pub use execute::{BumpResult, BumpState, CLEANUP_NOTICE, run_bump};
pub use naming::{
    DRY_RUN_ISSUE_NUMBER, ISSUE_BODY, ISSUE_LABELS, branch_name, commit_message, dry_run_branch,
    issue_title, pr_body, pr_title, tracking_reference,
};
pub use progress::{NoopProgress, ProgressCallback, RevisionKind, Stage};
