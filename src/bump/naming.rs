//! Branch names and issue/commit/PR text
//!
//! Pure functions so the exact strings can be checked without a network.

use crate::types::PlatformConfig;

/// Labels attached to every tracking issue
pub const ISSUE_LABELS: [&str; 3] = [
    "prio-expedited",
    "swimlane-enhancements",
    "status-needs-review-ready",
];

/// Body of every tracking issue
pub const ISSUE_BODY: &str = "It's that time again!";

/// Issue number used when no issue is filed
pub const DRY_RUN_ISSUE_NUMBER: u64 = 0;

/// Title of the tracking issue for a target branch
pub fn issue_title(rpco_branch: &str) -> String {
    format!("[{rpco_branch}] - Update OSA SHA")
}

/// Bump branch name: `<user>/issue/<number>/<target>`
pub fn branch_name(user: &str, issue_number: u64, rpco_branch: &str) -> String {
    format!("{user}/issue/{issue_number}/{rpco_branch}")
}

/// Fixed branch name for smoke runs
pub fn dry_run_branch(user: &str) -> String {
    format!("{user}/testing/bumpify")
}

/// Commit and PR title
pub fn pr_title(rpco_branch: &str) -> String {
    format!("[{rpco_branch}] Update OSA SHA")
}

/// Back-reference line linking work to its tracking issue
pub fn tracking_reference(platform: &PlatformConfig, issue_number: u64) -> String {
    format!("Connects {}", platform.issue_url(issue_number))
}

/// Commit message: title, blank line, issue back-reference
pub fn commit_message(rpco_branch: &str, platform: &PlatformConfig, issue_number: u64) -> String {
    format!(
        "{}\n\n{}",
        pr_title(rpco_branch),
        tracking_reference(platform, issue_number)
    )
}

/// PR body: issue back-reference followed by the release notes
pub fn pr_body(platform: &PlatformConfig, issue_number: u64, notes: &str) -> String {
    let reference = tracking_reference(platform, issue_number);
    let notes = notes.trim();
    if notes.is_empty() {
        reference
    } else {
        format!("{reference}\n\n{notes}")
    }
}
