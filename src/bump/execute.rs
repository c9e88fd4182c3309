//! Bump workflow execution
//!
//! Every step is awaited in order. The first error stops the sequence; it is
//! reported once, the working directory is removed, and the error is
//! returned. Issues, pushed branches and PRs are left in place.

use crate::bump::naming::{
    DRY_RUN_ISSUE_NUMBER, ISSUE_BODY, ISSUE_LABELS, branch_name, commit_message, dry_run_branch,
    issue_title, pr_body, pr_title,
};
use crate::bump::{ProgressCallback, RevisionKind, Stage};
use crate::config::RunConfig;
use crate::error::Result;
use crate::notes::NotesGenerator;
use crate::platform::PlatformService;
use crate::types::{Issue, PlatformConfig, PullRequest, RevisionPair};
use crate::vcs::GitBackend;
use crate::workspace::Workspace;
use tracing::{info, warn};

/// Printed after the error when a run aborts
pub const CLEANUP_NOTICE: &str = "There was an error. Cleaning up.";

/// Transient state accumulated while the workflow runs
#[derive(Debug, Clone, Default)]
pub struct BumpState {
    /// Last step entered
    pub stage: Option<Stage>,
    /// Tracking issue, once filed
    pub issue: Option<Issue>,
    /// Bump branch name, once derived
    pub branch: Option<String>,
    /// Revision pinned before the bump
    pub old_revision: Option<String>,
    /// Revision pinned after the bump
    pub new_revision: Option<String>,
    /// Generated release notes
    pub notes: Option<String>,
    /// Whether the bump branch reached the remote
    pub pushed: bool,
    /// Pull request, once opened
    pub pull_request: Option<PullRequest>,
}

impl BumpState {
    async fn enter(&mut self, stage: Stage, progress: &dyn ProgressCallback) {
        self.stage = Some(stage);
        progress.on_stage(stage).await;
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct BumpResult {
    /// Whether this was a smoke run
    pub dry_run: bool,
    /// Tracking issue (absent in smoke runs)
    pub issue: Option<Issue>,
    /// Bump branch name
    pub branch: String,
    /// Submodule revisions before and after
    pub revisions: RevisionPair,
    /// Release notes embedded in the PR body
    pub notes: String,
    /// Pull request (absent in smoke runs)
    pub pull_request: Option<PullRequest>,
}

/// Run the whole bump workflow
///
/// Every error is reported through `progress` before it is returned. Invalid
/// configuration and working directory failures stop the run before anything
/// remote happens. Any later failure is followed by [`CLEANUP_NOTICE`], and
/// the working directory is removed on every path.
pub async fn run_bump(
    config: &RunConfig,
    platform: &dyn PlatformService,
    git: &dyn GitBackend,
    notes: &dyn NotesGenerator,
    progress: &dyn ProgressCallback,
) -> Result<BumpResult> {
    progress.on_stage(Stage::PreparingWorkspace).await;
    let workspace = match config
        .validate()
        .and_then(|()| Workspace::acquire(&config.working_dir))
    {
        Ok(workspace) => workspace,
        Err(e) => {
            progress.on_error(&e).await;
            return Err(e);
        }
    };

    let mut state = BumpState::default();
    let outcome = execute_steps(config, platform, git, notes, progress, &mut state).await;

    if let Err(e) = &outcome {
        warn!(stage = ?state.stage, "bump aborted: {e}");
        progress.on_error(e).await;
        report_remote_leftovers(&state, platform.config(), progress).await;
        progress.on_message(CLEANUP_NOTICE).await;
    }

    progress.on_stage(Stage::CleaningUp).await;
    workspace.cleanup();

    let result = outcome?;
    progress.on_stage(Stage::Complete).await;
    Ok(result)
}

#[allow(clippy::too_many_lines)]
async fn execute_steps(
    config: &RunConfig,
    platform: &dyn PlatformService,
    git: &dyn GitBackend,
    notes: &dyn NotesGenerator,
    progress: &dyn ProgressCallback,
    state: &mut BumpState,
) -> Result<BumpResult> {
    let outer = config.outer_repo_dir();
    let submodule = config.submodule_dir();

    let issue_number = if config.dry_run {
        progress.on_stage_skipped(Stage::FilingIssue).await;
        DRY_RUN_ISSUE_NUMBER
    } else {
        state.enter(Stage::FilingIssue, progress).await;
        let labels: Vec<String> = ISSUE_LABELS.iter().map(ToString::to_string).collect();
        let issue = platform
            .create_issue(&issue_title(&config.rpco_branch), ISSUE_BODY, &labels)
            .await?;
        info!(number = issue.number, "filed tracking issue");
        progress.on_issue_created(&issue).await;
        let number = issue.number;
        state.issue = Some(issue);
        number
    };

    let branch = if config.dry_run {
        dry_run_branch(&config.user)
    } else {
        branch_name(&config.user, issue_number, &config.rpco_branch)
    };
    progress.on_branch(&branch).await;
    state.branch = Some(branch.clone());

    state.enter(Stage::Cloning, progress).await;
    git.clone_recursive(&config.clone_url(), &outer, &config.remote)
        .await?;

    state.enter(Stage::CheckingOutBase, progress).await;
    git.checkout(&outer, &config.rpco_branch).await?;

    state.enter(Stage::SyncingSubmodule, progress).await;
    git.submodule_update(&outer).await?;

    state.enter(Stage::CapturingOldRevision, progress).await;
    let old = git.head_revision(&submodule).await?;
    progress.on_revision(RevisionKind::Old, &old).await;
    state.old_revision = Some(old.clone());

    state.enter(Stage::CreatingBranch, progress).await;
    git.checkout_new_branch(&outer, &branch).await?;

    state.enter(Stage::CheckingOutSource, progress).await;
    let source = config.source_ref();
    git.checkout(&submodule, &source).await?;

    state.enter(Stage::CapturingNewRevision, progress).await;
    let new = git.head_revision(&submodule).await?;
    progress.on_revision(RevisionKind::New, &new).await;
    state.new_revision = Some(new.clone());

    let revisions = RevisionPair { old, new };
    if revisions.is_noop() {
        progress
            .on_message(&format!(
                "{} is already at {source}; the change set will be empty",
                config.submodule
            ))
            .await;
    }

    state.enter(Stage::GeneratingNotes, progress).await;
    let report = notes.generate(&revisions.old, &revisions.new).await?;
    state.notes = Some(report.clone());

    state.enter(Stage::Staging, progress).await;
    git.add(&outer, &config.submodule).await?;

    if config.dry_run {
        for stage in [Stage::Committing, Stage::Pushing, Stage::CreatingPr] {
            progress.on_stage_skipped(stage).await;
        }
        return Ok(BumpResult {
            dry_run: true,
            issue: None,
            branch,
            revisions,
            notes: report,
            pull_request: None,
        });
    }

    let repo = platform.config();

    state.enter(Stage::Committing, progress).await;
    git.commit(&outer, &commit_message(&config.rpco_branch, repo, issue_number))
        .await?;

    state.enter(Stage::Pushing, progress).await;
    git.push(&outer, &config.remote, &branch).await?;
    state.pushed = true;

    state.enter(Stage::CreatingPr, progress).await;
    let pr = platform
        .create_pr(
            &branch,
            &config.rpco_branch,
            &pr_title(&config.rpco_branch),
            &pr_body(repo, issue_number, &report),
        )
        .await?;
    info!(number = pr.number, "opened pull request");
    progress.on_pr_created(&pr).await;
    state.pull_request = Some(pr.clone());

    Ok(BumpResult {
        dry_run: false,
        issue: state.issue.clone(),
        branch,
        revisions,
        notes: report,
        pull_request: Some(pr),
    })
}

/// Tell the user which remote artifacts need manual follow-up
async fn report_remote_leftovers(
    state: &BumpState,
    repo: &PlatformConfig,
    progress: &dyn ProgressCallback,
) {
    if let Some(issue) = &state.issue {
        progress
            .on_message(&format!(
                "Tracking issue #{} on {} was left open: {}",
                issue.number,
                repo.slug(),
                issue.html_url
            ))
            .await;
    }
    if let (true, Some(branch)) = (state.pushed, &state.branch) {
        progress
            .on_message(&format!("Branch {branch} was already pushed to {}", repo.slug()))
            .await;
    }
}
