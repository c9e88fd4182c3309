//! Bump command - wire real collaborators into the orchestrator

use crate::cli::progress::CliProgress;
use crate::cli::style::Stylize;
use anstream::println;
use anyhow::{Context, Result};
use bumpify::bump::{self, BumpResult};
use bumpify::config::RunConfig;
use bumpify::notes::PipelineNotes;
use bumpify::platform::GitHubService;
use bumpify::vcs::GitCli;
use tracing::debug;

/// Run the bump workflow
///
/// Returns `Ok(false)` when the workflow failed; the failure has already been
/// printed by then.
pub async fn run_bump(config: &RunConfig) -> Result<bool> {
    debug!(?config, "starting bump");

    let platform = GitHubService::new(&config.token, config.platform_config())
        .context("failed to create GitHub client")?;
    let notes = PipelineNotes::osa_differ(&config.notes_cache_dir());

    if config.dry_run {
        println!("{}", "Smoke run - nothing will be pushed or filed".muted());
    }

    match bump::run_bump(config, &platform, &GitCli, &notes, &CliProgress).await {
        Ok(result) => {
            print_summary(&result);
            Ok(true)
        }
        Err(_) => Ok(false),
    }
}

fn print_summary(result: &BumpResult) {
    println!();
    println!(
        "Bumped {} → {} on {}",
        short(&result.revisions.old).accent(),
        short(&result.revisions.new).accent(),
        result.branch.accent()
    );
    if result.revisions.is_noop() {
        println!("{}", "Submodule revision did not change".muted());
    }
    if result.dry_run {
        println!("{}", "Release notes:".emphasis());
        println!("{}", result.notes);
    }
}

fn short(revision: &str) -> &str {
    revision.get(..12).unwrap_or(revision)
}
