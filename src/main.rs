//! bumpify - bump a vendored submodule and open a tracked pull request
//!
//! CLI binary for the submodule bump workflow.

use anyhow::Result;
use bumpify::config::{self, RunConfig};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "bumpify")]
#[command(about = "Make a OSA SHA bump on RPCO for any given branch!")]
#[command(version)]
struct Cli {
    /// The owner of the rpc-openstack repo
    #[arg(short = 'o', long, default_value = config::DEFAULT_OWNER)]
    owner: String,

    /// The github user name to use
    #[arg(short = 'u', long, default_value = config::DEFAULT_USER)]
    user: String,

    /// Your github token
    #[arg(short = 't', long = "github_token", env = "GITHUB_TOKEN", hide_env_values = true)]
    github_token: String,

    /// The branch in which the OSA SHA will be updated
    #[arg(short = 'b', long = "osa_branch")]
    osa_branch: String,

    /// The RPCO branch whose OSA SHA will be bumped
    #[arg(short = 'r', long = "rpco_branch")]
    rpco_branch: String,

    /// Smoke run - clone, check out and generate notes without touching the remote
    #[arg(short = 's', long)]
    smoke: bool,

    /// Name of the outer repository
    #[arg(long, default_value = config::DEFAULT_REPO)]
    repo: String,

    /// Submodule path inside the outer repository
    #[arg(long, default_value = config::DEFAULT_SUBMODULE)]
    submodule: String,

    /// Remote name for the cloned repository, pushed to at the end
    #[arg(long, default_value = config::DEFAULT_REMOTE)]
    remote: String,

    /// Scratch directory [default: <tmp>/bumpify]. It is reused if present and
    /// deleted with everything inside it when the run ends
    #[arg(long)]
    working_dir: Option<PathBuf>,

    /// Clone from this URL instead of GitHub over SSH
    #[arg(long)]
    clone_url: Option<String>,
}

impl Cli {
    fn into_config(self) -> RunConfig {
        RunConfig {
            owner: self.owner,
            user: self.user,
            token: self.github_token,
            osa_branch: self.osa_branch,
            rpco_branch: self.rpco_branch,
            dry_run: self.smoke,
            repo: self.repo,
            submodule: self.submodule,
            remote: self.remote,
            working_dir: self.working_dir.unwrap_or_else(config::default_working_dir),
            clone_url: self.clone_url,
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = Cli::parse().into_config();

    if cli::run_bump(&config).await? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
