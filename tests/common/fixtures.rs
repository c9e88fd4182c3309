//! Test data factories for bumpify types

#![allow(dead_code)]

use bumpify::config::RunConfig;
use bumpify::types::PlatformConfig;
use std::path::Path;

/// Old submodule revision handed out first by `MockGit`
pub const OLD_REV: &str = "1111111111111111111111111111111111111111";

/// New submodule revision handed out second by `MockGit`
pub const NEW_REV: &str = "2222222222222222222222222222222222222222";

/// Release notes returned by `MockNotes` by default
pub const NOTES: &str = "## Commits\n\n* 2222222 Bump ansible";

/// A config whose working directory lives under `root`
pub fn make_config(root: &Path, dry_run: bool) -> RunConfig {
    let mut config = RunConfig::new("test-token", "stable/newton", "newton-14.0");
    config.user = "cantu".to_string();
    config.working_dir = root.join("bumpify");
    config.dry_run = dry_run;
    config
}

/// Platform coordinates matching `make_config`
pub fn platform_config() -> PlatformConfig {
    PlatformConfig {
        owner: "rcbops".to_string(),
        repo: "rpc-openstack".to_string(),
    }
}
