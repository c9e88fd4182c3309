//! Release notes between two submodule revisions
//!
//! The report comes from an external diff tool whose reStructuredText output
//! is piped through a markup converter to get GitHub-flavored markdown.

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

/// Produces human-readable notes for a revision range
#[async_trait]
pub trait NotesGenerator: Send + Sync {
    /// Describe the changes between `old` and `new`
    async fn generate(&self, old: &str, new: &str) -> Result<String>;
}

/// A program plus its leading arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Executable name or path
    pub program: String,
    /// Arguments passed before any per-call arguments
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Build a spec from a program and arguments
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

/// Diff tool piped into a converter
#[derive(Debug, Clone)]
pub struct PipelineNotes {
    differ: CommandSpec,
    converter: CommandSpec,
}

impl PipelineNotes {
    /// Pipe `differ <old> <new>` into `converter`
    pub const fn new(differ: CommandSpec, converter: CommandSpec) -> Self {
        Self { differ, converter }
    }

    /// `osa-differ` into `pandoc`, caching clones under `cache_dir`
    pub fn osa_differ(cache_dir: &Path) -> Self {
        Self::new(
            CommandSpec::new(
                "osa-differ",
                [
                    "--update".to_string(),
                    "--directory".to_string(),
                    cache_dir.display().to_string(),
                ],
            ),
            CommandSpec::new("pandoc", ["--from", "rst", "--to", "gfm"]),
        )
    }
}

#[async_trait]
impl NotesGenerator for PipelineNotes {
    async fn generate(&self, old: &str, new: &str) -> Result<String> {
        debug!(differ = %self.differ.program, old, new, "generating report");

        let report = Command::new(&self.differ.program)
            .args(&self.differ.args)
            .args([old, new])
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| Error::Spawn {
                program: self.differ.program.clone(),
                source,
            })?;

        if !report.status.success() {
            return Err(Error::Notes(format!(
                "{} exited with {}: {}",
                self.differ.program,
                report.status,
                String::from_utf8_lossy(&report.stderr).trim()
            )));
        }

        convert(&self.converter, &report.stdout).await
    }
}

/// Feed `input` to the converter's stdin and collect its stdout
async fn convert(converter: &CommandSpec, input: &[u8]) -> Result<String> {
    let spawn_err = |source| Error::Spawn {
        program: converter.program.clone(),
        source,
    };

    let mut child = Command::new(&converter.program)
        .args(&converter.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(spawn_err)?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| Error::Internal("converter stdin not captured".to_string()))?;
    let input = input.to_vec();
    let writer = tokio::spawn(async move { stdin.write_all(&input).await });

    let output = child.wait_with_output().await.map_err(spawn_err)?;
    // A converter that exits early closes the pipe; its status decides the
    // outcome, but a short write means the report may be truncated.
    match writer.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => warn!(
            converter = %converter.program,
            "converter did not read all of the report: {e}"
        ),
        Err(e) => warn!(converter = %converter.program, "report writer failed: {e}"),
    }

    if !output.status.success() {
        return Err(Error::Notes(format!(
            "{} exited with {}: {}",
            converter.program,
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
