//! Scratch directory owned by a single run

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Exclusive handle on the run's working directory
///
/// The directory is removed by [`Workspace::cleanup`], or on drop if cleanup
/// was never reached. Removal is best effort and never fails the run.
#[derive(Debug)]
pub struct Workspace {
    path: PathBuf,
    cleaned: bool,
}

impl Workspace {
    /// Create the directory if it does not exist yet
    ///
    /// A leftover directory from an earlier run whose cleanup failed is
    /// reused as-is.
    pub fn acquire(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        std::fs::create_dir_all(&path).map_err(|source| Error::Workspace {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "acquired working directory");
        Ok(Self {
            path,
            cleaned: false,
        })
    }

    /// Directory path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the directory and everything in it
    pub fn cleanup(mut self) {
        self.remove();
    }

    fn remove(&mut self) {
        if self.cleaned {
            return;
        }
        self.cleaned = true;
        match std::fs::remove_dir_all(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "removed working directory"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = %self.path.display(), "failed to remove working directory: {e}"),
        }
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        self.remove();
    }
}
