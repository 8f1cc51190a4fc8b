//! Per-request temporary workspaces

use crate::error::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::warn;

/// A uniquely-named temporary directory owned by one request.
///
/// Created under the configured temp root before the extractor runs, and
/// removed (all contained files plus the directory itself) on every exit
/// path. The orchestrator calls [`cleanup`](Workspace::cleanup) explicitly
/// once the outcome is known; `Drop` covers panics and cancelled futures.
/// Cleanup failures are logged and swallowed so they never mask the primary
/// result.
pub struct Workspace {
    // None once cleaned up; makes cleanup idempotent
    dir: Option<TempDir>,
    path: PathBuf,
}

impl Workspace {
    /// Allocate a fresh workspace directory under `temp_root`.
    ///
    /// Fails only if the filesystem cannot create the directory, which the
    /// gateway surfaces as a 500.
    pub fn create(temp_root: &Path) -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("yoink-")
            .tempdir_in(temp_root)?;
        let path = dir.path().to_path_buf();
        Ok(Self {
            dir: Some(dir),
            path,
        })
    }

    /// Path of the workspace directory
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the workspace and everything in it.
    ///
    /// Idempotent: calling it again (or dropping afterwards) does nothing.
    pub fn cleanup(&mut self) {
        if let Some(dir) = self.dir.take() {
            if let Err(e) = dir.close() {
                warn!(path = %self.path.display(), error = %e, "failed to remove workspace");
            }
        }
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        self.cleanup();
    }
}
