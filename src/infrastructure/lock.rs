//! Run lock
//!
//! An exclusive advisory lock on `<output>/.rulesnap.lock`, held for the whole
//! collection so overlapping scheduled runs cannot interleave cache writes.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::{RulesnapError, RulesnapResult};

/// File name of the lock inside the output root
pub const LOCK_FILE: &str = ".rulesnap.lock";

/// Guard for the output directory; released on drop
#[derive(Debug)]
pub struct RunLock {
    file: File,
    path: PathBuf,
}

impl RunLock {
    /// Take the lock without blocking
    ///
    /// Fails with `RunLocked` if another process (or another handle in this
    /// process) already holds it.
    pub fn acquire(output_root: &Path) -> RulesnapResult<Self> {
        fs::create_dir_all(output_root).map_err(|source| RulesnapError::OutputUnavailable {
            path: output_root.to_path_buf(),
            source,
        })?;

        let path = output_root.join(LOCK_FILE);
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(|source| RulesnapError::OutputUnavailable {
                path: path.clone(),
                source,
            })?;

        if file.try_lock_exclusive().is_err() {
            return Err(RulesnapError::RunLocked { path });
        }

        tracing::debug!(path = %path.display(), "acquired run lock");
        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for RunLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}
