//! Clear cache result types

use std::path::PathBuf;

use serde::Serialize;

/// Result of clearing the caches
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClearCacheResult {
    /// Files or directories that were removed
    pub removed: Vec<PathBuf>,
    /// Locations that did not exist
    pub missing: Vec<PathBuf>,
    /// Errors that occurred
    pub errors: Vec<String>,
}

impl ClearCacheResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the operation completed without errors
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}
