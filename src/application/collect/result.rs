//! Collection result

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Local};
use serde::{Serialize, Serializer};

/// Summary of one collection run
#[derive(Debug, Clone, Serialize)]
pub struct CollectionResult {
    /// Unique targets after de-duplication
    pub total: usize,
    pub local: usize,
    pub container: usize,
    /// Targets rebuilt from the path cache
    pub cached: usize,
    /// Targets found by probing or extraction this run
    pub newly_found: usize,
    pub changed: usize,
    pub unchanged: usize,
    /// Destination paths written this run
    pub copied: Vec<PathBuf>,
    /// Changed files that could not be copied
    pub failed: usize,
    /// Files that could not be hashed
    pub hash_failures: usize,
    /// Appliance-level failures; the run continued past each of them
    pub warnings: Vec<String>,
    /// Whether the path cache was trusted this run
    pub used_cache: bool,
    #[serde(rename = "elapsed_secs", serialize_with = "as_secs_f64")]
    pub elapsed: Duration,
    pub timestamp: DateTime<Local>,
}

fn as_secs_f64<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

impl CollectionResult {
    /// Number of files written this run
    pub fn copied_count(&self) -> usize {
        self.copied.len()
    }

    /// True when nothing went wrong at any level
    pub fn is_clean(&self) -> bool {
        self.failed == 0 && self.hash_failures == 0 && self.warnings.is_empty()
    }
}
