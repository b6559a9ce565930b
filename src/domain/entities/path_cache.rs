//! Path cache entity - previously discovered file locations per appliance
//!
//! The cache is regenerated in full at the end of every scan and loaded at
//! the start of the next run. It's a pure data structure - I/O operations are
//! handled by the PathCacheRepository.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Normalize a path for cache storage (always use forward slashes).
pub(crate) fn normalize_cache_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// One cached `(source path, destination-relative path)` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathCacheEntry {
    path: PathBuf,
    dest_rel: String,
}

impl PathCacheEntry {
    pub fn new(path: impl Into<PathBuf>, dest_rel: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            dest_rel: dest_rel.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dest_rel(&self) -> &str {
        &self.dest_rel
    }
}

/// Outcome of verifying a cache against the filesystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VerifyReport {
    pub valid: usize,
    pub total: usize,
}

impl VerifyReport {
    pub fn invalid(&self) -> usize {
        self.total - self.valid
    }
}

/// Mapping from appliance name to its cached entries
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PathCache {
    appliances: BTreeMap<String, Vec<PathCacheEntry>>,
}

impl PathCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entries recorded for an appliance
    pub fn set(&mut self, appliance: impl Into<String>, entries: Vec<PathCacheEntry>) {
        self.appliances.insert(appliance.into(), entries);
    }

    /// Append one entry to an appliance's list
    pub fn push(&mut self, appliance: &str, entry: PathCacheEntry) {
        self.appliances
            .entry(appliance.to_string())
            .or_default()
            .push(entry);
    }

    /// Entries for an appliance (empty slice when unknown)
    pub fn entries(&self, appliance: &str) -> &[PathCacheEntry] {
        self.appliances
            .get(appliance)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[PathCacheEntry])> {
        self.appliances
            .iter()
            .map(|(name, entries)| (name.as_str(), entries.as_slice()))
    }

    /// Number of appliances recorded (including ones with no entries)
    pub fn len(&self) -> usize {
        self.appliances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appliances.is_empty()
    }

    /// Total number of cached paths across all appliances
    pub fn total_paths(&self) -> usize {
        self.appliances.values().map(Vec::len).sum()
    }

    /// True if at least one appliance has at least one entry
    pub fn has_any_entries(&self) -> bool {
        self.appliances.values().any(|entries| !entries.is_empty())
    }

    /// Keep only entries whose source path still exists
    ///
    /// Every appliance key survives, possibly with an empty list.
    pub fn verified(&self, exists: impl Fn(&Path) -> bool) -> (PathCache, VerifyReport) {
        let mut report = VerifyReport::default();
        let mut verified = PathCache::new();

        for (appliance, entries) in &self.appliances {
            let mut kept = Vec::with_capacity(entries.len());
            for entry in entries {
                report.total += 1;
                if exists(entry.path()) {
                    report.valid += 1;
                    kept.push(entry.clone());
                } else {
                    tracing::warn!(path = %entry.path().display(), appliance = %appliance, "cached path no longer exists");
                }
            }
            verified.set(appliance.clone(), kept);
        }

        (verified, report)
    }
}
