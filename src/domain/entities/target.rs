//! Discovered target - one file slated for hashing and copy

use std::path::{Path, PathBuf};

/// A file found by the scan phase
///
/// Created by the planner or the container extractor and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredTarget {
    source_path: PathBuf,
    appliance: String,
    dest_rel: String,
    from_cache: bool,
    from_container: bool,
}

impl DiscoveredTarget {
    /// A file found by probing the local filesystem
    pub fn local(
        source_path: impl Into<PathBuf>,
        appliance: impl Into<String>,
        dest_rel: impl Into<String>,
    ) -> Self {
        Self::new(source_path, appliance, dest_rel, false, false)
    }

    /// A file reconstructed from the path cache
    pub fn cached(
        source_path: impl Into<PathBuf>,
        appliance: impl Into<String>,
        dest_rel: impl Into<String>,
    ) -> Self {
        Self::new(source_path, appliance, dest_rel, true, false)
    }

    /// A file extracted from a container into the temp area
    pub fn container(
        source_path: impl Into<PathBuf>,
        appliance: impl Into<String>,
        dest_rel: impl Into<String>,
    ) -> Self {
        Self::new(source_path, appliance, dest_rel, false, true)
    }

    fn new(
        source_path: impl Into<PathBuf>,
        appliance: impl Into<String>,
        dest_rel: impl Into<String>,
        from_cache: bool,
        from_container: bool,
    ) -> Self {
        Self {
            source_path: source_path.into(),
            appliance: appliance.into(),
            dest_rel: dest_rel.into(),
            from_cache,
            from_container,
        }
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn appliance(&self) -> &str {
        &self.appliance
    }

    /// Forward-slash path under the appliance's output subtree
    pub fn dest_rel(&self) -> &str {
        &self.dest_rel
    }

    pub fn from_cache(&self) -> bool {
        self.from_cache
    }

    pub fn from_container(&self) -> bool {
        self.from_container
    }

    /// Final location of this file under `output_root`
    pub fn destination(&self, output_root: &Path) -> PathBuf {
        let mut dest = output_root.join(&self.appliance);
        for part in self.dest_rel.split('/').filter(|p| !p.is_empty() && *p != "." && *p != "..") {
            dest.push(part);
        }
        dest
    }
}
