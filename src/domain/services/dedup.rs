//! Target de-duplication by absolute source path

use std::collections::HashSet;

use crate::domain::entities::DiscoveredTarget;

/// Keep the first target seen for each distinct source path, preserving order
pub fn dedup_by_source(targets: Vec<DiscoveredTarget>) -> Vec<DiscoveredTarget> {
    let mut seen = HashSet::with_capacity(targets.len());
    targets
        .into_iter()
        .filter(|t| seen.insert(t.source_path().to_path_buf()))
        .collect()
}
