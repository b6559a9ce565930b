//! Global cache decision

use std::path::Path;

use crate::domain::entities::{PathCache, VerifyReport};

/// Why the run ignores the path cache
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullScanReason {
    /// `--force` was given
    Forced,
    /// No cache file, or an empty one
    NoCache,
    /// Verification left no appliance with a valid entry
    NothingValid,
}

impl std::fmt::Display for FullScanReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FullScanReason::Forced => write!(f, "forced"),
            FullScanReason::NoCache => write!(f, "no path cache"),
            FullScanReason::NothingValid => write!(f, "no cached path is still valid"),
        }
    }
}

/// Outcome of the cache decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheDecision {
    /// Scan every appliance from scratch
    FullScan(FullScanReason),
    /// Reuse the verified cache where an appliance still has entries
    UseCache { cache: PathCache, report: VerifyReport },
}

impl CacheDecision {
    pub fn uses_cache(&self) -> bool {
        matches!(self, CacheDecision::UseCache { .. })
    }

    /// The verified cache, when accepted
    pub fn cache(&self) -> Option<&PathCache> {
        match self {
            CacheDecision::UseCache { cache, .. } => Some(cache),
            CacheDecision::FullScan(_) => None,
        }
    }
}

/// Decide whether to trust the loaded path cache
///
/// The cache is accepted only if at least one appliance keeps at least one
/// entry that still exists; otherwise every appliance is scanned.
pub fn decide_cache_usage(
    force: bool,
    loaded: &PathCache,
    exists: impl Fn(&Path) -> bool,
) -> CacheDecision {
    if force {
        return CacheDecision::FullScan(FullScanReason::Forced);
    }
    if !loaded.has_any_entries() {
        return CacheDecision::FullScan(FullScanReason::NoCache);
    }

    let (cache, report) = loaded.verified(exists);
    tracing::info!(
        valid = report.valid,
        total = report.total,
        "verified path cache"
    );

    if cache.has_any_entries() {
        CacheDecision::UseCache { cache, report }
    } else {
        CacheDecision::FullScan(FullScanReason::NothingValid)
    }
}
