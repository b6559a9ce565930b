//! Prober port - pattern search over candidate base directories

use std::path::PathBuf;

/// Resolves glob-style patterns against base directories
pub trait Prober {
    /// Every (base, pattern) pair is matched recursively; results are absolute
    /// paths that exist, de-duplicated, in discovery order.
    ///
    /// A failure for one pair yields zero matches for that pair only.
    fn probe(&self, patterns: &[&str], bases: &[PathBuf]) -> Vec<PathBuf>;
}
