//! Collect options

use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::application::scan::SearchSettings;
use crate::config::Config;

/// Options for one collection run
#[derive(Debug, Clone)]
pub struct CollectOptions {
    /// Ignore the path cache and rescan every appliance
    pub force: bool,
    /// Root of the mirrored tree and the cache files
    pub output_root: PathBuf,
    pub search: SearchSettings,
    /// Set by the interrupt handler; checked between appliances and files
    pub cancel: Option<Arc<AtomicBool>>,
}

impl CollectOptions {
    pub fn new(output_root: impl Into<PathBuf>, search: SearchSettings) -> Self {
        Self {
            force: false,
            output_root: output_root.into(),
            search,
            cancel: None,
        }
    }

    /// Build options from configuration, expanding `~` against `home`
    pub fn from_config(config: &Config, home: Option<PathBuf>) -> Self {
        let search = SearchSettings {
            tiers: config.search.tiers.clone(),
            full_scan_root: config.search.full_scan_root.clone(),
            anchor: config.search.anchor.clone(),
            home,
        };
        Self::new(config.output.root.clone(), search)
    }

    /// Set force
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Set the cancellation flag
    pub fn with_cancel(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }
}
