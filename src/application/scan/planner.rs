//! Scan planner
//!
//! For each appliance, in registry order:
//! - local with valid cached entries: rebuild targets from the cache
//! - local otherwise: probe tiers in order, first tier with a match wins,
//!   escalate to the full-scan root if none matched
//! - container: delegate to the extractor
//!
//! Every local appliance's targets go into a brand-new path cache.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::application::extract::ContainerExtractor;
use crate::domain::entities::{
    ApplianceDescriptor, ApplianceRegistry, DiscoveredTarget, PathCache, PathCacheEntry,
};
use crate::domain::ports::{CollectEvent, CollectEventSink, ContainerRuntime, FileSystem, Prober};
use crate::domain::services::{anchor_relative, relative_to};
use crate::domain::value_objects::SearchTier;

/// Search parameters for local appliances
#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub tiers: Vec<SearchTier>,
    pub full_scan_root: PathBuf,
    pub anchor: String,
    /// Home directory used to expand `~` in tier paths
    pub home: Option<PathBuf>,
}

/// Result of the scan phase
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub targets: Vec<DiscoveredTarget>,
    /// Replacement path cache, to be saved before syncing
    pub path_cache: PathCache,
    /// One line per appliance that could not be collected
    pub warnings: Vec<String>,
}

/// Walks the registry and produces targets
pub struct ScanPlanner<'a, P, FS, R>
where
    P: Prober,
    FS: FileSystem,
    R: ContainerRuntime,
{
    prober: &'a P,
    fs: &'a FS,
    extractor: &'a ContainerExtractor<'a, R, FS>,
    settings: &'a SearchSettings,
    events: &'a dyn CollectEventSink,
    cancel: Option<&'a AtomicBool>,
}

impl<'a, P, FS, R> ScanPlanner<'a, P, FS, R>
where
    P: Prober,
    FS: FileSystem,
    R: ContainerRuntime,
{
    pub fn new(
        prober: &'a P,
        fs: &'a FS,
        extractor: &'a ContainerExtractor<'a, R, FS>,
        settings: &'a SearchSettings,
        events: &'a dyn CollectEventSink,
    ) -> Self {
        Self {
            prober,
            fs,
            extractor,
            settings,
            events,
            cancel: None,
        }
    }

    /// Stop between appliances once `flag` is set
    pub fn with_cancel(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    fn cancelled(&self) -> bool {
        self.cancel.is_some_and(|flag| flag.load(Ordering::SeqCst))
    }

    /// Scan every appliance; `cache` is the verified cache when accepted
    pub fn scan(&self, registry: &ApplianceRegistry, cache: Option<&PathCache>) -> ScanOutcome {
        let mut outcome = ScanOutcome::default();
        let total = registry.len();
        self.events.on_event(CollectEvent::ScanStarted {
            appliance_count: total,
        });

        for (index, appliance) in registry.iter().enumerate() {
            if self.cancelled() {
                tracing::info!(remaining = total - index, "scan interrupted");
                break;
            }
            self.events.on_event(CollectEvent::ApplianceStarted {
                index,
                total,
                name: appliance.name().to_string(),
                kind: appliance.kind(),
            });

            if appliance.kind().is_container() {
                self.scan_container(appliance, &mut outcome);
            } else {
                self.scan_local(appliance, cache, &mut outcome);
            }
        }

        outcome
    }

    fn scan_container(&self, appliance: &ApplianceDescriptor, outcome: &mut ScanOutcome) {
        outcome.path_cache.set(appliance.name(), Vec::new());

        match self.extractor.extract(appliance) {
            Ok(targets) => {
                self.events.on_event(CollectEvent::ApplianceScanned {
                    name: appliance.name().to_string(),
                    targets: targets.len(),
                    from_cache: false,
                });
                outcome.targets.extend(targets);
            }
            Err(e) => {
                tracing::warn!(appliance = appliance.name(), error = %e, "container collection failed");
                self.events.on_event(CollectEvent::ApplianceFailed {
                    name: appliance.name().to_string(),
                    reason: e.to_string(),
                });
                outcome.warnings.push(format!("{}: {}", appliance.name(), e));
            }
        }
    }

    fn scan_local(
        &self,
        appliance: &ApplianceDescriptor,
        cache: Option<&PathCache>,
        outcome: &mut ScanOutcome,
    ) {
        let cached = cache
            .map(|c| self.targets_from_cache(appliance, c))
            .unwrap_or_default();

        let from_cache = !cached.is_empty();
        let targets = if from_cache {
            tracing::info!(appliance = appliance.name(), files = cached.len(), "using cached paths");
            cached
        } else {
            let matches = self.probe_tiers(appliance);
            self.convert_matches(appliance, matches)
        };

        if targets.is_empty() {
            tracing::info!(appliance = appliance.name(), "no rule files found");
        }

        let entries = targets
            .iter()
            .map(|t| PathCacheEntry::new(t.source_path(), t.dest_rel()))
            .collect();
        outcome.path_cache.set(appliance.name(), entries);

        self.events.on_event(CollectEvent::ApplianceScanned {
            name: appliance.name().to_string(),
            targets: targets.len(),
            from_cache,
        });
        outcome.targets.extend(targets);
    }

    fn targets_from_cache(
        &self,
        appliance: &ApplianceDescriptor,
        cache: &PathCache,
    ) -> Vec<DiscoveredTarget> {
        cache
            .entries(appliance.name())
            .iter()
            .filter(|entry| self.fs.exists(entry.path()))
            .map(|entry| DiscoveredTarget::cached(entry.path(), appliance.name(), entry.dest_rel()))
            .collect()
    }

    /// Probe tiers in order; the first tier with any match ends the search
    fn probe_tiers(&self, appliance: &ApplianceDescriptor) -> Vec<PathBuf> {
        let specs = appliance.search_specs();

        for tier in &self.settings.tiers {
            let bases = tier.expanded_paths(self.settings.home.as_deref());
            let matches = self.prober.probe(&specs, &bases);
            if !matches.is_empty() {
                tracing::info!(
                    appliance = appliance.name(),
                    tier = %tier.name,
                    matches = matches.len(),
                    "found matches"
                );
                return matches;
            }
            tracing::debug!(appliance = appliance.name(), tier = %tier.name, "no matches in tier");
        }

        tracing::info!(
            appliance = appliance.name(),
            root = %self.settings.full_scan_root.display(),
            "escalating to full scan"
        );
        self.prober
            .probe(&specs, std::slice::from_ref(&self.settings.full_scan_root))
    }

    /// Turn raw matches into targets, dropping duplicates by source path
    fn convert_matches(
        &self,
        appliance: &ApplianceDescriptor,
        matches: Vec<PathBuf>,
    ) -> Vec<DiscoveredTarget> {
        let mut seen: HashSet<PathBuf> = HashSet::new();
        let mut targets = Vec::new();
        let mut push = |path: PathBuf, dest_rel: String| {
            if seen.insert(path.clone()) {
                targets.push(DiscoveredTarget::local(path, appliance.name(), dest_rel));
            }
        };

        for matched in matches {
            if self.fs.is_file(&matched) {
                if !appliance.extension().accepts(&matched) {
                    continue;
                }
                let anchored = anchor_relative(&matched, &self.settings.anchor);
                if anchored.is_fallback() {
                    tracing::warn!(
                        path = %matched.display(),
                        anchor = %self.settings.anchor,
                        "anchor not found in path, using file name"
                    );
                }
                push(matched, anchored.into_string());
            } else if self.fs.is_dir(&matched) {
                for file in self.files_under(&matched) {
                    if !appliance.extension().accepts(&file) {
                        continue;
                    }
                    if let Some(rel) = relative_to(&matched, &file) {
                        push(file, rel);
                    }
                }
            }
        }

        targets
    }

    fn files_under(&self, dir: &Path) -> Vec<PathBuf> {
        match self.fs.walk_files(dir) {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "failed to walk matched directory");
                Vec::new()
            }
        }
    }
}
