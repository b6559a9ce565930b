//! Collect Use Case
//!
//! load → decide → scan → save path cache → sync → save hash record

use std::path::{Path, PathBuf};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Instant;

use chrono::Local;

use crate::application::extract::{ContainerExtractor, TEMP_DIR};
use crate::application::scan::{decide_cache_usage, CacheDecision, ScanPlanner};
use crate::application::sync::SyncExecutor;
use crate::domain::entities::{ApplianceRegistry, PathCache};
use crate::domain::ports::{
    CollectEventSink, ContainerRuntime, ExtractionStrategy, FileSystem, HashRecordRepository,
    NoopEventSink, PathCacheRepository, Prober,
};
use crate::error::{RulesnapError, RulesnapResult};

use super::options::CollectOptions;
use super::result::CollectionResult;

/// Collect use case - one incremental collection run
///
/// Parameterized by its ports so tests can substitute the prober, the
/// container runtime and the cache stores.
pub struct CollectUseCase<P, FS, R, PC, HR>
where
    P: Prober,
    FS: FileSystem,
    R: ContainerRuntime,
    PC: PathCacheRepository,
    HR: HashRecordRepository,
{
    prober: P,
    fs: FS,
    runtime: R,
    strategies: Vec<Box<dyn ExtractionStrategy>>,
    path_cache_repo: PC,
    hash_repo: HR,
}

impl<P, FS, R, PC, HR> CollectUseCase<P, FS, R, PC, HR>
where
    P: Prober,
    FS: FileSystem,
    R: ContainerRuntime,
    PC: PathCacheRepository,
    HR: HashRecordRepository,
{
    pub fn new(
        prober: P,
        fs: FS,
        runtime: R,
        strategies: Vec<Box<dyn ExtractionStrategy>>,
        path_cache_repo: PC,
        hash_repo: HR,
    ) -> Self {
        Self {
            prober,
            fs,
            runtime,
            strategies,
            path_cache_repo,
            hash_repo,
        }
    }

    /// Execute a collection run without progress reporting
    pub fn execute(
        &self,
        registry: &ApplianceRegistry,
        options: &CollectOptions,
    ) -> RulesnapResult<CollectionResult> {
        self.execute_with_events(registry, options, Arc::new(NoopEventSink))
    }

    /// Execute a collection run, reporting progress to `event_sink`
    pub fn execute_with_events(
        &self,
        registry: &ApplianceRegistry,
        options: &CollectOptions,
        event_sink: Arc<dyn CollectEventSink>,
    ) -> RulesnapResult<CollectionResult> {
        let started = Instant::now();
        let timestamp = Local::now();
        let output_root = absolute(&options.output_root);

        self.fs
            .create_dir_all(&output_root)
            .map_err(|e| RulesnapError::OutputUnavailable {
                path: output_root.clone(),
                source: std::io::Error::other(e.to_string()),
            })?;

        // Load + decide
        let loaded = self.load_path_cache();
        let decision = decide_cache_usage(options.force, &loaded, |p| self.fs.exists(p));
        match &decision {
            CacheDecision::FullScan(reason) => {
                tracing::info!(reason = %reason, "running full scan");
            }
            CacheDecision::UseCache { report, .. } => {
                tracing::info!(
                    valid = report.valid,
                    invalid = report.invalid(),
                    "running incremental scan from path cache"
                );
            }
        }

        // Scan
        let extractor = ContainerExtractor::new(
            &self.runtime,
            &self.strategies,
            &self.fs,
            output_root.join(TEMP_DIR),
        );
        let mut planner = ScanPlanner::new(
            &self.prober,
            &self.fs,
            &extractor,
            &options.search,
            event_sink.as_ref(),
        );
        if let Some(flag) = &options.cancel {
            planner = planner.with_cancel(flag.as_ref());
        }
        let scan = planner.scan(registry, decision.cache());

        // A partial scan must not replace the cache.
        if let Some(flag) = &options.cancel {
            if flag.load(Ordering::SeqCst) {
                return Err(RulesnapError::Interrupted);
            }
        }

        if let Err(e) = self.path_cache_repo.save(&scan.path_cache) {
            tracing::warn!(error = %e, "failed to save path cache");
        }

        // Sync
        let previous = self.hash_repo.load_or_empty();
        let mut executor = SyncExecutor::new(&self.fs, &output_root, event_sink.as_ref());
        if let Some(flag) = &options.cancel {
            executor = executor.with_cancel(flag.as_ref());
        }
        let synced = executor.execute(scan.targets, &previous)?;

        if let Err(e) = self.hash_repo.save(&synced.record) {
            tracing::warn!(error = %e, "failed to save hash record");
        }

        let container = synced.targets.iter().filter(|t| t.from_container()).count();
        let cached = synced.targets.iter().filter(|t| t.from_cache()).count();
        let total = synced.targets.len();

        let result = CollectionResult {
            total,
            local: total - container,
            container,
            cached,
            newly_found: total - cached,
            changed: synced.changed,
            unchanged: synced.unchanged,
            copied: synced.copied,
            failed: synced.failed,
            hash_failures: synced.hash_failures,
            warnings: scan.warnings,
            used_cache: decision.uses_cache(),
            elapsed: started.elapsed(),
            timestamp,
        };

        tracing::info!(
            total = result.total,
            changed = result.changed,
            unchanged = result.unchanged,
            copied = result.copied_count(),
            failed = result.failed,
            "collection finished"
        );
        Ok(result)
    }

    fn load_path_cache(&self) -> PathCache {
        match self.path_cache_repo.load() {
            Ok(cache) => {
                if cache.is_empty() {
                    tracing::info!(
                        path = %self.path_cache_repo.location().display(),
                        "no path cache yet"
                    );
                }
                cache
            }
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable path cache");
                PathCache::new()
            }
        }
    }
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
