//! Sync executor
//!
//! 1. Global dedup by source path (first occurrence wins)
//! 2. Hash every target into a fresh record, classify against the previous one
//! 3. Copy changed targets atomically to `<output>/<appliance>/<dest_rel>`
//!
//! Persisting the new record is left to the caller so an interrupted run
//! never records digests for files it did not copy.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::domain::entities::{normalize_cache_path, ChangeStatus, DiscoveredTarget, HashRecord};
use crate::domain::ports::{CollectEvent, CollectEventSink, FileSystem};
use crate::domain::services::dedup_by_source;
use crate::error::{RulesnapError, RulesnapResult};

/// Result of the sync phase
#[derive(Debug, Clone, Default)]
pub struct SyncOutcome {
    /// Targets after global de-duplication
    pub targets: Vec<DiscoveredTarget>,
    /// Digests of every target hashed this run
    pub record: HashRecord,
    pub changed: usize,
    pub unchanged: usize,
    /// Targets that could not be hashed (excluded from the record)
    pub hash_failures: usize,
    /// Destination paths written this run
    pub copied: Vec<PathBuf>,
    /// Changed targets that could not be copied
    pub failed: usize,
}

/// Hashes and copies targets
pub struct SyncExecutor<'a, FS: FileSystem> {
    fs: &'a FS,
    output_root: &'a Path,
    events: &'a dyn CollectEventSink,
    cancel: Option<&'a AtomicBool>,
}

impl<'a, FS: FileSystem> SyncExecutor<'a, FS> {
    pub fn new(fs: &'a FS, output_root: &'a Path, events: &'a dyn CollectEventSink) -> Self {
        Self {
            fs,
            output_root,
            events,
            cancel: None,
        }
    }

    /// Stop between files once `flag` is set
    pub fn with_cancel(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    fn check_cancel(&self) -> RulesnapResult<()> {
        match self.cancel {
            Some(flag) if flag.load(Ordering::SeqCst) => Err(RulesnapError::Interrupted),
            _ => Ok(()),
        }
    }

    pub fn execute(
        &self,
        targets: Vec<DiscoveredTarget>,
        previous: &HashRecord,
    ) -> RulesnapResult<SyncOutcome> {
        let targets = dedup_by_source(targets);
        let mut outcome = SyncOutcome::default();

        let changed = self.hash_all(&targets, previous, &mut outcome)?;
        self.copy_changed(&changed, &mut outcome)?;

        outcome.targets = targets;
        Ok(outcome)
    }

    /// Hash every target; returns the changed ones in order
    fn hash_all<'t>(
        &self,
        targets: &'t [DiscoveredTarget],
        previous: &HashRecord,
        outcome: &mut SyncOutcome,
    ) -> RulesnapResult<Vec<&'t DiscoveredTarget>> {
        let total = targets.len();
        self.events.on_event(CollectEvent::HashingStarted { total });

        let mut changed = Vec::new();
        for (index, target) in targets.iter().enumerate() {
            self.check_cancel()?;

            let key = normalize_cache_path(target.source_path());
            match self.fs.hash(target.source_path()) {
                Ok(hash) => {
                    match previous.classify(&key, &hash) {
                        ChangeStatus::Changed => {
                            tracing::debug!(path = %key, "changed");
                            outcome.changed += 1;
                            changed.push(target);
                        }
                        ChangeStatus::Unchanged => outcome.unchanged += 1,
                    }
                    outcome.record.insert(key, &hash);
                }
                Err(e) => {
                    tracing::warn!(path = %key, error = %e, "failed to hash file");
                    outcome.hash_failures += 1;
                }
            }

            self.events.on_event(CollectEvent::FileHashed {
                index: index + 1,
                total,
            });
        }

        Ok(changed)
    }

    fn copy_changed(
        &self,
        changed: &[&DiscoveredTarget],
        outcome: &mut SyncOutcome,
    ) -> RulesnapResult<()> {
        let total = changed.len();
        self.events.on_event(CollectEvent::CopyStarted { total });

        for (index, target) in changed.iter().enumerate() {
            self.check_cancel()?;

            let destination = target.destination(self.output_root);
            match self.fs.copy_atomic(target.source_path(), &destination) {
                Ok(()) => {
                    tracing::debug!(
                        source = %target.source_path().display(),
                        destination = %destination.display(),
                        "copied"
                    );
                    self.events.on_event(CollectEvent::FileCopied {
                        index: index + 1,
                        total,
                        destination: destination.clone(),
                    });
                    outcome.copied.push(destination);
                }
                Err(e) => {
                    tracing::warn!(
                        source = %target.source_path().display(),
                        error = %e,
                        "failed to copy file"
                    );
                    self.events.on_event(CollectEvent::FileCopyFailed {
                        index: index + 1,
                        total,
                        source: target.source_path().to_path_buf(),
                        error: e.to_string(),
                    });
                    outcome.failed += 1;
                }
            }
        }

        Ok(())
    }
}
