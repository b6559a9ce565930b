//! Collect Event Port
//!
//! Provides an observable interface for collection runs.
//! Enables progress reporting in the terminal without the application
//! layer knowing how it's drawn.

use std::path::PathBuf;

use crate::domain::value_objects::ApplianceKind;

/// Event emitted during a collection run
#[derive(Debug, Clone)]
pub enum CollectEvent {
    /// Scan phase started
    ScanStarted { appliance_count: usize },

    /// Processing of one appliance started
    ApplianceStarted {
        index: usize,
        total: usize,
        name: String,
        kind: ApplianceKind,
    },

    /// One appliance finished scanning
    ApplianceScanned {
        name: String,
        targets: usize,
        from_cache: bool,
    },

    /// One appliance could not be collected (the run continues)
    ApplianceFailed { name: String, reason: String },

    /// Hashing pass started
    HashingStarted { total: usize },

    /// One file hashed (or skipped on error)
    FileHashed { index: usize, total: usize },

    /// Copy pass started
    CopyStarted { total: usize },

    /// One changed file was copied
    FileCopied {
        index: usize,
        total: usize,
        destination: PathBuf,
    },

    /// One changed file could not be copied
    FileCopyFailed {
        index: usize,
        total: usize,
        source: PathBuf,
        error: String,
    },
}

/// Trait for receiving collect events
///
/// Implementations can be:
/// - ConsoleEventSink: Progress display in terminal
/// - NoopEventSink: Silent operation
pub trait CollectEventSink: Send + Sync {
    /// Handle a collect event
    fn on_event(&self, event: CollectEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl CollectEventSink for NoopEventSink {
    fn on_event(&self, _event: CollectEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Test event sink that records all events
    struct RecordingEventSink {
        events: Arc<Mutex<Vec<CollectEvent>>>,
    }

    impl CollectEventSink for RecordingEventSink {
        fn on_event(&self, event: CollectEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[test]
    fn recording_sink_captures_events() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = RecordingEventSink {
            events: events.clone(),
        };

        sink.on_event(CollectEvent::ScanStarted { appliance_count: 3 });
        sink.on_event(CollectEvent::HashingStarted { total: 10 });

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], CollectEvent::ScanStarted { appliance_count: 3 }));
    }

    #[test]
    fn noop_sink_accepts_events() {
        NoopEventSink.on_event(CollectEvent::CopyStarted { total: 0 });
    }
}
