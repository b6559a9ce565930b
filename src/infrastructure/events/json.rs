//! JSON Event Sink
//!
//! Outputs collect events as NDJSON for cron jobs and other automation.

use std::io::{self, Write};
use std::sync::Mutex;

use serde_json::{json, Value};

use crate::domain::ports::{CollectEvent, CollectEventSink};

/// Event sink that writes one JSON object per line
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

fn to_json(event: CollectEvent) -> Value {
    match event {
        CollectEvent::ScanStarted { appliance_count } => json!({
            "event": "scan_start",
            "appliances": appliance_count,
        }),
        CollectEvent::ApplianceStarted {
            index,
            total,
            name,
            kind,
        } => json!({
            "event": "appliance_start",
            "index": index,
            "total": total,
            "name": name,
            "kind": kind,
        }),
        CollectEvent::ApplianceScanned {
            name,
            targets,
            from_cache,
        } => json!({
            "event": "appliance_scanned",
            "name": name,
            "targets": targets,
            "from_cache": from_cache,
        }),
        CollectEvent::ApplianceFailed { name, reason } => json!({
            "event": "appliance_failed",
            "name": name,
            "reason": reason,
        }),
        CollectEvent::HashingStarted { total } => json!({
            "event": "hash_start",
            "total": total,
        }),
        CollectEvent::FileHashed { index, total } => json!({
            "event": "item_hashed",
            "index": index,
            "total": total,
        }),
        CollectEvent::CopyStarted { total } => json!({
            "event": "copy_start",
            "total": total,
        }),
        CollectEvent::FileCopied {
            index,
            total,
            destination,
        } => json!({
            "event": "item_copied",
            "index": index,
            "total": total,
            "path": destination.display().to_string(),
        }),
        CollectEvent::FileCopyFailed {
            index,
            total,
            source,
            error,
        } => json!({
            "event": "item_error",
            "index": index,
            "total": total,
            "path": source.display().to_string(),
            "error": error,
        }),
    }
}

impl CollectEventSink for JsonEventSink {
    fn on_event(&self, event: CollectEvent) {
        self.write_event(to_json(event));
    }
}
