//! Event Sink Implementations
//!
//! - JsonEventSink: NDJSON output for automation
//!
//! The interactive progress display lives with the rest of the terminal UI
//! in the binary.

mod json;

pub use json::JsonEventSink;
