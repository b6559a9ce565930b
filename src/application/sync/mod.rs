//! Sync phase
//!
//! Fingerprints the discovered targets and mirrors the changed ones into the
//! output tree.

mod executor;

pub use executor::{SyncExecutor, SyncOutcome};
