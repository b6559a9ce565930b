//! Error types for rulesnap
//!
//! Crate-level errors are the fatal ones: a broken configuration, an output
//! directory that cannot be created, or a concurrent run holding the lock.
//! Everything scoped to a single appliance or file has its own error type in
//! the port that produces it and is recovered locally.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for rulesnap operations
pub type RulesnapResult<T> = Result<T, RulesnapError>;

/// Main error type for rulesnap operations
#[derive(Error, Debug)]
pub enum RulesnapError {
    /// An appliance descriptor violates its invariants
    #[error("invalid appliance '{name}': {reason}")]
    InvalidAppliance { name: String, reason: String },

    /// Two appliances share the same name
    #[error("duplicate appliance name '{name}'")]
    DuplicateAppliance { name: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// The output root could not be created or written
    #[error("output directory {path} is unavailable: {source}")]
    OutputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Another run holds the lock on the output directory
    #[error("another collection run is already using {path}")]
    RunLocked { path: PathBuf },

    /// The run was interrupted by the user
    #[error("collection interrupted")]
    Interrupted,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
