//! Container ports - runtime inspection and directory extraction
//!
//! The extractor resolves and checks a container through `ContainerRuntime`
//! and then tries an ordered list of `ExtractionStrategy` implementations.

use std::path::Path;

use thiserror::Error;

/// Errors scoped to a single container-hosted appliance
#[derive(Debug, Error)]
pub enum ContainerError {
    /// The runtime binary could not be executed at all
    #[error("container runtime '{runtime}' is unavailable: {message}")]
    RuntimeUnavailable { runtime: String, message: String },

    /// Neither id lookup nor name filtering found a container
    #[error("container not found: {reference}")]
    NotFound { reference: String },

    /// The container exists but is not running
    #[error("container not running: {id}")]
    NotRunning { id: String },

    /// The configured path does not exist inside the container
    #[error("path not found in container {id}: {path}")]
    PathMissing { id: String, path: String },

    /// One extraction strategy failed
    #[error("{strategy} failed: {message}")]
    Strategy {
        strategy: &'static str,
        message: String,
    },

    /// One extraction strategy did not finish in time
    #[error("{strategy} timed out after {secs}s")]
    Timeout { strategy: &'static str, secs: u64 },

    /// Every extraction strategy failed
    #[error("all extraction methods failed (last: {last})")]
    AllStrategiesFailed { last: String },

    /// A strategy reported success but produced nothing
    #[error("extraction produced an empty directory: {path}")]
    EmptyExtraction { path: String },

    /// Local I/O while preparing or enumerating the temp directory
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Inspection commands issued against a container runtime
pub trait ContainerRuntime {
    /// Runtime name for logging (e.g. "docker")
    fn name(&self) -> &str;

    /// Resolve a reference as a container id; `Ok(None)` if unknown
    fn inspect_id(&self, reference: &str) -> Result<Option<String>, ContainerError>;

    /// First container whose name matches `name`; `Ok(None)` if none
    fn find_by_name(&self, name: &str) -> Result<Option<String>, ContainerError>;

    /// Whether the container state is `running`
    fn is_running(&self, id: &str) -> Result<bool, ContainerError>;

    /// Whether `path` exists inside the container
    fn path_exists(&self, id: &str, path: &str) -> Result<bool, ContainerError>;
}

/// One way of copying a directory tree out of a container
pub trait ExtractionStrategy {
    /// Get the name of this extraction method (for logging)
    fn name(&self) -> &'static str;

    /// Copy the contents of `source` (a directory inside the container) into
    /// `dest`, so that `source/a/b` lands at `dest/a/b`.
    fn extract(&self, container_id: &str, source: &str, dest: &Path) -> Result<(), ContainerError>;
}
