//! Cache repository ports - persistence of the path cache and hash record
//!
//! Both caches are whole-file documents: `load` reads everything, `save`
//! overwrites everything.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::entities::{HashRecord, PathCache};

/// Result type for cache operations
pub type CacheResult<T> = Result<T, CacheError>;

/// Cache persistence errors
#[derive(Debug, Error)]
pub enum CacheError {
    /// The cache file could not be read or written
    #[error("cache I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The cache file exists but is not a valid document
    #[error("corrupt cache file {path}: {message}")]
    Corrupt { path: PathBuf, message: String },

    /// The cache could not be serialized
    #[error("failed to serialize cache: {0}")]
    Serialize(String),
}

/// Persistence of the per-appliance path cache
pub trait PathCacheRepository {
    /// Location of the backing file
    fn location(&self) -> &Path;

    /// Load the cache; a missing file is an empty cache
    fn load(&self) -> CacheResult<PathCache>;

    /// Load the cache, recovering from any error with an empty cache
    fn load_or_empty(&self) -> PathCache {
        match self.load() {
            Ok(cache) => cache,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable path cache");
                PathCache::new()
            }
        }
    }

    /// Overwrite the backing file with the full cache
    fn save(&self, cache: &PathCache) -> CacheResult<()>;

    /// Delete the backing file; returns whether a file was removed
    fn delete(&self) -> CacheResult<bool>;
}

/// Persistence of the path → digest record
pub trait HashRecordRepository {
    /// Location of the backing file
    fn location(&self) -> &Path;

    /// Load the record; a missing file is an empty record
    fn load(&self) -> CacheResult<HashRecord>;

    /// Load the record, recovering from any error with an empty record
    fn load_or_empty(&self) -> HashRecord {
        match self.load() {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable hash record");
                HashRecord::new()
            }
        }
    }

    /// Overwrite the backing file with the full record
    fn save(&self, record: &HashRecord) -> CacheResult<()>;

    /// Delete the backing file; returns whether a file was removed
    fn delete(&self) -> CacheResult<bool>;
}
