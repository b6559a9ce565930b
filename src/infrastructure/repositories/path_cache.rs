//! JSON Path Cache Repository
//!
//! Implements the PathCacheRepository port. The document maps each appliance
//! name to a list of `{ "path": ..., "dest_rel": ... }` objects.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::json::{read_document, remove_document, write_document};
use super::PATH_CACHE_FILE;
use crate::domain::entities::{normalize_cache_path, PathCache, PathCacheEntry};
use crate::domain::ports::{CacheResult, PathCacheRepository};

/// JSON-backed path cache stored as `path_cache.json`
#[derive(Debug, Clone)]
pub struct JsonPathCacheRepository {
    path: PathBuf,
}

impl JsonPathCacheRepository {
    /// Repository for the cache file inside an output root
    pub fn in_output(root: &Path) -> Self {
        Self::at(root.join(PATH_CACHE_FILE))
    }

    /// Repository for an explicit file path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonEntry {
    path: String,
    dest_rel: String,
}

impl PathCacheRepository for JsonPathCacheRepository {
    fn location(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> CacheResult<PathCache> {
        let document: Option<BTreeMap<String, Vec<JsonEntry>>> = read_document(&self.path)?;
        let mut cache = PathCache::new();
        for (appliance, entries) in document.unwrap_or_default() {
            let entries = entries
                .into_iter()
                .map(|e| PathCacheEntry::new(PathBuf::from(e.path), e.dest_rel))
                .collect();
            cache.set(appliance, entries);
        }
        Ok(cache)
    }

    fn save(&self, cache: &PathCache) -> CacheResult<()> {
        let document: BTreeMap<&str, Vec<JsonEntry>> = cache
            .iter()
            .map(|(appliance, entries)| {
                let entries = entries
                    .iter()
                    .map(|e| JsonEntry {
                        path: normalize_cache_path(e.path()),
                        dest_rel: e.dest_rel().to_string(),
                    })
                    .collect::<Vec<_>>();
                (appliance, entries)
            })
            .collect();
        write_document(&self.path, &document)
    }

    fn delete(&self) -> CacheResult<bool> {
        remove_document(&self.path)
    }
}
