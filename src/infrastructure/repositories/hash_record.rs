//! JSON Hash Record Repository
//!
//! Implements the HashRecordRepository port as a flat JSON object mapping
//! absolute source paths to hex digests.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::json::{read_document, remove_document, write_document};
use super::HASH_RECORD_FILE;
use crate::domain::entities::HashRecord;
use crate::domain::ports::{CacheResult, HashRecordRepository};

/// JSON-backed hash record stored as `file_hashes.json`
#[derive(Debug, Clone)]
pub struct JsonHashRecordRepository {
    path: PathBuf,
}

impl JsonHashRecordRepository {
    /// Repository for the record file inside an output root
    pub fn in_output(root: &Path) -> Self {
        Self::at(root.join(HASH_RECORD_FILE))
    }

    /// Repository for an explicit file path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HashRecordRepository for JsonHashRecordRepository {
    fn location(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> CacheResult<HashRecord> {
        let document: Option<BTreeMap<String, String>> = read_document(&self.path)?;
        let mut record = HashRecord::new();
        for (path, hex) in document.unwrap_or_default() {
            record.insert_raw(path, hex);
        }
        Ok(record)
    }

    fn save(&self, record: &HashRecord) -> CacheResult<()> {
        let document: BTreeMap<&str, &str> = record.entries().collect();
        write_document(&self.path, &document)
    }

    fn delete(&self) -> CacheResult<bool> {
        remove_document(&self.path)
    }
}
