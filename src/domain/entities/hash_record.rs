//! Hash record entity - last known content digest per source path
//!
//! Rebuilt from scratch every run: a path that was not hashed this run is
//! simply absent from the new record.

use std::collections::BTreeMap;

use crate::domain::value_objects::ContentHash;

/// Classification of a file against the previous run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeStatus {
    /// Path absent from the previous record, or digest differs
    Changed,
    /// Same digest as the previous run
    Unchanged,
}

/// Mapping from absolute source path to lowercase hex digest
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HashRecord {
    entries: BTreeMap<String, String>,
}

impl HashRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, hash: &ContentHash) {
        self.entries.insert(path.into(), hash.as_str().to_string());
    }

    /// Insert a raw digest as read from disk
    pub fn insert_raw(&mut self, path: impl Into<String>, hex: impl Into<String>) {
        self.entries.insert(path.into(), hex.into());
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    /// Compare a freshly computed digest against this (previous) record
    pub fn classify(&self, path: &str, hash: &ContentHash) -> ChangeStatus {
        match self.get(path) {
            Some(previous) if hash.matches_str(previous) => ChangeStatus::Unchanged,
            _ => ChangeStatus::Changed,
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
