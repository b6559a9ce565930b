//! Clear Cache Use Case

use std::path::Path;

use crate::domain::ports::{FileSystem, HashRecordRepository, PathCacheRepository};

use super::result::ClearCacheResult;

/// Clear cache use case - deletes the path cache, hash record and temp tree
pub struct ClearCacheUseCase<PC, HR, FS>
where
    PC: PathCacheRepository,
    HR: HashRecordRepository,
    FS: FileSystem,
{
    path_cache_repo: PC,
    hash_repo: HR,
    fs: FS,
}

impl<PC, HR, FS> ClearCacheUseCase<PC, HR, FS>
where
    PC: PathCacheRepository,
    HR: HashRecordRepository,
    FS: FileSystem,
{
    pub fn new(path_cache_repo: PC, hash_repo: HR, fs: FS) -> Self {
        Self {
            path_cache_repo,
            hash_repo,
            fs,
        }
    }

    /// Delete every cache artifact; missing ones are not errors
    pub fn execute(&self, temp_root: &Path) -> ClearCacheResult {
        let mut result = ClearCacheResult::new();

        let path_cache = self.path_cache_repo.location().to_path_buf();
        match self.path_cache_repo.delete() {
            Ok(true) => result.removed.push(path_cache),
            Ok(false) => result.missing.push(path_cache),
            Err(e) => result.errors.push(e.to_string()),
        }

        let hash_record = self.hash_repo.location().to_path_buf();
        match self.hash_repo.delete() {
            Ok(true) => result.removed.push(hash_record),
            Ok(false) => result.missing.push(hash_record),
            Err(e) => result.errors.push(e.to_string()),
        }

        if self.fs.exists(temp_root) {
            match self.fs.remove_dir_all(temp_root) {
                Ok(()) => result.removed.push(temp_root.to_path_buf()),
                Err(e) => result.errors.push(format!("{}: {}", temp_root.display(), e)),
            }
        } else {
            result.missing.push(temp_root.to_path_buf());
        }

        for path in &result.removed {
            tracing::info!(path = %path.display(), "removed");
        }
        result
    }
}
