//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use walkdir::WalkDir;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};
use crate::domain::value_objects::ContentHash;

/// Local file system implementation
///
/// Provides streaming hashes, recursive file listing and crash-safe copies.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn walk_files(&self, dir: &Path) -> FsResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(match e.into_io_error() {
                        Some(io_err) => FsError::at(dir, io_err),
                        None => FsError::Other(format!("cannot walk {}", dir.display())),
                    });
                }
                Err(e) => {
                    tracing::debug!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };

            // Symlinked files count, symlinked directories are not descended.
            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());
            if is_file {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    fn hash(&self, path: &Path) -> FsResult<ContentHash> {
        let file = File::open(path).map_err(|e| FsError::at(path, e))?;
        ContentHash::from_reader(BufReader::new(file)).map_err(|e| FsError::at(path, e))
    }

    fn copy_atomic(&self, src: &Path, dst: &Path) -> FsResult<()> {
        let parent = dst
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent).map_err(|e| FsError::at(parent, e))?;

        let mut source = File::open(src).map_err(|e| FsError::at(src, e))?;
        let permissions = source
            .metadata()
            .map_err(|e| FsError::at(src, e))?
            .permissions();

        // Dropping the temp file on any early return removes it.
        let mut temp = NamedTempFile::new_in(parent).map_err(|e| FsError::at(parent, e))?;
        io::copy(&mut source, temp.as_file_mut()).map_err(|e| FsError::at(src, e))?;
        temp.as_file()
            .sync_all()
            .map_err(|e| FsError::at(temp.path(), e))?;
        fs::set_permissions(temp.path(), permissions).map_err(|e| FsError::at(dst, e))?;

        temp.persist(dst).map_err(|e| FsError::at(dst, e.error))?;
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        fs::create_dir_all(path).map_err(|e| FsError::at(path, e))
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        match fs::remove_dir_all(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(FsError::at(path, e)),
        }
    }

    fn is_empty_dir(&self, path: &Path) -> bool {
        fs::read_dir(path)
            .map(|mut entries| entries.next().is_none())
            .unwrap_or(false)
    }
}
