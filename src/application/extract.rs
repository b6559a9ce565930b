//! Container extraction
//!
//! Resolve → liveness → path check → extract → validate → enumerate. Every
//! failure is scoped to one appliance; the caller logs it and moves on.

use std::path::{Path, PathBuf};

use crate::domain::entities::{ApplianceDescriptor, ApplianceSource, DiscoveredTarget};
use crate::domain::ports::{ContainerError, ContainerRuntime, ExtractionStrategy, FileSystem, FsError};
use crate::domain::services::relative_to;
use crate::infrastructure::container::short_id;

/// Directory under the output root that holds extracted container trees
pub const TEMP_DIR: &str = "docker_temp";

/// Copies a container appliance's directory into the temp area and lists it
pub struct ContainerExtractor<'a, R, FS>
where
    R: ContainerRuntime,
    FS: FileSystem,
{
    runtime: &'a R,
    strategies: &'a [Box<dyn ExtractionStrategy>],
    fs: &'a FS,
    temp_root: PathBuf,
}

impl<'a, R, FS> ContainerExtractor<'a, R, FS>
where
    R: ContainerRuntime,
    FS: FileSystem,
{
    pub fn new(
        runtime: &'a R,
        strategies: &'a [Box<dyn ExtractionStrategy>],
        fs: &'a FS,
        temp_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            runtime,
            strategies,
            fs,
            temp_root: temp_root.into(),
        }
    }

    /// Extract a container appliance and return its targets
    ///
    /// Local appliances yield no targets.
    pub fn extract(
        &self,
        appliance: &ApplianceDescriptor,
    ) -> Result<Vec<DiscoveredTarget>, ContainerError> {
        let ApplianceSource::Container { container, path } = appliance.source() else {
            return Ok(Vec::new());
        };

        let id = self.resolve(container)?;
        tracing::info!(appliance = appliance.name(), container = %container, id = short_id(&id), "resolved container");

        if !self.runtime.is_running(&id)? {
            return Err(ContainerError::NotRunning {
                id: short_id(&id).to_string(),
            });
        }

        if !self.runtime.path_exists(&id, path)? {
            return Err(ContainerError::PathMissing {
                id: short_id(&id).to_string(),
                path: path.clone(),
            });
        }

        let dest = self.temp_root.join(appliance.name()).join(short_id(&id));
        let strategy = self.run_strategies(&id, path, &dest)?;

        if self.fs.is_empty_dir(&dest) {
            return Err(ContainerError::EmptyExtraction {
                path: dest.display().to_string(),
            });
        }

        let targets = self.enumerate(appliance, &dest)?;
        tracing::info!(
            appliance = appliance.name(),
            strategy,
            files = targets.len(),
            "extracted container rules"
        );
        Ok(targets)
    }

    fn resolve(&self, reference: &str) -> Result<String, ContainerError> {
        if let Some(id) = self.runtime.inspect_id(reference)? {
            return Ok(id);
        }
        self.runtime
            .find_by_name(reference)?
            .ok_or_else(|| ContainerError::NotFound {
                reference: reference.to_string(),
            })
    }

    fn reset_dir(&self, dest: &Path) -> Result<(), ContainerError> {
        self.fs.remove_dir_all(dest).map_err(fs_to_container)?;
        self.fs.create_dir_all(dest).map_err(fs_to_container)
    }

    /// Try each strategy on a fresh destination; returns the one that worked
    fn run_strategies(
        &self,
        id: &str,
        source: &str,
        dest: &Path,
    ) -> Result<&'static str, ContainerError> {
        let mut last = String::from("no extraction strategies configured");

        for strategy in self.strategies {
            self.reset_dir(dest)?;
            tracing::debug!(strategy = strategy.name(), id = short_id(id), source, "trying extraction");
            match strategy.extract(id, source, dest) {
                Ok(()) => return Ok(strategy.name()),
                Err(e) => {
                    tracing::warn!(strategy = strategy.name(), error = %e, "extraction method failed");
                    last = e.to_string();
                }
            }
        }

        Err(ContainerError::AllStrategiesFailed { last })
    }

    fn enumerate(
        &self,
        appliance: &ApplianceDescriptor,
        dest: &Path,
    ) -> Result<Vec<DiscoveredTarget>, ContainerError> {
        let files = self.fs.walk_files(dest).map_err(fs_to_container)?;
        Ok(files
            .into_iter()
            .filter(|file| appliance.extension().accepts(file))
            .filter_map(|file| {
                let rel = relative_to(dest, &file)?;
                Some(DiscoveredTarget::container(file, appliance.name(), rel))
            })
            .collect())
    }
}

fn fs_to_container(err: FsError) -> ContainerError {
    match err {
        FsError::Io(e) => ContainerError::Io(e),
        other => ContainerError::Io(std::io::Error::other(other.to_string())),
    }
}
