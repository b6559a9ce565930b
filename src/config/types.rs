//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ApplianceDescriptor, ApplianceRegistry};
use crate::domain::value_objects::{ApplianceKind, SearchTier};
use crate::error::{RulesnapError, RulesnapResult};

use super::defaults;
use super::loader::{self, ConfigWarning};

/// Output location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "defaults::default_output_root")]
    pub root: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: defaults::default_output_root(),
        }
    }
}

/// Host filesystem search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Path component after which destination paths start
    #[serde(default = "defaults::default_anchor")]
    pub anchor: String,

    /// Root of the last-resort probe when no tier matched
    #[serde(default = "defaults::default_full_scan_root")]
    pub full_scan_root: PathBuf,

    #[serde(default = "defaults::default_tiers")]
    pub tiers: Vec<SearchTier>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            anchor: defaults::default_anchor(),
            full_scan_root: defaults::default_full_scan_root(),
            tiers: defaults::default_tiers(),
        }
    }
}

/// Container runtime settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerConfig {
    /// Runtime CLI binary (`docker`, `podman`, ...)
    #[serde(default = "defaults::default_runtime")]
    pub runtime: String,

    #[serde(default = "defaults::default_extract_timeout_secs")]
    pub extract_timeout_secs: u64,
}

impl ContainerConfig {
    pub fn extract_timeout(&self) -> Duration {
        Duration::from_secs(self.extract_timeout_secs)
    }
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            runtime: defaults::default_runtime(),
            extract_timeout_secs: defaults::default_extract_timeout_secs(),
        }
    }
}

/// One `[[appliances]]` entry as written in the file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplianceConfig {
    pub name: String,

    #[serde(default)]
    pub kind: ApplianceKind,

    /// Glob patterns for local appliances
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub search: Vec<String>,

    /// Extension filter; empty accepts every file
    #[serde(default)]
    pub extension: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl TryFrom<&ApplianceConfig> for ApplianceDescriptor {
    type Error = RulesnapError;

    fn try_from(cfg: &ApplianceConfig) -> RulesnapResult<Self> {
        match cfg.kind {
            ApplianceKind::Local => {
                ApplianceDescriptor::local(cfg.name.clone(), cfg.search.clone(), &cfg.extension)
            }
            ApplianceKind::Container => ApplianceDescriptor::container(
                cfg.name.clone(),
                cfg.container.clone().unwrap_or_default(),
                cfg.path.clone().unwrap_or_default(),
                &cfg.extension,
            ),
        }
    }
}

/// Main configuration structure
///
/// A file that declares `[[appliances]]` replaces the stock table rather
/// than extending it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub container: ContainerConfig,

    #[serde(default = "defaults::default_appliances")]
    pub appliances: Vec<ApplianceConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            search: SearchConfig::default(),
            container: ContainerConfig::default(),
            appliances: defaults::default_appliances(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> RulesnapResult<Self> {
        loader::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration from a TOML file and collect unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> RulesnapResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Validate the appliance table into a registry
    pub fn registry(&self) -> RulesnapResult<ApplianceRegistry> {
        let descriptors = self
            .appliances
            .iter()
            .map(ApplianceDescriptor::try_from)
            .collect::<RulesnapResult<Vec<_>>>()?;
        ApplianceRegistry::new(descriptors)
    }

    /// Temp extraction root for container appliances
    pub fn temp_root(&self) -> PathBuf {
        self.output.root.join(crate::application::extract::TEMP_DIR)
    }
}
