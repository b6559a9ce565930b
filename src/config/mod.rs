//! Configuration module for rulesnap
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (RULESNAP_*)
//! 3. Explicit, project or user config file
//! 4. Built-in defaults (lowest priority)

mod defaults;
mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{resolve, with_env_overrides, ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE};
pub use types::{ApplianceConfig, Config, ContainerConfig, OutputConfig, SearchConfig};
