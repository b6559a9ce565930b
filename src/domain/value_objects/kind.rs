//! Appliance kind value object - defines where an appliance keeps its files
//!
//! - `Local`: rule files live on the host filesystem
//! - `Container`: rule files live inside a container and must be extracted

use serde::{Deserialize, Serialize};

/// Where an appliance's rule files are hosted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApplianceKind {
    /// Files on the local filesystem, located by search patterns
    #[default]
    Local,
    /// Files inside a container, extracted through the container runtime
    #[serde(alias = "docker")]
    Container,
}

impl ApplianceKind {
    /// Returns true if this appliance is hosted in a container
    pub fn is_container(&self) -> bool {
        matches!(self, ApplianceKind::Container)
    }
}

impl std::fmt::Display for ApplianceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplianceKind::Local => write!(f, "local"),
            ApplianceKind::Container => write!(f, "container"),
        }
    }
}
