//! Appliance entity - a named security device whose rule files are collected
//!
//! Descriptors are built once from configuration, validated, and never
//! mutated afterwards. The registry keeps them in configuration order.

use crate::domain::value_objects::{ApplianceKind, ExtensionFilter};
use crate::error::{RulesnapError, RulesnapResult};

/// Where an appliance's files come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplianceSource {
    /// Glob patterns or exact relative paths searched on the host
    Local { search: Vec<String> },
    /// A directory inside a container
    Container { container: String, path: String },
}

/// Validated appliance descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplianceDescriptor {
    name: String,
    extension: ExtensionFilter,
    source: ApplianceSource,
}

impl ApplianceDescriptor {
    /// Create a host-filesystem appliance
    pub fn local(
        name: impl Into<String>,
        search: Vec<String>,
        extension: &str,
    ) -> RulesnapResult<Self> {
        Self::validated(
            name.into(),
            ExtensionFilter::new(extension),
            ApplianceSource::Local { search },
        )
    }

    /// Create a container-hosted appliance
    pub fn container(
        name: impl Into<String>,
        container: impl Into<String>,
        path: impl Into<String>,
        extension: &str,
    ) -> RulesnapResult<Self> {
        Self::validated(
            name.into(),
            ExtensionFilter::new(extension),
            ApplianceSource::Container {
                container: container.into(),
                path: path.into(),
            },
        )
    }

    fn validated(
        name: String,
        extension: ExtensionFilter,
        source: ApplianceSource,
    ) -> RulesnapResult<Self> {
        let invalid = |reason: &str| RulesnapError::InvalidAppliance {
            name: name.clone(),
            reason: reason.to_string(),
        };

        if name.trim().is_empty() {
            return Err(invalid("name must not be empty"));
        }

        match &source {
            ApplianceSource::Local { search } => {
                if search.iter().all(|s| s.trim().is_empty()) {
                    return Err(invalid(
                        "local appliances need at least one search pattern",
                    ));
                }
            }
            ApplianceSource::Container { container, path } => {
                if container.trim().is_empty() {
                    return Err(invalid("container appliances need a container name or id"));
                }
                if path.trim().is_empty() {
                    return Err(invalid("container appliances need a path inside the container"));
                }
                if !path.starts_with('/') {
                    return Err(invalid("container path must be absolute"));
                }
            }
        }

        Ok(Self {
            name,
            extension,
            source,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ApplianceKind {
        match self.source {
            ApplianceSource::Local { .. } => ApplianceKind::Local,
            ApplianceSource::Container { .. } => ApplianceKind::Container,
        }
    }

    pub fn extension(&self) -> &ExtensionFilter {
        &self.extension
    }

    pub fn source(&self) -> &ApplianceSource {
        &self.source
    }

    /// Non-empty search specs (empty for container appliances)
    pub fn search_specs(&self) -> Vec<&str> {
        match &self.source {
            ApplianceSource::Local { search } => search
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .collect(),
            ApplianceSource::Container { .. } => Vec::new(),
        }
    }
}

/// Ordered, immutable collection of appliance descriptors
#[derive(Debug, Clone, Default)]
pub struct ApplianceRegistry {
    appliances: Vec<ApplianceDescriptor>,
}

impl ApplianceRegistry {
    /// Build a registry, rejecting duplicate names
    pub fn new(appliances: Vec<ApplianceDescriptor>) -> RulesnapResult<Self> {
        for (i, appliance) in appliances.iter().enumerate() {
            if appliances[..i].iter().any(|a| a.name == appliance.name) {
                return Err(RulesnapError::DuplicateAppliance {
                    name: appliance.name.clone(),
                });
            }
        }
        Ok(Self { appliances })
    }

    pub fn get(&self, name: &str) -> Option<&ApplianceDescriptor> {
        self.appliances.iter().find(|a| a.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ApplianceDescriptor> {
        self.appliances.iter()
    }

    pub fn len(&self) -> usize {
        self.appliances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appliances.is_empty()
    }
}
