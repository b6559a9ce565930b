//! rulesnap - incremental collector for security appliance rule files
//!
//! rulesnap locates the rule and policy files of IDS/IPS and WAF appliances,
//! either on the local filesystem or inside running containers, fingerprints
//! them and mirrors whatever changed into an output tree. Repeated runs reuse a
//! path cache so only the first run pays for a full filesystem search.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::clean::{ClearCacheResult, ClearCacheUseCase};
pub use application::collect::{CollectOptions, CollectUseCase, CollectionResult};
pub use config::{Config, ConfigWarning};
pub use domain::entities::{ApplianceDescriptor, ApplianceKind, ApplianceRegistry, DiscoveredTarget};
pub use error::{RulesnapError, RulesnapResult};
