//! Domain Entities
//!
//! - `ApplianceDescriptor` / `ApplianceRegistry` - What to collect and from where
//! - `DiscoveredTarget` - One file slated for hashing and copy
//! - `PathCache` - Previously discovered locations per appliance
//! - `HashRecord` - Last known content digest per source path

mod appliance;
mod hash_record;
mod path_cache;
mod target;

pub use appliance::{ApplianceDescriptor, ApplianceRegistry, ApplianceSource};
pub use hash_record::{ChangeStatus, HashRecord};
pub(crate) use path_cache::normalize_cache_path;
pub use path_cache::{PathCache, PathCacheEntry, VerifyReport};
pub use target::DiscoveredTarget;

pub use crate::domain::value_objects::ApplianceKind;
