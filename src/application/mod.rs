//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CollectUseCase` - One collection run (load, decide, scan, sync, persist)
//! - `ClearCacheUseCase` - Remove cache files and the temp tree
//!
//! ## Phases
//!
//! - `scan` - Cache decision and `ScanPlanner`
//! - `extract` - `ContainerExtractor`
//! - `sync` - `SyncExecutor`

pub mod clean;
pub mod collect;
pub mod extract;
pub mod scan;
pub mod sync;

pub use clean::{ClearCacheResult, ClearCacheUseCase};
pub use collect::{CollectOptions, CollectUseCase, CollectionResult};
pub use extract::{ContainerExtractor, TEMP_DIR};
pub use scan::{decide_cache_usage, CacheDecision, ScanOutcome, ScanPlanner, SearchSettings};
pub use sync::{SyncExecutor, SyncOutcome};
