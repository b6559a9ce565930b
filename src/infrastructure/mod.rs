//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system and glob prober
//! - `repositories/` - JSON cache repositories (path cache, hash record)
//! - `container/` - Docker CLI runtime and extraction strategies
//! - `events/` - Event sinks for machine-readable progress
//! - `lock` - Exclusive run lock on the output directory

pub mod container;
pub mod events;
pub mod fs;
pub mod lock;
pub mod repositories;

// Re-export for convenience
pub use container::{default_strategies, DockerCli, DockerCopy, TarStream};
pub use events::JsonEventSink;
pub use fs::{GlobProber, LocalFs};
pub use lock::RunLock;
pub use repositories::{JsonHashRecordRepository, JsonPathCacheRepository};
