//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod cache_repository;
pub mod collect_events;
pub mod container;
pub mod file_system;
pub mod prober;

pub use cache_repository::{CacheError, CacheResult, HashRecordRepository, PathCacheRepository};
pub use collect_events::{CollectEvent, CollectEventSink, NoopEventSink};
pub use container::{ContainerError, ContainerRuntime, ExtractionStrategy};
pub use file_system::{FileSystem, FsError, FsResult};
pub use prober::Prober;
