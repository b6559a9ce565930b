//! Collect Use Case
//!
//! Orchestrates one collection run:
//! - Loading the path cache and deciding whether to trust it
//! - Scanning appliances (cache, tiered probe, container extraction)
//! - Saving the regenerated path cache
//! - Hashing and copying changed files
//! - Saving the new hash record

mod options;
mod result;
mod use_case;

pub use options::CollectOptions;
pub use result::CollectionResult;
pub use use_case::CollectUseCase;
