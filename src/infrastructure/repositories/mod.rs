//! Repository Implementations
//!
//! JSON-backed persistence for the path cache and the hash record. Both live
//! directly under the output root.

mod hash_record;
mod json;
mod path_cache;

pub use hash_record::JsonHashRecordRepository;
pub use path_cache::JsonPathCacheRepository;

/// File name of the path cache inside the output root
pub const PATH_CACHE_FILE: &str = "path_cache.json";

/// File name of the hash record inside the output root
pub const HASH_RECORD_FILE: &str = "file_hashes.json";
