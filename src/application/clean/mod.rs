//! Clear Cache Use Case
//!
//! Removes both cache files and the container temp tree so the next run
//! starts from a full scan with every file treated as changed.

mod result;
mod use_case;

pub use result::ClearCacheResult;
pub use use_case::ClearCacheUseCase;
