//! Domain Services
//!
//! Pure helpers shared by the scan and sync phases.
//! These services have no I/O dependencies and are easily testable.

mod dedup;
mod relative;

pub use dedup::dedup_by_source;
pub use relative::{anchor_relative, relative_to, AnchoredPath};
