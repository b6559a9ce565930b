//! Scan phase
//!
//! Turns the appliance registry into a flat list of discovered targets:
//! - `decision` - whether this run may trust the path cache
//! - `planner` - tiered probing, match conversion, container extraction

mod decision;
mod planner;

pub use decision::{decide_cache_usage, CacheDecision, FullScanReason};
pub use planner::{ScanOutcome, ScanPlanner, SearchSettings};
