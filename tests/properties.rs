//! Property tests for rulesnap.
//!
//! Randomized inputs guard the pure helpers the scan and sync phases rely
//! on: anchor-relative paths and target de-duplication.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/anchor.rs"]
mod anchor;

#[path = "properties/dedup.rs"]
mod dedup;
