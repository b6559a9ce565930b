//! File System Implementations
//!
//! Concrete implementations of the FileSystem and Prober ports.

mod home;
mod local;
mod prober;

pub use home::{rulesnap_home_dir, RULESNAP_TEST_HOME_VAR};
pub use local::LocalFs;
pub use prober::GlobProber;
