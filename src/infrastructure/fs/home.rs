//! Home directory resolution with test isolation support.
//!
//! The "user home" search tier and the user configuration directory both
//! depend on the home directory. `dirs::home_dir()` ignores environment
//! variables on some platforms, so tests point rulesnap at a scratch
//! directory through `RULESNAP_TEST_HOME` instead.

use std::path::PathBuf;

/// Environment variable for test isolation of home directory.
pub const RULESNAP_TEST_HOME_VAR: &str = "RULESNAP_TEST_HOME";

/// Get the home directory used for `~` expansion in search tiers.
///
/// # Returns
///
/// - `Some(PathBuf)` - `RULESNAP_TEST_HOME` if set, else the system home
/// - `None` - If neither is available
pub fn rulesnap_home_dir() -> Option<PathBuf> {
    std::env::var(RULESNAP_TEST_HOME_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
}
