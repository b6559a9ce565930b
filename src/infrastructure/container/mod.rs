//! Container runtime adapters
//!
//! `DockerCli` answers inspection questions by shelling out to the runtime
//! binary. `DockerCopy` and `TarStream` are the two extraction strategies,
//! tried in that order.

mod command;
mod copy;
mod docker;
mod tar_stream;

use std::time::Duration;

pub use copy::DockerCopy;
pub use docker::DockerCli;
pub use tar_stream::TarStream;

use crate::domain::ports::ExtractionStrategy;

/// Default runtime binary
pub const DEFAULT_RUNTIME: &str = "docker";

/// Number of id characters used for temp directory names
pub const SHORT_ID_LEN: usize = 12;

/// Build the ordered strategy list for a runtime binary
///
/// `docker cp` is preferred; the tar stream is the fallback for runtimes or
/// images where `cp` misbehaves.
pub fn default_strategies(runtime: &str, timeout: Duration) -> Vec<Box<dyn ExtractionStrategy>> {
    vec![
        Box::new(DockerCopy::new(runtime)),
        Box::new(TarStream::new(runtime, timeout)),
    ]
}

/// Shorten a container id for display and directory names
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(SHORT_ID_LEN) {
        Some((idx, _)) => &id[..idx],
        None => id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_strategy_order() {
        let strategies = default_strategies("docker", Duration::from_secs(30));
        let names: Vec<_> = strategies.iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["docker-cp", "tar-stream"]);
    }

    #[test]
    fn short_id_truncates_to_twelve() {
        assert_eq!(
            short_id("86e4e41a871c0f3b5a1d9e2c7b6a5f4e3d2c1b0a"),
            "86e4e41a871c"
        );
        assert_eq!(short_id("abc"), "abc");
    }
}
