//! Tracing subscriber setup for the rulesnap binary.
//!
//! Diagnostics go to stderr so `--json` output on stdout stays machine
//! readable. `RULESNAP_LOG` takes the usual `EnvFilter` directives and wins
//! over the verbosity flag.

use is_terminal::IsTerminal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding filter directives (e.g. `rulesnap=debug`).
pub const LOG_ENV_VAR: &str = "RULESNAP_LOG";

/// Default directive for a given `-v` count. An interactive terminal starts
/// at `warn` because the progress line already reports each phase.
fn default_directive(verbose: u8, interactive: bool) -> &'static str {
    match (verbose, interactive) {
        (0, true) => "rulesnap=warn",
        (0, false) => "rulesnap=info",
        (1, _) => "rulesnap=debug",
        _ => "rulesnap=trace",
    }
}

fn build_env_filter(verbose: u8, interactive: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, interactive)))
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(verbose: u8, json: bool) {
    let ansi = !json && std::io::stderr().is_terminal();
    let interactive = ansi && std::env::var_os("CI").is_none();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose > 0)
        .with_ansi(ansi)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(build_env_filter(verbose, interactive))
        .with(fmt_layer)
        .try_init();
}
