//! rulesnap CLI - incremental collector for IDS/IPS and WAF rule files
//!
//! Usage: rulesnap [COMMAND]
//!
//! Commands:
//!   collect      Discover, fingerprint and copy changed rule files (default)
//!   clear-cache  Delete the path cache, hash record and temp area
//!   appliances   List configured appliances

mod cli;
mod commands;
mod logging;
mod ui;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use rulesnap::RulesnapError;

use crate::cli::{Cli, Commands};
use crate::commands::collect::INTERRUPTED_EXIT_CODE;
use crate::commands::GlobalArgs;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::terminal::detect_capabilities;

fn run(cli: &Cli) -> Result<()> {
    let args = GlobalArgs::from(cli);
    match cli.command_or_default() {
        Commands::Collect { force } => commands::collect::cmd_collect(&args, force),
        Commands::ClearCache => commands::clean::cmd_clear_cache(&args),
        Commands::Appliances => commands::appliances::cmd_appliances(&args),
    }
}

fn is_interrupted(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<RulesnapError>(),
            Some(RulesnapError::Interrupted)
        )
    })
}

fn report_error(err: &anyhow::Error) {
    let caps = detect_capabilities();
    let color = caps.supports_color && !caps.is_ci;
    eprintln!(
        "{} {}",
        Icon::Error.colored(color, caps.supports_unicode),
        ColoredText::error(format!("{:#}", err)).render(color)
    );
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.json);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if is_interrupted(&err) => {
            eprintln!("Interrupted.");
            ExitCode::from(INTERRUPTED_EXIT_CODE)
        }
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn interruption_is_detected_through_context() {
        let err = Err::<(), _>(RulesnapError::Interrupted)
            .context("collection failed")
            .unwrap_err();
        assert!(is_interrupted(&err));
    }

    #[test]
    fn other_errors_are_not_interruptions() {
        let err = anyhow::Error::new(RulesnapError::RunLocked {
            path: "out/.rulesnap.lock".into(),
        });
        assert!(!is_interrupted(&err));
    }
}
