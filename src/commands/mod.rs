//! Command handlers for the rulesnap binary.

pub mod appliances;
pub mod clean;
pub mod collect;

use std::path::PathBuf;

use anyhow::{Context, Result};

use rulesnap::config::{self, LoadedConfig};

use crate::cli::{Cli, ColorWhen};
use crate::ui::views::config::render_config_warnings;

/// Flags shared by every subcommand
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub config: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub json: bool,
    pub verbose: u8,
    pub color: Option<ColorWhen>,
}

impl From<&Cli> for GlobalArgs {
    fn from(cli: &Cli) -> Self {
        Self {
            config: cli.config.clone(),
            output: cli.output.clone(),
            json: cli.json,
            verbose: cli.verbose,
            color: cli.color,
        }
    }
}

/// Resolve configuration, apply `--output`, and report unknown keys on stderr
pub(crate) fn load_config(
    args: &GlobalArgs,
    supports_color: bool,
    supports_unicode: bool,
) -> Result<LoadedConfig> {
    let mut loaded =
        config::resolve(args.config.as_deref()).context("failed to load configuration")?;

    if let Some(output) = &args.output {
        loaded.config.output.root = output.clone();
    }

    if !loaded.warnings.is_empty() {
        eprint!(
            "{}",
            render_config_warnings(&loaded.warnings, supports_color, supports_unicode)
        );
    }

    let source = match &loaded.source {
        Some(path) => path.display().to_string(),
        None => "built-in defaults".to_string(),
    };
    tracing::debug!(
        %source,
        output = %loaded.config.output.root.display(),
        "configuration resolved"
    );
    Ok(loaded)
}
