//! CLI Argument Parsing
//!
//! Global flags (--config, --output, --json, --color, --verbose) are
//! inherited by every subcommand. Running without a subcommand collects.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// rulesnap - incremental collector for IDS/IPS and WAF rule files
#[derive(Parser, Debug)]
#[command(name = "rulesnap")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'rulesnap' without a subcommand to collect incrementally.")]
pub struct Cli {
    /// Configuration file (default: ./rulesnap.toml, then the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output directory for collected files and caches
    #[arg(short, long, global = true, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Emit machine-readable JSON on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Discover, fingerprint and copy changed rule files
    Collect {
        /// Ignore the path cache and rescan every appliance
        #[arg(short, long)]
        force: bool,
    },

    /// Delete the path cache, the hash record and the extraction temp area
    ClearCache,

    /// List configured appliances
    Appliances,
}

impl Cli {
    /// The subcommand to run, defaulting to an incremental collect
    pub fn command_or_default(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Collect { force: false })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_defaults_to_collect() {
        let cli = Cli::try_parse_from(["rulesnap"]).unwrap();
        assert_eq!(cli.command_or_default(), Commands::Collect { force: false });
    }

    #[test]
    fn collect_force_flag() {
        let cli = Cli::try_parse_from(["rulesnap", "collect", "--force"]).unwrap();
        assert_eq!(cli.command_or_default(), Commands::Collect { force: true });
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "rulesnap",
            "clear-cache",
            "--output",
            "/tmp/out",
            "--json",
            "-vv",
            "--color",
            "never",
        ])
        .unwrap();
        assert_eq!(cli.command, Some(Commands::ClearCache));
        assert_eq!(cli.output, Some(PathBuf::from("/tmp/out")));
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.color, Some(ColorWhen::Never));
    }

    #[test]
    fn config_flag_parses_path() {
        let cli = Cli::try_parse_from(["rulesnap", "--config", "custom.toml", "appliances"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert_eq!(cli.command, Some(Commands::Appliances));
    }

    #[test]
    fn unknown_color_value_is_rejected() {
        assert!(Cli::try_parse_from(["rulesnap", "--color", "sometimes"]).is_err());
    }
}
