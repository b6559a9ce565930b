//! Configuration loading
//!
//! Resolution order:
//! 1. `--config <path>` (must exist)
//! 2. `./rulesnap.toml`
//! 3. `<config dir>/rulesnap/config.toml`
//! 4. Built-in defaults
//!
//! Environment variables (`RULESNAP_*`) are applied on top of whichever
//! source won.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RulesnapError, RulesnapResult};

use super::types::Config;

/// Project-local configuration file name
pub const PROJECT_CONFIG_FILE: &str = "rulesnap.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// A resolved configuration and where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
    /// `None` when running on built-in defaults
    pub source: Option<PathBuf>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> RulesnapResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| RulesnapError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| RulesnapError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Find and load the effective configuration
///
/// An explicit path that cannot be read or parsed is fatal, as is a broken
/// file found at one of the implicit locations.
pub fn resolve(explicit: Option<&Path>) -> RulesnapResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => implicit_candidates().into_iter().find(|p| p.is_file()),
    };

    let loaded = match candidate {
        Some(path) => {
            let (config, warnings) = load_with_warnings(&path)?;
            tracing::debug!(path = %path.display(), "loaded configuration");
            LoadedConfig {
                config,
                warnings,
                source: Some(path),
            }
        }
        None => {
            tracing::debug!("no configuration file found, using defaults");
            LoadedConfig {
                config: Config::default(),
                warnings: Vec::new(),
                source: None,
            }
        }
    };

    Ok(LoadedConfig {
        config: with_env_overrides(loaded.config),
        ..loaded
    })
}

fn implicit_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(PROJECT_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("rulesnap").join("config.toml"));
    }
    candidates
}

/// Apply environment variable overrides (RULESNAP_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

pub(super) fn apply_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    // RULESNAP_OUTPUT
    if let Some(root) = var("RULESNAP_OUTPUT").filter(|v| !v.trim().is_empty()) {
        config.output.root = PathBuf::from(root);
    }

    // RULESNAP_CONTAINER_RUNTIME
    if let Some(runtime) = var("RULESNAP_CONTAINER_RUNTIME").filter(|v| !v.trim().is_empty()) {
        config.container.runtime = runtime.trim().to_string();
    }

    // RULESNAP_EXTRACT_TIMEOUT (seconds)
    if let Some(raw) = var("RULESNAP_EXTRACT_TIMEOUT") {
        match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => config.container.extract_timeout_secs = secs,
            _ => tracing::warn!(value = %raw, "ignoring invalid RULESNAP_EXTRACT_TIMEOUT"),
        }
    }

    // RULESNAP_ANCHOR
    if let Some(anchor) = var("RULESNAP_ANCHOR").filter(|v| !v.trim().is_empty()) {
        config.search.anchor = anchor.trim().to_string();
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "output",
        "root",
        "search",
        "anchor",
        "full_scan_root",
        "tiers",
        "name",
        "paths",
        "container",
        "runtime",
        "extract_timeout_secs",
        "appliances",
        "kind",
        "extension",
        "path",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
