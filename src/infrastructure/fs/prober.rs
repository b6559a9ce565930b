//! Glob-based prober
//!
//! Implements the Prober port by walking each base directory with `walkdir`
//! and matching base-relative paths against `glob::Pattern`s. `**` crosses
//! directory boundaries and a trailing separator restricts matches to
//! directories. Symlinks are reported but never descended, so link cycles
//! (such as `/proc/self/root`) cannot make the walk unbounded.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern, PatternError};
use walkdir::WalkDir;

use crate::domain::ports::Prober;

/// Prober backed by a directory walk and glob pattern matching
#[derive(Debug, Clone, Copy)]
pub struct GlobProber {
    options: MatchOptions,
}

impl GlobProber {
    pub fn new() -> Self {
        Self {
            options: MatchOptions {
                case_sensitive: true,
                require_literal_separator: true,
                require_literal_leading_dot: true,
            },
        }
    }

    fn probe_pair(&self, base: &Path, pattern: &str) -> Result<Vec<PathBuf>, PatternError> {
        let dirs_only = pattern.ends_with('/') || pattern.ends_with('\\');
        let relative = pattern
            .trim_start_matches(['/', '\\'])
            .trim_end_matches(['/', '\\']);
        if relative.is_empty() {
            return Ok(Vec::new());
        }

        let keep = |path: &Path| path.exists() && (!dirs_only || path.is_dir());

        // Literal patterns need no walk.
        if Pattern::escape(relative) == relative {
            let candidate = base.join(relative);
            return Ok(if keep(&candidate) {
                vec![candidate]
            } else {
                Vec::new()
            });
        }

        let compiled = Pattern::new(relative)?;
        let mut walker = WalkDir::new(base).min_depth(1).sort_by_file_name();
        if !relative.contains("**") {
            walker = walker.max_depth(Path::new(relative).components().count());
        }

        let mut matches = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!(error = %e, "skipping unreadable path during probe");
                    continue;
                }
            };
            let Ok(rel) = entry.path().strip_prefix(base) else {
                continue;
            };
            if compiled.matches_path_with(rel, self.options) && keep(entry.path()) {
                matches.push(entry.into_path());
            }
        }
        Ok(matches)
    }
}

impl Default for GlobProber {
    fn default() -> Self {
        Self::new()
    }
}

impl Prober for GlobProber {
    fn probe(&self, patterns: &[&str], bases: &[PathBuf]) -> Vec<PathBuf> {
        let mut seen = HashSet::new();
        let mut found = Vec::new();

        for base in bases {
            for pattern in patterns {
                let matches = match self.probe_pair(base, pattern) {
                    Ok(matches) => matches,
                    Err(e) => {
                        tracing::warn!(
                            base = %base.display(),
                            pattern = %pattern,
                            error = %e,
                            "pattern search failed"
                        );
                        continue;
                    }
                };

                for path in matches {
                    let abs = absolutize(&path);
                    if seen.insert(abs.clone()) {
                        found.push(abs);
                    }
                }
            }
        }

        found
    }
}

fn absolutize(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
