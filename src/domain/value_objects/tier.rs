//! Search tier value object
//!
//! A tier is a named group of base directories probed together. Tiers are
//! tried in order and the first tier with any match ends the search.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A named group of candidate base directories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTier {
    pub name: String,
    pub paths: Vec<PathBuf>,
}

impl SearchTier {
    pub fn new(name: impl Into<String>, paths: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            name: name.into(),
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// The base directories with `~` expanded against `home`
    pub fn expanded_paths(&self, home: Option<&Path>) -> Vec<PathBuf> {
        self.paths
            .iter()
            .map(|p| expand_tilde(p, home))
            .collect()
    }
}

fn expand_tilde(path: &Path, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return path.to_path_buf();
    };
    let s = path.to_string_lossy();
    if s == "~" {
        home.to_path_buf()
    } else if let Some(rest) = s.strip_prefix("~/") {
        home.join(rest)
    } else {
        path.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_home_entries() {
        let tier = SearchTier::new("user home", ["~", "~/opt", "/etc"]);
        let expanded = tier.expanded_paths(Some(Path::new("/home/ops")));
        assert_eq!(
            expanded,
            vec![
                PathBuf::from("/home/ops"),
                PathBuf::from("/home/ops/opt"),
                PathBuf::from("/etc"),
            ]
        );
    }

    #[test]
    fn leaves_tilde_without_home() {
        let tier = SearchTier::new("user home", ["~"]);
        assert_eq!(tier.expanded_paths(None), vec![PathBuf::from("~")]);
    }
}
