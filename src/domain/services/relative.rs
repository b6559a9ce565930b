//! Destination-relative path computation
//!
//! Files matched by exact patterns (e.g. single Zeek policy scripts) are
//! placed under the output tree by locating an anchor component in their
//! path and keeping everything after it. Files found by walking a matched
//! directory are placed relative to that directory.

use std::path::{Component, Path};

/// How a destination-relative path was derived
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchoredPath {
    /// The anchor component was found; the path is what follows it
    Anchored(String),
    /// No anchor (or nothing after it); the bare file name is used
    BaseName(String),
}

impl AnchoredPath {
    pub fn as_str(&self) -> &str {
        match self {
            AnchoredPath::Anchored(s) | AnchoredPath::BaseName(s) => s,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            AnchoredPath::Anchored(s) | AnchoredPath::BaseName(s) => s,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, AnchoredPath::BaseName(_))
    }
}

/// Compute the destination-relative path of `path` after the first component
/// equal (ASCII case-insensitive) to `anchor`, joined with `/`.
///
/// Falls back to the file name when the anchor is missing. The fallback can
/// collide across source directories; callers log it.
pub fn anchor_relative(path: &Path, anchor: &str) -> AnchoredPath {
    let parts: Vec<String> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    let anchor = anchor.trim_matches(|c| c == '/' || c == '\\');
    if !anchor.is_empty() {
        if let Some(pos) = parts.iter().position(|p| p.eq_ignore_ascii_case(anchor)) {
            let rest = &parts[pos + 1..];
            if !rest.is_empty() {
                return AnchoredPath::Anchored(rest.join("/"));
            }
        }
    }

    AnchoredPath::BaseName(parts.last().cloned().unwrap_or_default())
}

/// Forward-slash path of `file` relative to `base`, if `file` is under it
pub fn relative_to(base: &Path, file: &Path) -> Option<String> {
    let rel = file.strip_prefix(base).ok()?;
    let parts: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}
