//! File extension filter
//!
//! Appliances optionally restrict collected files to one extension. The
//! comparison is ASCII case-insensitive and an empty extension accepts
//! every file.

use std::path::Path;

/// Extension filter applied to discovered files
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtensionFilter(Option<String>);

impl ExtensionFilter {
    /// Build a filter from a configured extension (`""`, `"rules"` or `".rules"`)
    pub fn new(extension: &str) -> Self {
        let ext = extension.trim().trim_start_matches('.');
        if ext.is_empty() {
            Self(None)
        } else {
            Self(Some(ext.to_ascii_lowercase()))
        }
    }

    /// The normalized extension, if any
    pub fn extension(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Check whether a file name passes the filter
    pub fn accepts(&self, path: &Path) -> bool {
        let Some(ext) = &self.0 else {
            return true;
        };
        path.file_name()
            .map(|name| {
                let name = name.to_string_lossy().to_ascii_lowercase();
                name.strip_suffix(ext.as_str())
                    .is_some_and(|stem| stem.ends_with('.'))
            })
            .unwrap_or(false)
    }
}
