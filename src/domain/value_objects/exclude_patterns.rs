//! Exclude patterns value object
//!
//! Gitignore-style patterns from `[logs] exclude` that hide entries from the
//! log tree.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::Path;

use crate::error::{LogviewError, LogviewResult};

/// Maximum number of patterns allowed
const MAX_PATTERNS: usize = 1000;

/// Compiled exclude patterns.
///
/// Uses the `ignore` crate for gitignore-compatible pattern matching.
/// Paths are matched relative to the log root.
#[derive(Debug, Clone)]
pub struct ExcludePatterns {
    matcher: Gitignore,
    pattern_count: usize,
}

impl Default for ExcludePatterns {
    fn default() -> Self {
        Self::empty()
    }
}

impl ExcludePatterns {
    /// Create an empty pattern set (matches nothing).
    pub fn empty() -> Self {
        Self {
            matcher: Gitignore::empty(),
            pattern_count: 0,
        }
    }

    /// Compile patterns anchored at `root`.
    ///
    /// Blank entries and `#` comments are skipped.
    pub fn new<S: AsRef<str>>(root: &Path, patterns: &[S]) -> LogviewResult<Self> {
        let mut builder = GitignoreBuilder::new(root);
        let mut pattern_count = 0;

        for pattern in patterns {
            let line = pattern.as_ref();
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            pattern_count += 1;
            if pattern_count > MAX_PATTERNS {
                return Err(LogviewError::InvalidExcludePattern {
                    pattern: line.to_string(),
                    message: format!("more than {} patterns", MAX_PATTERNS),
                });
            }

            builder
                .add_line(None, line)
                .map_err(|e| LogviewError::InvalidExcludePattern {
                    pattern: line.to_string(),
                    message: e.to_string(),
                })?;
        }

        let matcher = builder
            .build()
            .map_err(|e| LogviewError::InvalidExcludePattern {
                pattern: String::new(),
                message: e.to_string(),
            })?;

        Ok(Self {
            matcher,
            pattern_count,
        })
    }

    /// Check if a path relative to the log root is excluded.
    pub fn is_excluded(&self, rel_path: &Path, is_dir: bool) -> bool {
        if self.pattern_count == 0 {
            return false;
        }
        self.matcher
            .matched_path_or_any_parents(rel_path, is_dir)
            .is_ignore()
    }

    /// Get the number of patterns loaded.
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// Check if this is an empty pattern set.
    pub fn is_empty(&self) -> bool {
        self.pattern_count == 0
    }
}
