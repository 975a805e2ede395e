//! Status Classifier Domain Service
//!
//! Maps the text of one log file to a [`Status`] using an ordered
//! [`RuleSet`].

use std::path::Path;

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::{RuleSet, Status};

/// Classifies log content, first matching rule wins.
#[derive(Debug, Clone, Default)]
pub struct StatusClassifier {
    rules: RuleSet,
}

impl StatusClassifier {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Status of the first rule whose pattern occurs in `content`.
    ///
    /// Falls back to `Unknown` when no rule matches, even without a
    /// catch-all rule.
    pub fn classify(&self, content: &str) -> Status {
        self.rules
            .first_match(content)
            .map(|rule| rule.status)
            .unwrap_or(Status::Unknown)
    }

    /// Read `path` and classify it. Read failures classify as `Unknown`.
    pub fn classify_path<F>(&self, fs: &F, path: &Path) -> Status
    where
        F: FileSystem + ?Sized,
    {
        match fs.read_text(path) {
            Ok(content) => self.classify(&content),
            Err(e) => {
                log::debug!("classifying {} as unknown: {}", path.display(), e);
                Status::Unknown
            }
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}
