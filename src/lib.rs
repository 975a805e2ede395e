//! logview - browser viewer for deployment log trees
//!
//! Walks a directory of log files, classifies each file by its content
//! (failure, override, retry, success), rolls statuses up to folders by a
//! severity order, and serves the tree to a browser with ANSI colors
//! rendered as HTML.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::LogBrowser;
pub use config::Config;
pub use domain::entities::{DirectoryNode, FileNode, TreeNode};
pub use domain::services::{ansi_to_html, AnsiConverter, StatusClassifier, TreeAggregator};
pub use domain::value_objects::{ClassificationRule, RuleSet, SeverityOrder, Status};
pub use error::{LogviewError, LogviewResult};
