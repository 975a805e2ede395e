//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::PathBuf;

use crate::application::LogBrowser;
use crate::config::Config;
use crate::domain::services::{AnsiConverter, StatusClassifier, TreeAggregator};
use crate::domain::value_objects::ExcludePatterns;
use crate::error::LogviewResult;
use crate::infrastructure::LocalFs;

/// Type alias for the LogBrowser backed by the local disk
pub type ConcreteLogBrowser = LogBrowser<LocalFs>;

/// Create a log browser for the configured root.
pub fn create_log_browser(config: &Config) -> LogviewResult<ConcreteLogBrowser> {
    create_log_browser_at(config, config.log_root())
}

/// Create a log browser for an explicit root, keeping the rest of `config`.
pub fn create_log_browser_at(config: &Config, root: PathBuf) -> LogviewResult<ConcreteLogBrowser> {
    let excludes = ExcludePatterns::new(&root, &config.logs.exclude)?;
    let classifier = StatusClassifier::new(config.status.rules.clone());
    let aggregator = TreeAggregator::new(LocalFs::new(), classifier, config.status.order.clone())
        .with_excludes(excludes);
    let converter = AnsiConverter::new().with_html_escaping(config.render.escape_html);

    Ok(LogBrowser::new(root, aggregator, converter))
}
