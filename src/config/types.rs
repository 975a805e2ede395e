//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{RuleSet, SeverityOrder};
use crate::error::LogviewResult;

use super::loader::{self, ConfigWarning};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Open the default browser once the server is listening
    #[serde(default)]
    pub open_browser: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
            open_browser: false,
        }
    }
}

impl ServerConfig {
    /// `bind:port`, suitable for `tiny_http::Server::http`.
    pub fn address(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

/// Log tree configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    /// Directory to browse; `~` is expanded
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Heading above the sidebar tree
    #[serde(default = "default_title")]
    pub title: String,

    /// Gitignore-style patterns hidden from the tree
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            title: default_title(),
            exclude: Vec::new(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("logs")
}

fn default_title() -> String {
    "Mission Deployment Automation Logs".to_string()
}

/// Classification and aggregation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusConfig {
    /// Most dominant first
    #[serde(default)]
    pub order: SeverityOrder,

    /// Evaluated top to bottom, first match wins
    #[serde(default)]
    pub rules: RuleSet,
}

/// File content rendering configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Escape `& < > " '` in log text before inserting color markup
    #[serde(default)]
    pub escape_html: bool,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logs: LogsConfig,

    #[serde(default)]
    pub status: StatusConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> LogviewResult<Self> {
        Self::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> LogviewResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the effective configuration.
    ///
    /// Uses `explicit` when given, otherwise the first discovered config
    /// file, otherwise defaults; environment overrides apply last.
    pub fn resolve(
        explicit: Option<&Path>,
        cwd: &Path,
    ) -> LogviewResult<(Self, Vec<ConfigWarning>)> {
        loader::resolve(explicit, cwd)
    }

    /// Log root with `~` expanded.
    pub fn log_root(&self) -> PathBuf {
        crate::infrastructure::fs::expand_home(&self.logs.root)
    }
}
