//! Configuration module for logview
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (LOGVIEW_*)
//! 3. `--config <file>` if given, else `./logview.toml`
//! 4. User config (~/.config/logview/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_overrides, discover, with_env_overrides, ConfigWarning, LOCAL_CONFIG_FILE,
};
pub use types::{Config, LogsConfig, RenderConfig, ServerConfig, StatusConfig};
