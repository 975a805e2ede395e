mod render;
mod serve;
mod tree;

use std::path::Path;

use anyhow::Result;
use logview::{Config, LogviewError};

pub use render::cmd_render;
pub use serve::cmd_serve;
pub use tree::cmd_tree;

/// Resolve configuration and report unknown keys.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<Config> {
    let (config, warnings) = Config::resolve(explicit, cwd)?;
    for warning in &warnings {
        log::warn!("{warning}");
    }
    Ok(config)
}

fn ensure_log_root(root: &Path) -> Result<()> {
    if !root.is_dir() {
        return Err(LogviewError::DirectoryNotFound {
            path: root.to_path_buf(),
        }
        .into());
    }
    Ok(())
}
