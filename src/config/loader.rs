//! Configuration discovery and loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LogviewError, LogviewResult};

use super::types::Config;

/// Project-local config file name
pub const LOCAL_CONFIG_FILE: &str = "logview.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> LogviewResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| LogviewError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// First existing config file: `./logview.toml`, then the user config.
pub fn discover(cwd: &Path) -> Option<PathBuf> {
    let local = cwd.join(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }

    let user = dirs_config_dir()?.join("logview/config.toml");
    user.is_file().then_some(user)
}

/// Explicit file, discovered file, or defaults; env overrides on top.
pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> LogviewResult<(Config, Vec<ConfigWarning>)> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => discover(cwd),
    };

    let (config, warnings) = match path {
        Some(path) => {
            log::debug!("loading config from {}", path.display());
            load_with_warnings(&path)?
        }
        None => (Config::default(), Vec::new()),
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (LOGVIEW_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from any key lookup.
pub fn apply_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(root) = lookup("LOGVIEW_ROOT") {
        config.logs.root = PathBuf::from(root);
    }

    if let Some(port) = lookup("LOGVIEW_PORT") {
        match port.trim().parse::<u16>() {
            Ok(port) => config.server.port = port,
            Err(_) => log::warn!("ignoring LOGVIEW_PORT={:?}: not a port number", port),
        }
    }

    if let Some(bind) = lookup("LOGVIEW_BIND") {
        config.server.bind = bind;
    }

    if let Some(val) = lookup("LOGVIEW_ESCAPE_HTML") {
        config.render.escape_html = parse_flag(&val);
    }

    if let Some(val) = lookup("LOGVIEW_OPEN") {
        config.server.open_browser = parse_flag(&val);
    }

    config
}

fn parse_flag(val: &str) -> bool {
    let val = val.trim().to_lowercase();
    val != "false" && val != "0" && !val.is_empty()
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "server",
        "bind",
        "port",
        "open_browser",
        "logs",
        "root",
        "title",
        "exclude",
        "status",
        "order",
        "rules",
        "pattern",
        "render",
        "escape_html",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
