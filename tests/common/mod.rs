//! Common test utilities for logview CLI tests.
//!
//! Provides `TestEnv`: a temp working directory holding a `logs/` tree,
//! an isolated config home, and helpers to run the logview binary.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

const ENV_OVERRIDES: &[&str] = &[
    "LOGVIEW_ROOT",
    "LOGVIEW_PORT",
    "LOGVIEW_BIND",
    "LOGVIEW_ESCAPE_HTML",
    "LOGVIEW_OPEN",
    "RUST_LOG",
];

/// Result of running a logview CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated working directory with a log tree under `logs/`.
pub struct TestEnv {
    pub work_dir: TempDir,
    pub config_home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let env = Self {
            work_dir: tempfile::tempdir().unwrap(),
            config_home: tempfile::tempdir().unwrap(),
        };
        std::fs::create_dir_all(env.logs_dir()).unwrap();
        env
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.work_dir.path().join("logs")
    }

    /// Write a log file relative to `logs/`, creating parent folders.
    pub fn write_log(&self, relative: &str, content: &str) -> &Self {
        let path = self.logs_dir().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
        self
    }

    /// Write `logview.toml` in the working directory.
    pub fn write_config(&self, content: &str) -> &Self {
        std::fs::write(self.work_dir.path().join("logview.toml"), content).unwrap();
        self
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_logview"));
        cmd.current_dir(self.work_dir.path())
            .args(args)
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("NO_COLOR", "1");
        for key in ENV_OVERRIDES {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute logview");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.work_dir.path().join(relative)
    }
}

/// Parse `tree --json` output.
pub fn parse_tree(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout).unwrap_or_else(|e| panic!("invalid JSON ({e}):\n{stdout}"))
}

/// Find a child node by name in a JSON tree node.
pub fn child<'a>(node: &'a serde_json::Value, name: &str) -> &'a serde_json::Value {
    node["children"]
        .as_array()
        .and_then(|c| c.iter().find(|n| n["name"] == name))
        .unwrap_or_else(|| panic!("no child named {name} in {node}"))
}
