//! Common test utilities for emacsctl integration tests.
//!
//! Provides `TestEnv` for isolated test environments that never touch the
//! user's `~/.config/emacsctl` directory.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
pub use tempfile::TempDir;

/// A test environment with isolated directories.
///
/// - `home_dir`: used as `$HOME`, so the default `~/.emacs.d` is predictable
/// - `app_dir`: holds the state file (via `EMACSCTL_DIR`)
pub struct TestEnv {
    pub home_dir: TempDir,
    pub app_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home_dir: TempDir::new().unwrap(),
            app_dir: TempDir::new().unwrap(),
        }
    }

    /// Get a Command for the emacsctl binary bound to this environment.
    pub fn emacsctl(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_emacsctl"));
        cmd.current_dir(self.home_dir.path());
        cmd.env("HOME", self.home_dir.path());
        cmd.env("EMACSCTL_DIR", self.app_dir.path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("RUST_LOG");
        cmd
    }

    pub fn home_path(&self) -> &Path {
        self.home_dir.path()
    }

    pub fn state_path(&self) -> PathBuf {
        self.app_dir.path().join("state.json")
    }

    /// Reads the persisted state document as JSON.
    pub fn state_json(&self) -> serde_json::Value {
        let text = std::fs::read_to_string(self.state_path()).unwrap();
        serde_json::from_str(&text).unwrap()
    }

    /// The default configuration directory under the fake home.
    pub fn default_config_dir(&self) -> String {
        self.home_path().join(".emacs.d").display().to_string()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
