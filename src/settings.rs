// src/settings.rs

use crate::constants::{CACHE_DIRNAME, STATE_FILENAME};
use crate::core::paths::{self, PathError};
use std::path::PathBuf;

/// Run-wide options chosen on the command line.
///
/// Built once by the binary and passed by reference to every handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// The application directory holding the state file and repository cache.
    pub app_dir: PathBuf,
    /// Print what would happen instead of touching the state, cache or processes.
    pub dry_run: bool,
    /// Print a confirmation line for every successful mutation.
    pub verbose: bool,
}

impl Settings {
    /// Creates settings rooted at `app_dir` with every switch off.
    pub fn new(app_dir: impl Into<PathBuf>) -> Self {
        Self {
            app_dir: app_dir.into(),
            dry_run: false,
            verbose: false,
        }
    }

    /// Resolves the application directory from an optional user supplied value,
    /// falling back to `~/.config/emacsctl`.
    pub fn resolve(app_dir: Option<&str>, dry_run: bool, verbose: bool) -> Result<Self, PathError> {
        let app_dir = match app_dir {
            Some(dir) => paths::expand_path(dir)?,
            None => paths::default_app_dir()?,
        };
        Ok(Self {
            app_dir,
            dry_run,
            verbose,
        })
    }

    /// Path of the application state file.
    pub fn state_path(&self) -> PathBuf {
        self.app_dir.join(STATE_FILENAME)
    }

    /// Path of the repository cache directory.
    pub fn cache_dir(&self) -> PathBuf {
        self.app_dir.join(CACHE_DIRNAME)
    }
}
