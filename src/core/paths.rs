// src/core/paths.rs

use crate::constants::{APP_NAME, DEFAULT_EMACS_CONFIG_DIRNAME};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while locating or normalizing paths.
#[derive(Error, Debug)]
pub enum PathError {
    /// No home directory could be determined.
    #[error("Could not find the user's home directory.")]
    HomeDirNotFound,
    /// `~` or `$VAR` expansion failed, typically on an unset variable.
    #[error("Failed to expand path '{path}': {message}")]
    Expansion {
        /// The path as given.
        path: String,
        /// What went wrong.
        message: String,
    },
    /// The current directory was needed and is unavailable.
    #[error("Could not make path '{path}' absolute: {source}")]
    Absolute {
        /// The expanded path.
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Returns the home directory joined with the provided path parts.
pub fn home_dir_path(parts: &[&str]) -> Result<PathBuf, PathError> {
    let home_dir = dirs::home_dir().ok_or(PathError::HomeDirNotFound)?;
    Ok(parts.iter().fold(home_dir, |path, part| path.join(part)))
}

/// Returns the default application directory (`~/.config/emacsctl`).
pub fn default_app_dir() -> Result<PathBuf, PathError> {
    home_dir_path(&[".config", APP_NAME])
}

/// Returns the emacs configuration directory used by a fresh state (`~/.emacs.d`).
pub fn default_emacs_config_dir() -> Result<PathBuf, PathError> {
    home_dir_path(&[DEFAULT_EMACS_CONFIG_DIRNAME])
}

/// Expands a user supplied path, resolving the home directory (`~`) and
/// environment variables (`$VAR`).
///
/// # Errors
/// Returns an error if the path references an undefined environment variable.
pub fn expand_path(template: &str) -> Result<PathBuf, PathError> {
    // `shellexpand::full` handles both home dir and env vars across platforms.
    let expanded = shellexpand::full(template).map_err(|e| PathError::Expansion {
        path: template.to_string(),
        message: e.to_string(),
    })?;
    Ok(PathBuf::from(expanded.into_owned()))
}

/// Expands a user supplied directory and anchors it to the current directory
/// when it is relative. The directory does not need to exist.
pub fn expand_absolute_path(template: &str) -> Result<PathBuf, PathError> {
    let expanded = expand_path(template)?;
    if expanded.is_absolute() {
        return Ok(expanded);
    }
    std::path::absolute(&expanded).map_err(|e| PathError::Absolute {
        path: expanded.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_path_resolves_environment_variables() {
        // PATH is always defined in test environments.
        let path_var = std::env::var("PATH").unwrap();
        let expanded = expand_path("$PATH").unwrap();
        assert_eq!(expanded, PathBuf::from(path_var));
    }

    #[test]
    fn test_expand_path_rejects_undefined_variables() {
        let result = expand_path("$EMACSCTL_SURELY_UNDEFINED_VARIABLE/dir");
        assert!(matches!(result, Err(PathError::Expansion { .. })));
    }

    #[test]
    fn test_expand_absolute_path_anchors_relative_paths() {
        let expanded = expand_absolute_path("some/config").unwrap();
        assert!(expanded.is_absolute());
        assert!(expanded.ends_with("some/config"));
    }

    #[test]
    fn test_default_dirs_live_under_home() {
        let home = dirs::home_dir().unwrap();
        assert_eq!(default_app_dir().unwrap(), home.join(".config").join("emacsctl"));
        assert_eq!(default_emacs_config_dir().unwrap(), home.join(".emacs.d"));
    }
}
