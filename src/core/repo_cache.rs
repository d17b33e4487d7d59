// src/core/repo_cache.rs

use crate::system::executor::{self, ExecutionError};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Errors raised while cloning or evicting cached repositories.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Creating or removing a cache directory failed.
    #[error("Filesystem Error: {0}")]
    Io(#[from] std::io::Error),
    /// `git clone` could not be run or failed.
    #[error("Failed to clone repository '{url}': {source}")]
    Clone {
        /// The repository that was being cloned.
        url: String,
        #[source]
        source: ExecutionError,
    },
}

/// Checks whether a configuration location refers to a remote git repository
/// rather than a local directory.
pub fn is_remote_reference(location: &str) -> bool {
    location.starts_with("git@") || location.starts_with("https://")
}

/// Returns where the repository cached under `name` lives.
pub fn repo_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(name)
}

/// Whether something already occupies the cache slot for `name`.
pub fn is_cached(dir: &Path, name: &str) -> bool {
    repo_path(dir, name).exists()
}

/// Clones `url` into `dir/name` and returns the local clone path.
///
/// Callers only fetch for configuration names absent from the state, so a
/// directory already in that slot is a leftover of an earlier removal or an
/// interrupted clone. It is evicted first; `git clone` refuses a non-empty
/// destination.
///
/// # Errors
/// Returns an error if the cache directory cannot be prepared or `git clone`
/// fails.
pub fn fetch(dir: &Path, name: &str, url: &str) -> Result<PathBuf, CacheError> {
    fs::create_dir_all(dir)?;
    let destination = repo_path(dir, name);
    if is_cached(dir, name) {
        log::warn!(
            "Replacing stale cached repository at '{}'.",
            destination.display()
        );
        evict(dir, name)?;
    }

    let argv = vec![
        "git".to_string(),
        "clone".to_string(),
        url.to_string(),
        destination.display().to_string(),
    ];
    log::debug!("Cloning '{}' into '{}'", url, destination.display());
    executor::run(&argv, false).map_err(|e| CacheError::Clone {
        url: url.to_string(),
        source: e,
    })?;

    Ok(destination)
}

/// Removes the repository cached under `name`. Removing a repository that is
/// not cached is not an error.
pub fn evict(dir: &Path, name: &str) -> Result<(), CacheError> {
    let path = repo_path(dir, name);
    if !path.exists() {
        log::warn!(
            "No cached repository at '{}'. Nothing to evict.",
            path.display()
        );
        return Ok(());
    }
    log::debug!("Evicting cached repository '{}'", path.display());
    fs::remove_dir_all(&path)?;
    Ok(())
}
