use crate::core::paths::{self, PathError};
use crate::models::{ApplicationState, Command, Configuration, EntityKind, Environment};

use std::io::Write;
use std::{fs, path::Path};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Represents the ways an operation on the `ApplicationState` can be refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// The name is already taken within its namespace.
    #[error("{kind} already exists: {name}")]
    AlreadyExists {
        /// The namespace of the conflicting entity.
        kind: EntityKind,
        /// The conflicting name.
        name: String,
    },
    /// The name is unknown within its namespace.
    #[error("{kind} not found: {name}")]
    NotFound {
        /// The namespace that was searched.
        kind: EntityKind,
        /// The name that was not found.
        name: String,
    },
    /// Neither an explicit context nor an active context is available.
    #[error("no environment context specified or active")]
    NoActiveContext,
    /// A positional argument list has the wrong length.
    #[error("unexpected number of arguments: expected {expected}, got {received}")]
    InvalidArgumentCount {
        /// Number of arguments the operation takes.
        expected: usize,
        /// Number of arguments given.
        received: usize,
    },
    /// A positional argument list is shorter than required.
    #[error("minimum number of arguments not met: minimum {minimum}, got {received}")]
    MinimumArgumentCount {
        /// Smallest number of arguments the operation takes.
        minimum: usize,
        /// Number of arguments given.
        received: usize,
    },
}

type StateResult<T> = Result<T, StateError>;

/// Represents errors that can occur while reading or writing the state file.
#[derive(Error, Debug)]
pub enum PersistError {
    /// Reading, writing or creating the parent directory failed.
    #[error("Filesystem Error: {0}")]
    Io(#[from] std::io::Error),
    /// The state path could not be resolved.
    #[error("Path error: {0}")]
    Path(#[from] PathError),
    /// The state file is not a valid state document.
    #[error("Invalid state document: {0}")]
    Json(#[from] serde_json::Error),
    /// The temporary file could not replace the state file.
    #[error("Error with temporary file: {0}")]
    TempFile(#[from] tempfile::PersistError),
}

type PersistResult<T> = Result<T, PersistError>;

fn not_found(kind: EntityKind, name: &str) -> StateError {
    StateError::NotFound {
        kind,
        name: name.to_string(),
    }
}

fn already_exists(kind: EntityKind, name: &str) -> StateError {
    StateError::AlreadyExists {
        kind,
        name: name.to_string(),
    }
}

// --- Lookups ---

/// Whether a command named `name` exists.
pub fn command_exists(state: &ApplicationState, name: &str) -> bool {
    state.commands.contains_key(name)
}

/// Whether a configuration named `name` exists.
pub fn configuration_exists(state: &ApplicationState, name: &str) -> bool {
    state.configurations.contains_key(name)
}

/// Whether an environment named `name` exists.
pub fn environment_exists(state: &ApplicationState, name: &str) -> bool {
    state.environments.contains_key(name)
}

// --- Commands ---

/// Adds a command. The active context is left untouched.
///
/// # Errors
/// Returns `StateError::AlreadyExists` if a command with the same name exists.
pub fn add_command(
    state: &mut ApplicationState,
    name: &str,
    binary_path: &str,
    arguments: Vec<String>,
    description: &str,
) -> StateResult<()> {
    if command_exists(state, name) {
        return Err(already_exists(EntityKind::Command, name));
    }
    state.commands.insert(
        name.to_string(),
        Command {
            binary_path: binary_path.to_string(),
            arguments,
            description: description.to_string(),
        },
    );
    Ok(())
}

/// Removes a command and clears the active context.
///
/// Environments that still reference the command are kept; they fail at
/// resolution time instead.
pub fn remove_command(state: &mut ApplicationState, name: &str) -> StateResult<()> {
    state
        .commands
        .remove(name)
        .ok_or_else(|| not_found(EntityKind::Command, name))?;
    state.active_context.clear();
    Ok(())
}

// --- Configurations ---

/// Adds a configuration and makes its name the active context.
pub fn add_configuration(
    state: &mut ApplicationState,
    name: &str,
    directory_path: &str,
    description: &str,
) -> StateResult<()> {
    if configuration_exists(state, name) {
        return Err(already_exists(EntityKind::Configuration, name));
    }
    state.configurations.insert(
        name.to_string(),
        Configuration {
            directory_path: directory_path.to_string(),
            description: description.to_string(),
        },
    );
    state.active_context = name.to_string();
    Ok(())
}

/// Removes a configuration and clears the active context.
pub fn remove_configuration(state: &mut ApplicationState, name: &str) -> StateResult<()> {
    state
        .configurations
        .remove(name)
        .ok_or_else(|| not_found(EntityKind::Configuration, name))?;
    state.active_context.clear();
    Ok(())
}

// --- Environments ---

/// Adds an environment pairing an existing command and configuration, and
/// makes it the active context.
///
/// # Errors
/// Checked in order: `AlreadyExists(Environment)`, `NotFound(Command)`,
/// `NotFound(Configuration)`.
pub fn add_environment(
    state: &mut ApplicationState,
    name: &str,
    command_name: &str,
    configuration_name: &str,
    description: &str,
) -> StateResult<()> {
    if environment_exists(state, name) {
        return Err(already_exists(EntityKind::Environment, name));
    }
    if !command_exists(state, command_name) {
        return Err(not_found(EntityKind::Command, command_name));
    }
    if !configuration_exists(state, configuration_name) {
        return Err(not_found(EntityKind::Configuration, configuration_name));
    }
    state.environments.insert(
        name.to_string(),
        Environment {
            command_name: command_name.to_string(),
            configuration_name: configuration_name.to_string(),
            description: description.to_string(),
        },
    );
    state.active_context = name.to_string();
    Ok(())
}

/// Removes an environment and clears the active context.
pub fn remove_environment(state: &mut ApplicationState, name: &str) -> StateResult<()> {
    state
        .environments
        .remove(name)
        .ok_or_else(|| not_found(EntityKind::Environment, name))?;
    state.active_context.clear();
    Ok(())
}

// --- Active context ---

/// Sets the active context. The name is validated when it is resolved, not here.
pub fn set_active_context(state: &mut ApplicationState, name: &str) {
    state.active_context = name.to_string();
}

/// Clears the active context. `open` then needs an explicit environment.
pub fn clear_active_context(state: &mut ApplicationState) {
    state.active_context.clear();
}

// --- Persistence ---

/// Loads the application state from `path`.
///
/// A missing file is not an error: it yields the default-populated state of a
/// fresh installation.
pub fn load_state(path: &Path) -> PersistResult<ApplicationState> {
    if !path.exists() {
        log::debug!(
            "State file '{}' not found. Using default state.",
            path.display()
        );
        let config_dir = paths::default_emacs_config_dir()?;
        return Ok(ApplicationState::with_defaults(
            config_dir.display().to_string(),
        ));
    }
    log::debug!("Loading state from '{}'", path.display());
    let bytes = fs::read(path)?;
    let state = serde_json::from_slice(&bytes)?;
    Ok(state)
}

/// Saves the application state to `path` as pretty-printed JSON.
///
/// The document is written to a temporary file next to the target and then
/// moved over it, so an interrupted save never leaves a truncated file.
pub fn save_state(state: &ApplicationState, path: &Path) -> PersistResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let data = serde_json::to_string_pretty(state)?;
    let mut temp_file = NamedTempFile::new_in(dir)?;
    temp_file.write_all(data.as_bytes())?;
    temp_file.flush()?;
    temp_file.persist(path)?;

    log::debug!("State saved to '{}'", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_state() -> ApplicationState {
        ApplicationState::with_defaults("/home/u/.emacs.d")
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    // --- Commands ---

    #[test]
    fn test_add_command_then_exists() {
        let mut state = sample_state();
        add_command(&mut state, "nw", "emacs", args(&["-nw"]), "terminal").unwrap();

        assert!(command_exists(&state, "nw"));
        assert_eq!(state.commands["nw"].arguments, args(&["-nw"]));
        // Adding a command never touches the context.
        assert_eq!(state.active_context, "default");
    }

    #[test]
    fn test_add_command_twice_fails() {
        let mut state = sample_state();
        add_command(&mut state, "nw", "emacs", Vec::new(), "").unwrap();

        let err = add_command(&mut state, "nw", "other", Vec::new(), "").unwrap_err();
        assert_eq!(
            err,
            StateError::AlreadyExists {
                kind: EntityKind::Command,
                name: "nw".to_string()
            }
        );
        assert_eq!(state.commands["nw"].binary_path, "emacs");
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut state = sample_state();
        add_command(&mut state, "Default", "emacs", Vec::new(), "").unwrap();
        assert!(command_exists(&state, "Default"));
        assert!(command_exists(&state, "default"));
    }

    #[test]
    fn test_remove_missing_command_leaves_state_unchanged() {
        let mut state = sample_state();
        let before = state.clone();

        let err = remove_command(&mut state, "ghost").unwrap_err();
        assert_eq!(
            err,
            StateError::NotFound {
                kind: EntityKind::Command,
                name: "ghost".to_string()
            }
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_remove_unrelated_command_clears_context() {
        let mut state = sample_state();
        add_command(&mut state, "unused", "emacs", Vec::new(), "").unwrap();

        remove_command(&mut state, "unused").unwrap();
        assert!(!command_exists(&state, "unused"));
        assert_eq!(state.active_context, "");
    }

    // --- Configurations ---

    #[test]
    fn test_add_configuration_activates_it() {
        let mut state = sample_state();
        add_configuration(&mut state, "doom", "/home/u/doom", "doom emacs").unwrap();

        assert!(configuration_exists(&state, "doom"));
        assert_eq!(state.active_context, "doom");
    }

    #[test]
    fn test_add_configuration_twice_fails() {
        let mut state = sample_state();
        let err = add_configuration(&mut state, "default", "/elsewhere", "").unwrap_err();
        assert_eq!(
            err,
            StateError::AlreadyExists {
                kind: EntityKind::Configuration,
                name: "default".to_string()
            }
        );
        assert_eq!(state.active_context, "default");
    }

    #[test]
    fn test_remove_unrelated_configuration_clears_context() {
        let mut state = sample_state();
        add_configuration(&mut state, "spare", "/spare", "").unwrap();
        set_active_context(&mut state, "default");

        remove_configuration(&mut state, "spare").unwrap();
        assert_eq!(state.active_context, "");
        assert!(environment_exists(&state, "default"));
    }

    #[test]
    fn test_remove_missing_configuration_fails() {
        let mut state = sample_state();
        let err = remove_configuration(&mut state, "ghost").unwrap_err();
        assert_eq!(
            err,
            StateError::NotFound {
                kind: EntityKind::Configuration,
                name: "ghost".to_string()
            }
        );
        assert_eq!(state.active_context, "default");
    }

    // --- Environments ---

    #[test]
    fn test_add_environment_activates_it() {
        let mut state = sample_state();
        add_environment(&mut state, "work", "default", "default", "work setup").unwrap();

        assert!(environment_exists(&state, "work"));
        assert_eq!(state.environments["work"].description, "work setup");
        assert_eq!(state.active_context, "work");
    }

    #[test]
    fn test_add_environment_checks_in_order() {
        let mut state = sample_state();

        // Existing name wins over every missing reference.
        let err = add_environment(&mut state, "default", "nope", "nope", "").unwrap_err();
        assert!(matches!(
            err,
            StateError::AlreadyExists {
                kind: EntityKind::Environment,
                ..
            }
        ));

        // The command is checked before the configuration.
        let err = add_environment(&mut state, "work", "nocmd", "nocfg", "").unwrap_err();
        assert_eq!(
            err,
            StateError::NotFound {
                kind: EntityKind::Command,
                name: "nocmd".to_string()
            }
        );

        let err = add_environment(&mut state, "work", "default", "nocfg", "").unwrap_err();
        assert_eq!(
            err,
            StateError::NotFound {
                kind: EntityKind::Configuration,
                name: "nocfg".to_string()
            }
        );

        assert!(!environment_exists(&state, "work"));
        assert_eq!(state.active_context, "default");
    }

    #[test]
    fn test_remove_environment_clears_context() {
        let mut state = sample_state();
        add_environment(&mut state, "work", "default", "default", "").unwrap();

        remove_environment(&mut state, "work").unwrap();
        assert!(!environment_exists(&state, "work"));
        assert_eq!(state.active_context, "");

        let err = remove_environment(&mut state, "work").unwrap_err();
        assert!(matches!(
            err,
            StateError::NotFound {
                kind: EntityKind::Environment,
                ..
            }
        ));
    }

    #[test]
    fn test_removing_command_keeps_dependent_environment() {
        let mut state = sample_state();
        remove_command(&mut state, "default").unwrap();
        assert!(environment_exists(&state, "default"));
    }

    #[test]
    fn test_context_setters_do_not_validate() {
        let mut state = sample_state();
        set_active_context(&mut state, "does-not-exist");
        assert_eq!(state.active_context, "does-not-exist");

        clear_active_context(&mut state);
        assert_eq!(state.active_context, "");
    }

    // --- Persistence ---

    #[test]
    fn test_load_missing_file_yields_default_state() {
        let dir = TempDir::new().unwrap();
        let state = load_state(&dir.path().join("state.json")).unwrap();

        let config_dir = paths::default_emacs_config_dir().unwrap();
        assert_eq!(
            state,
            ApplicationState::with_defaults(config_dir.display().to_string())
        );
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let mut state = sample_state();
        add_command(&mut state, "nw", "emacs", args(&["-nw"]), "terminal").unwrap();
        add_configuration(&mut state, "doom", "/home/u/doom", "").unwrap();
        add_environment(&mut state, "doom-nw", "nw", "doom", "").unwrap();

        save_state(&state, &path).unwrap();
        let loaded = load_state(&path).unwrap();

        assert_eq!(loaded, state);
    }

    #[test]
    fn test_load_malformed_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{ not json").unwrap();

        let result = load_state(&path);
        assert!(matches!(result, Err(PersistError::Json(_))));
    }
}
