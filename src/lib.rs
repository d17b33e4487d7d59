//! Manage multiple emacs command lines, configuration directories and the
//! environments that pair them, then launch emacs in one of them.

/// Argument parsing and command dispatch.
pub mod cli;
/// Names, defaults and flags shared across the crate.
pub mod constants;
/// State operations, resolution, paths, repository cache and listings.
pub mod core;
/// The persisted data model.
pub mod models;
/// Run-wide settings.
pub mod settings;
/// Change tracking for the loaded state.
pub mod state;
/// Interaction with external processes.
pub mod system;
