// src/core/mod.rs

/// Turns an environment name into a launch command.
pub mod context_resolver;
/// Home-relative defaults and path normalization.
pub mod paths;
/// Clones of remote configuration repositories.
pub mod repo_cache;
/// Mutations, lookups and persistence of the application state.
pub mod state_manager;
/// Tabular listings.
pub mod table_display;
