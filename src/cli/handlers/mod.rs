// src/cli/handlers/mod.rs

// This module contains the logic for each command group.

/// `command` group.
pub mod command;
/// Helpers shared by the handlers.
pub mod commons;
/// `config` group.
pub mod config;
/// `context` group.
pub mod context;
/// `environment` group.
pub mod environment;
/// `open` command.
pub mod open;
/// `state` group.
pub mod state;
/// `version` command.
pub mod version;
