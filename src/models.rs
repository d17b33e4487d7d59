// src/models.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::constants::{DEFAULT_EMACS_BIN, DEFAULT_NAME};

/// The three independent namespaces of the application state.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A named emacs command line.
    Command,
    /// A named emacs configuration directory.
    Configuration,
    /// A named pairing of a command and a configuration.
    Environment,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Command => "command",
            Self::Configuration => "config",
            Self::Environment => "environment",
        };
        f.write_str(label)
    }
}

/// An invocable program plus the fixed arguments it always receives.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Command {
    /// Program to run, looked up on `PATH` when not absolute.
    #[serde(rename = "bin_path")]
    pub binary_path: String,
    /// Arguments placed before `--init-directory`.
    #[serde(rename = "bin_args")]
    pub arguments: Vec<String>,
    /// Free text shown in listings.
    pub description: String,
}

/// A directory passed to emacs as its init directory.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Configuration {
    /// Absolute path of the init directory, or the clone of a remote one.
    #[serde(rename = "init_dir")]
    pub directory_path: String,
    /// Free text shown in listings.
    pub description: String,
}

/// A named pairing of a command and a configuration, referenced by name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Environment {
    /// Name of the command to launch.
    pub command_name: String,
    /// Name of the configuration to launch it with.
    #[serde(rename = "config_name")]
    pub configuration_name: String,
    /// Free text shown in listings.
    pub description: String,
}

/// The aggregate persisted in `state.json`.
///
/// The maps are ordered by name, which is also the order used by every
/// listing. `Default` yields an empty aggregate; use
/// [`ApplicationState::with_defaults`] for the pre-populated state of a new
/// installation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ApplicationState {
    /// Commands by name.
    pub commands: BTreeMap<String, Command>,
    /// Configurations by name.
    #[serde(rename = "configs")]
    pub configurations: BTreeMap<String, Configuration>,
    /// Environments by name.
    pub environments: BTreeMap<String, Environment>,
    /// Name of the environment used when none is requested. Empty when unset.
    #[serde(rename = "context")]
    pub active_context: String,
}

impl ApplicationState {
    /// Builds the state of a fresh installation: a `default` command running
    /// plain `emacs`, a `default` configuration at `config_dir`, and a
    /// `default` environment pairing them, which is also the active context.
    pub fn with_defaults(config_dir: impl Into<String>) -> Self {
        let mut state = Self::default();
        state.commands.insert(
            DEFAULT_NAME.to_string(),
            Command {
                binary_path: DEFAULT_EMACS_BIN.to_string(),
                arguments: Vec::new(),
                description: "default emacs command".to_string(),
            },
        );
        state.configurations.insert(
            DEFAULT_NAME.to_string(),
            Configuration {
                directory_path: config_dir.into(),
                description: "default emacs configuration".to_string(),
            },
        );
        state.environments.insert(
            DEFAULT_NAME.to_string(),
            Environment {
                command_name: DEFAULT_NAME.to_string(),
                configuration_name: DEFAULT_NAME.to_string(),
                description: "default emacs environment".to_string(),
            },
        );
        state.active_context = DEFAULT_NAME.to_string();
        state
    }
}
