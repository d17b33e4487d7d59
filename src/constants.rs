// src/constants.rs

/// The name of the application, used for its config directory and messages.
pub const APP_NAME: &str = "emacsctl";

/// The long description shown by `emacsctl --help`.
pub const APP_DESCRIPTION: &str = "\
This app enables users to manage multiple emacs environments.
It enables you to define different emacs command lines and configuration
directories. These can be combined into environments that can be used to open
files with the desired emacs command and configuration.

This app stores its state in a JSON file in the application directory. The
application directory is located in the user's ~/.config/emacsctl by default,
but can be overridden with the --app-dir flag. The state file is named state.json
and is located in the application directory.";

/// The environment variable that overrides the application directory.
pub const APP_DIR_ENV: &str = "EMACSCTL_DIR";

/// The name of the state file (inside the application directory).
pub const STATE_FILENAME: &str = "state.json";

/// The name of the repository cache directory (inside the application directory).
pub const CACHE_DIRNAME: &str = "cache";

/// The name given to the command, configuration and environment of a fresh state.
pub const DEFAULT_NAME: &str = "default";

/// The binary launched by the default command.
pub const DEFAULT_EMACS_BIN: &str = "emacs";

/// The default emacs configuration directory (relative to the home directory).
pub const DEFAULT_EMACS_CONFIG_DIRNAME: &str = ".emacs.d";

/// The flag emacs expects in front of the configuration directory.
pub const INIT_DIRECTORY_FLAG: &str = "--init-directory";
