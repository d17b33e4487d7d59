// src/cli/handlers/environment.rs

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::commons;
use crate::{
    cli::dispatcher::Session,
    constants::DEFAULT_NAME,
    core::{state_manager, table_display},
    models::EntityKind,
};

#[derive(Parser, Debug)]
#[command(
    name = "emacsctl environment",
    no_binary_name = true,
    about = "Manage emacs environments"
)]
struct EnvironmentArgs {
    #[command(subcommand)]
    action: EnvironmentAction,
}

#[derive(Subcommand, Debug)]
enum EnvironmentAction {
    /// Display table of all emacs environments in application state
    #[command(visible_alias = "ls")]
    List,
    /// Add a new emacs environment to application state
    Add {
        /// Name of existing emacs command line to use for environment
        #[arg(long, visible_alias = "cmd", conflicts_with = "commandline")]
        command: Option<String>,
        /// New emacs command line to use for environment, stored under the environment's name
        #[arg(long, visible_alias = "cmdline")]
        commandline: Option<String>,
        /// Name of existing emacs configuration directory to use for environment
        #[arg(long, visible_alias = "cfg", conflicts_with = "configdir")]
        config: Option<String>,
        /// New emacs configuration directory (or git repository URL) to use for environment, stored under the environment's name
        #[arg(long, visible_alias = "cfgdir")]
        configdir: Option<String>,
        /// Description of the environment
        #[arg(long, visible_alias = "desc", default_value = "")]
        description: String,
        #[arg(value_name = "NAME")]
        args: Vec<String>,
    },
    /// Remove an existing environment from application state
    #[command(visible_alias = "rm")]
    Remove {
        #[arg(value_name = "NAME")]
        args: Vec<String>,
    },
}

/// Handles the `environment` group: `list`, `add` and `remove`.
pub fn handle(args: Vec<String>, session: &mut Session) -> Result<()> {
    let environment_args = EnvironmentArgs::try_parse_from(&args)?;
    let settings = session.settings.clone();
    let state = session.state()?;

    match environment_args.action {
        EnvironmentAction::List => {
            table_display::environments_table(state).print();
        }
        EnvironmentAction::Add {
            command,
            commandline,
            config,
            configdir,
            description,
            args,
        } => {
            let name = commons::single_arg(&args)?;
            if state_manager::environment_exists(state, name) {
                return Err(state_manager::StateError::AlreadyExists {
                    kind: EntityKind::Environment,
                    name: name.to_string(),
                }
                .into());
            }

            // Inline definitions become a command/config named after the environment.
            let command_name = match commandline {
                Some(line) => {
                    let (binary_path, arguments) = commons::split_command_line(&[line])?;
                    state_manager::add_command(state, name, &binary_path, arguments, &description)?;
                    commons::announce(&settings, "added", EntityKind::Command, name);
                    name.to_string()
                }
                None => command.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            };
            let configuration_name = match configdir {
                Some(location) => {
                    // Refuse before cloning anything.
                    if state_manager::configuration_exists(state, name) {
                        return Err(state_manager::StateError::AlreadyExists {
                            kind: EntityKind::Configuration,
                            name: name.to_string(),
                        }
                        .into());
                    }
                    let directory = commons::resolve_directory(&settings, name, &location)?;
                    state_manager::add_configuration(state, name, &directory, &description)?;
                    commons::announce(&settings, "added", EntityKind::Configuration, name);
                    name.to_string()
                }
                None => config.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            };

            state_manager::add_environment(
                state,
                name,
                &command_name,
                &configuration_name,
                &description,
            )?;
            commons::announce(&settings, "added", EntityKind::Environment, name);
        }
        EnvironmentAction::Remove { args } => {
            let name = commons::single_arg(&args)?;
            state_manager::remove_environment(state, name)?;
            commons::announce(&settings, "removed", EntityKind::Environment, name);
        }
    }
    Ok(())
}
