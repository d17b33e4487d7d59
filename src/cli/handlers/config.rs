// src/cli/handlers/config.rs

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::commons;
use crate::{
    cli::dispatcher::Session,
    core::{repo_cache, state_manager, table_display},
    models::EntityKind,
};

#[derive(Parser, Debug)]
#[command(
    name = "emacsctl config",
    no_binary_name = true,
    about = "Manage emacs configuration directories in application state"
)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Display table of all emacs configuration directories in application state
    #[command(visible_alias = "ls")]
    List,
    /// Add a new emacs configuration directory to application state
    ///
    /// DIR_PATH may also be a git repository URL (`git@...` or `https://...`),
    /// in which case it is cloned into the application cache.
    Add {
        /// Description of the configuration directory
        #[arg(long, visible_alias = "desc", default_value = "")]
        description: String,
        #[arg(value_name = "NAME DIR_PATH")]
        args: Vec<String>,
    },
    /// Remove an existing emacs configuration directory from application state
    #[command(visible_alias = "rm")]
    Remove {
        #[arg(value_name = "NAME")]
        args: Vec<String>,
    },
}

/// Handles the `config` group: `list`, `add` and `remove`.
pub fn handle(args: Vec<String>, session: &mut Session) -> Result<()> {
    let config_args = ConfigArgs::try_parse_from(&args)?;
    let settings = session.settings.clone();
    let state = session.state()?;

    match config_args.action {
        ConfigAction::List => {
            table_display::configurations_table(state).print();
        }
        ConfigAction::Add { description, args } => {
            commons::expect_arg_count(&args, 2)?;
            let (name, location) = commons::name_and_rest(&args, 2)?;
            let location = commons::single_arg(location)?;

            // Refuse before cloning anything.
            if state_manager::configuration_exists(state, name) {
                return Err(state_manager::StateError::AlreadyExists {
                    kind: EntityKind::Configuration,
                    name: name.to_string(),
                }
                .into());
            }

            let directory = commons::resolve_directory(&settings, name, location)?;
            state_manager::add_configuration(state, name, &directory, &description)?;
            commons::announce(&settings, "added", EntityKind::Configuration, name);
        }
        ConfigAction::Remove { args } => {
            let name = commons::single_arg(&args)?;
            if !state_manager::configuration_exists(state, name) {
                return Err(state_manager::StateError::NotFound {
                    kind: EntityKind::Configuration,
                    name: name.to_string(),
                }
                .into());
            }

            let cache_dir = settings.cache_dir();
            if !settings.dry_run && repo_cache::is_cached(&cache_dir, name) {
                repo_cache::evict(&cache_dir, name)?;
            }
            state_manager::remove_configuration(state, name)?;
            commons::announce(&settings, "removed", EntityKind::Configuration, name);
        }
    }
    Ok(())
}
