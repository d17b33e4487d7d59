// src/cli/handlers/command.rs

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::commons;
use crate::{
    cli::dispatcher::Session,
    core::{state_manager, table_display},
    models::EntityKind,
};

#[derive(Parser, Debug)]
#[command(
    name = "emacsctl command",
    no_binary_name = true,
    about = "Manage emacs command lines"
)]
struct CommandArgs {
    #[command(subcommand)]
    action: CommandAction,
}

#[derive(Subcommand, Debug)]
enum CommandAction {
    /// Display table of all emacs command lines in application state
    #[command(visible_alias = "ls")]
    List,
    /// Add a new emacs command line to application state
    Add {
        /// Description of the command line
        #[arg(long, visible_alias = "desc", default_value = "")]
        description: String,
        /// NAME followed by the command line (one quoted string or separate words)
        #[arg(
            value_name = "NAME CMD_LINE",
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        args: Vec<String>,
    },
    /// Remove an existing emacs command line from application state
    #[command(visible_alias = "rm")]
    Remove {
        #[arg(value_name = "NAME")]
        args: Vec<String>,
    },
}

/// Handles the `command` group: `list`, `add` and `remove`.
pub fn handle(args: Vec<String>, session: &mut Session) -> Result<()> {
    let command_args = CommandArgs::try_parse_from(&args)?;
    let settings = session.settings.clone();
    let state = session.state()?;

    match command_args.action {
        CommandAction::List => {
            table_display::commands_table(state).print();
        }
        CommandAction::Add { description, args } => {
            let (name, command_line) = commons::name_and_rest(&args, 2)?;
            let (binary_path, arguments) = commons::split_command_line(command_line)?;

            state_manager::add_command(state, name, &binary_path, arguments, &description)?;
            commons::announce(&settings, "added", EntityKind::Command, name);
        }
        CommandAction::Remove { args } => {
            let name = commons::single_arg(&args)?;
            state_manager::remove_command(state, name)?;
            commons::announce(&settings, "removed", EntityKind::Command, name);
        }
    }
    Ok(())
}
