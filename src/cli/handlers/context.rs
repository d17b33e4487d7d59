// src/cli/handlers/context.rs

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::commons;
use crate::{cli::dispatcher::Session, core::state_manager};

#[derive(Parser, Debug)]
#[command(
    name = "emacsctl context",
    no_binary_name = true,
    about = "Manage active environment context in application state"
)]
struct ContextArgs {
    #[command(subcommand)]
    action: ContextAction,
}

#[derive(Subcommand, Debug)]
enum ContextAction {
    /// Get the active environment context
    Get,
    /// Set the active environment context
    Set {
        #[arg(value_name = "ENV")]
        args: Vec<String>,
    },
    /// Clear the active environment context
    Clear,
}

/// Handles the `context` group: `get`, `set` and `clear`.
pub fn handle(args: Vec<String>, session: &mut Session) -> Result<()> {
    let context_args = ContextArgs::try_parse_from(&args)?;
    let verbose = session.settings.verbose;
    let state = session.state()?;

    match context_args.action {
        ContextAction::Get => {
            println!("{}", state.active_context);
        }
        ContextAction::Set { args } => {
            let name = commons::single_arg(&args)?;
            if !state_manager::environment_exists(state, name) {
                // Accepted anyway; `open` reports the missing environment.
                log::warn!("Environment '{}' does not exist yet.", name);
            }
            state_manager::set_active_context(state, name);
            if verbose {
                println!("active context: {}", name);
            }
        }
        ContextAction::Clear => {
            state_manager::clear_active_context(state);
            if verbose {
                println!("active context cleared");
            }
        }
    }
    Ok(())
}
