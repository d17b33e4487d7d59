// src/cli/handlers/state.rs

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::cli::dispatcher::Session;

#[derive(Parser, Debug)]
#[command(
    name = "emacsctl state",
    no_binary_name = true,
    about = "Display application state"
)]
struct StateArgs {
    #[command(subcommand)]
    action: StateAction,
}

#[derive(Subcommand, Debug)]
enum StateAction {
    /// Display the content of the application state file
    #[command(visible_aliases = ["cat", "view"])]
    Show,
    /// Display the path of the application state file
    #[command(visible_alias = "file")]
    Path,
}

/// Handles the `state` group: `show` and `path`.
pub fn handle(args: Vec<String>, session: &mut Session) -> Result<()> {
    let state_args = StateArgs::try_parse_from(&args)?;

    match state_args.action {
        StateAction::Show => {
            let state = session.state()?;
            println!("{}", serde_json::to_string_pretty(state.state())?);
        }
        StateAction::Path => {
            println!("{}", session.settings.state_path().display());
        }
    }
    Ok(())
}
