// src/cli/handlers/open.rs

use anyhow::Result;
use clap::Parser;

use crate::{cli::dispatcher::Session, core::context_resolver, system::executor};

#[derive(Parser, Debug, Default)]
#[command(
    name = "emacsctl open",
    no_binary_name = true,
    about = "Open files in the desired emacs environment"
)]
struct OpenArgs {
    /// Use a specific environment instead of the active context
    #[arg(long, short)]
    context: Option<String>,

    /// Files passed to emacs after the configuration directory.
    #[arg(value_name = "FILES", trailing_var_arg = true, allow_hyphen_values = true)]
    files: Vec<String>,
}

/// The main handler for the `open` command.
pub fn handle(args: Vec<String>, session: &mut Session) -> Result<()> {
    let open_args = OpenArgs::try_parse_from(&args)?;
    let dry_run = session.settings.dry_run;
    let state = session.state()?;

    // 1. Resolve the environment chain into the emacs command line.
    let mut argv = context_resolver::resolve_launch_command(state, open_args.context.as_deref())?;

    // 2. Files always come after `--init-directory DIR`.
    argv.extend(open_args.files);

    // 3. Execute (or print) the final command.
    executor::run(&argv, dry_run)?;
    Ok(())
}
