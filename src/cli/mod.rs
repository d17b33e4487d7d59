use clap::Parser;

use crate::constants::{APP_DESCRIPTION, APP_DIR_ENV};

/// Group registry, session and routing.
pub mod dispatcher;
/// One handler per command group.
pub mod handlers;

/// emacsctl: Manage multiple emacs environments.
///
/// Usage: `emacsctl [GLOBAL FLAGS] <group> <action> [args...]`, where the group
/// is one of `state`, `environment`, `command`, `config`, `context`, `open`
/// or `version`. Global flags must come before the group.
#[derive(Parser, Debug)]
#[command(
    name = "emacsctl",
    author,
    version,
    about = "Manage multiple emacs environments",
    long_about = APP_DESCRIPTION,
    styles = clap::builder::Styles::styled()
        .header(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .usage(clap::builder::styling::AnsiColor::Yellow.on_default().bold())
        .literal(clap::builder::styling::AnsiColor::Cyan.on_default().bold())
        .placeholder(clap::builder::styling::AnsiColor::Green.on_default()),
)]
// We disable clap's default help subcommand (`help`) as groups are dispatched by hand.
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Specify application directory
    #[arg(long, env = APP_DIR_ENV, value_name = "DIR")]
    pub app_dir: Option<String>,

    /// Display the command that would be executed, but do not execute it
    #[arg(long)]
    pub dry_run: bool,

    /// Display verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// The command group followed by its action and arguments.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub args: Vec<String>,
}
