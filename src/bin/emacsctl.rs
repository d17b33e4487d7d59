// src/bin/emacsctl.rs

use anyhow::Result;
use clap::Parser;
use colored::*;
use emacsctl::{
    cli::{
        Cli,
        dispatcher::{self, Session},
    },
    settings::Settings,
    system::executor::ExecutionError,
};

/// The main entry point of the `emacsctl` application.
/// It sets up logging, parses arguments, dispatches to the correct handler,
/// and performs centralized error handling.
fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run_cli(cli) {
        // --- Centralized Error Handling ---
        // Argument errors from a group's own parser (including `--help`) are
        // rendered by clap itself.
        if let Some(clap_err) = e.downcast_ref::<clap::Error>() {
            clap_err.exit();
        }
        // When emacs itself fails, mirror its exit code without extra noise.
        if let Some(ExecutionError::NonZeroExitStatus { code, .. }) =
            e.downcast_ref::<ExecutionError>()
        {
            std::process::exit(*code);
        }

        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise `--verbose` raises the default level to `debug`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// One load → mutate → save cycle.
fn run_cli(cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);

    let settings = Settings::resolve(cli.app_dir.as_deref(), cli.dry_run, cli.verbose)?;
    log::debug!("Using state file '{}'", settings.state_path().display());

    let mut session = Session::new(settings);
    dispatcher::dispatch(cli.args, &mut session)?;

    // Only reached when the handler succeeded; a failed run never persists.
    if session.finish()? {
        log::debug!("State saved.");
    }
    Ok(())
}
