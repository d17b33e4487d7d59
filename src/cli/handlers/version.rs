// src/cli/handlers/version.rs

use anyhow::Result;

use super::commons;
use crate::{cli::dispatcher::Session, constants::APP_NAME};

/// Prints the version of the application.
pub fn handle(args: Vec<String>, session: &mut Session) -> Result<()> {
    commons::expect_arg_count(&args, 0)?;
    println!("{} version {}", APP_NAME, env!("CARGO_PKG_VERSION"));
    if session.settings.verbose {
        println!("app dir: {}", session.settings.app_dir.display());
    }
    Ok(())
}
