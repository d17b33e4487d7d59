// src/system/executor.rs

use std::process::{Command as StdCommand, Stdio};
use thiserror::Error;

/// Errors raised while launching an external process.
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// The argument vector was empty.
    #[error("No command specified to run.")]
    EmptyCommand,
    /// The process could not be spawned.
    #[error("Command '{0}' could not be executed: {1}")]
    CommandFailed(String, std::io::Error),
    /// The process ran and exited unsuccessfully.
    #[error("Command '{command}' exited with code {code}.")]
    NonZeroExitStatus {
        /// The space-joined command line.
        command: String,
        /// The exit code, or 1 when the process was killed by a signal.
        code: i32,
    },
}

/// Joins an argument vector with single spaces, the way it is shown to the user.
pub fn display_command(argv: &[String]) -> String {
    argv.join(" ")
}

/// Runs `argv[0]` with the remaining arguments, inheriting the terminal.
///
/// In dry-run mode the space-joined vector is printed to stdout instead and
/// nothing is spawned. The call blocks until the child exits.
pub fn run(argv: &[String], dry_run: bool) -> Result<(), ExecutionError> {
    let (program, args) = argv.split_first().ok_or(ExecutionError::EmptyCommand)?;
    let command_line = display_command(argv);

    if dry_run {
        println!("{}", command_line);
        return Ok(());
    }

    log::debug!("Executing: {:?}", argv);
    let status = StdCommand::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| ExecutionError::CommandFailed(command_line.clone(), e))?;

    if !status.success() {
        // A child killed by a signal has no exit code.
        let code = status.code().unwrap_or(1);
        log::debug!("Command '{}' exited with code {}", command_line, code);
        return Err(ExecutionError::NonZeroExitStatus {
            command: command_line,
            code,
        });
    }
    Ok(())
}
