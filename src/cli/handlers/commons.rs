// src/cli/handlers/commons.rs

// This module contains shared functions used by multiple handlers.

use anyhow::{Context, Result, anyhow};
use colored::Colorize;

use crate::{
    core::{paths, repo_cache, state_manager::StateError},
    models::EntityKind,
    settings::Settings,
};

/// Fails with `InvalidArgumentCount` unless exactly `expected` positional
/// arguments were given.
pub fn expect_arg_count(args: &[String], expected: usize) -> Result<(), StateError> {
    if args.len() != expected {
        return Err(StateError::InvalidArgumentCount {
            expected,
            received: args.len(),
        });
    }
    Ok(())
}

/// Fails with `MinimumArgumentCount` when fewer than `minimum` positional
/// arguments were given.
pub fn expect_min_arg_count(args: &[String], minimum: usize) -> Result<(), StateError> {
    if args.len() < minimum {
        return Err(StateError::MinimumArgumentCount {
            minimum,
            received: args.len(),
        });
    }
    Ok(())
}

/// Returns the first positional argument and the ones after it, requiring at
/// least `minimum` arguments in total.
pub fn name_and_rest(args: &[String], minimum: usize) -> Result<(&str, &[String]), StateError> {
    expect_min_arg_count(args, minimum)?;
    args.split_first()
        .map(|(name, rest)| (name.as_str(), rest))
        .ok_or(StateError::MinimumArgumentCount {
            minimum,
            received: 0,
        })
}

/// Returns the single positional argument, or an argument count error.
pub fn single_arg(args: &[String]) -> Result<&str, StateError> {
    match args {
        [value] => Ok(value.as_str()),
        _ => Err(StateError::InvalidArgumentCount {
            expected: 1,
            received: args.len(),
        }),
    }
}

/// Splits a command line into the binary path and its fixed arguments.
///
/// A single word containing whitespace is treated as a quoted command line
/// (`"emacs -nw"`) and split with shell rules; several words are taken as is.
pub fn split_command_line(words: &[String]) -> Result<(String, Vec<String>)> {
    let parts = match words {
        [line] if line.trim().contains(char::is_whitespace) => shlex::split(line)
            .ok_or_else(|| anyhow!("Command line could not be parsed: {}", line))?,
        _ => words.to_vec(),
    };
    let mut parts = parts.into_iter();
    let binary_path = parts
        .next()
        .filter(|bin| !bin.trim().is_empty())
        .ok_or_else(|| anyhow!("Command line is empty."))?;
    Ok((binary_path, parts.collect()))
}

/// Turns a user supplied configuration location into the directory stored in
/// the state.
///
/// Remote repositories (`git@...`, `https://...`) are cloned into the cache
/// under `name` and the clone path is returned; on dry runs the clone is only
/// printed. Local paths are expanded and made absolute.
pub fn resolve_directory(settings: &Settings, name: &str, location: &str) -> Result<String> {
    if !repo_cache::is_remote_reference(location) {
        let path = paths::expand_absolute_path(location)?;
        return Ok(path.display().to_string());
    }

    let cache_dir = settings.cache_dir();
    let destination = if settings.dry_run {
        let destination = repo_cache::repo_path(&cache_dir, name);
        println!(
            "{} git clone {} {}",
            "(dry run)".dimmed(),
            location,
            destination.display()
        );
        destination
    } else {
        repo_cache::fetch(&cache_dir, name, location)
            .with_context(|| format!("Could not add configuration '{}'", name))?
    };
    Ok(destination.display().to_string())
}

/// Prints `<verb> <kind>: <name>` when running verbosely.
pub fn announce(settings: &Settings, verb: &str, kind: EntityKind, name: &str) {
    if !settings.verbose {
        return;
    }
    let prefix = if settings.dry_run {
        format!("(dry run) would have {}", verb)
    } else {
        verb.to_string()
    };
    println!("{} {}: {}", prefix.green(), kind, name.cyan());
}
