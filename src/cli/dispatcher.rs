use anyhow::{Result, anyhow};
use clap::CommandFactory;

use crate::{
    cli::{Cli, handlers},
    core::state_manager::{self, PersistError},
    settings::Settings,
    state::AppState,
};

/// Everything a handler may touch during one invocation: the run settings and
/// the application state, loaded on first use.
#[derive(Debug)]
pub struct Session {
    /// Settings of the current run.
    pub settings: Settings,
    state: Option<AppState>,
}

impl Session {
    /// Creates a session whose state is loaded on first use.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            state: None,
        }
    }

    /// Creates a session around an already loaded state.
    #[cfg(test)]
    pub fn with_state(settings: Settings, state: AppState) -> Self {
        Self {
            settings,
            state: Some(state),
        }
    }

    /// Returns the application state, loading it from the state file the first
    /// time it is requested.
    pub fn state(&mut self) -> Result<&mut AppState, PersistError> {
        let state = match self.state.take() {
            Some(state) => state,
            None => AppState::new(state_manager::load_state(&self.settings.state_path())?),
        };
        Ok(self.state.insert(state))
    }

    /// Persists the state if a handler changed it. Dry runs never write.
    ///
    /// Returns whether the state file was written.
    pub fn finish(self) -> Result<bool, PersistError> {
        let Some(state) = self.state else {
            return Ok(false);
        };
        if !state.needs_saving() {
            return Ok(false);
        }
        if self.settings.dry_run {
            log::debug!("Dry run: state changes are discarded.");
            return Ok(false);
        }
        state_manager::save_state(&state, &self.settings.state_path())?;
        Ok(true)
    }
}

type Handler = fn(Vec<String>, &mut Session) -> Result<()>;

/// Defines a command group, its aliases, and its handler.
struct CommandDefinition {
    name: &'static str,
    aliases: &'static [&'static str],
    handler: Handler,
}

/// The single source of truth for all command groups.
static COMMAND_REGISTRY: &[CommandDefinition] = &[
    CommandDefinition {
        name: "command",
        aliases: &["cmd"],
        handler: handlers::command::handle,
    },
    CommandDefinition {
        name: "config",
        aliases: &["cfg"],
        handler: handlers::config::handle,
    },
    CommandDefinition {
        name: "context",
        aliases: &["ctx"],
        handler: handlers::context::handle,
    },
    CommandDefinition {
        name: "environment",
        aliases: &["env"],
        handler: handlers::environment::handle,
    },
    CommandDefinition {
        name: "open",
        aliases: &["edit"],
        handler: handlers::open::handle,
    },
    CommandDefinition {
        name: "state",
        aliases: &[],
        handler: handlers::state::handle,
    },
    CommandDefinition {
        name: "version",
        aliases: &[],
        handler: handlers::version::handle,
    },
];

/// Finds a command definition in the registry by its name or alias.
fn find_command(name: &str) -> Option<&'static CommandDefinition> {
    COMMAND_REGISTRY
        .iter()
        .find(|cmd| cmd.name == name || cmd.aliases.contains(&name))
}

/// Routes `args` (group name first) to the matching handler.
///
/// With no arguments the top-level help is printed.
pub fn dispatch(args: Vec<String>, session: &mut Session) -> Result<()> {
    log::debug!("Dispatching args: {:?}", args);

    let mut args = args.into_iter();
    let Some(group) = args.next() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let command = find_command(&group).ok_or_else(|| {
        let known: Vec<&str> = COMMAND_REGISTRY.iter().map(|cmd| cmd.name).collect();
        anyhow!(
            "unknown command '{}'. Expected one of: {}",
            group,
            known.join(", ")
        )
    })?;

    (command.handler)(args.collect(), session)
}
