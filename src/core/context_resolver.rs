use crate::constants::INIT_DIRECTORY_FLAG;
use crate::core::state_manager::StateError;
use crate::models::{ApplicationState, Command, Configuration, EntityKind};

type ResolveResult<T> = Result<T, StateError>;

/// The chain of entities an environment name resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedEnvironment<'a> {
    /// Name of the resolved environment.
    pub name: &'a str,
    /// Command the environment references.
    pub command: &'a Command,
    /// Configuration the environment references.
    pub configuration: &'a Configuration,
}

impl ResolvedEnvironment<'_> {
    /// Builds `[binary] + fixed arguments + ["--init-directory", dir]`.
    ///
    /// The init directory flag must come after the command's own arguments and
    /// before any file the caller appends.
    pub fn launch_command(&self) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.command.arguments.len() + 3);
        argv.push(self.command.binary_path.clone());
        argv.extend(self.command.arguments.iter().cloned());
        argv.push(INIT_DIRECTORY_FLAG.to_string());
        argv.push(self.configuration.directory_path.clone());
        argv
    }
}

/// Picks the context to use: the explicit one when non-empty, otherwise the
/// active context stored in the state.
pub fn select_context<'a>(
    state: &'a ApplicationState,
    explicit_context: Option<&'a str>,
) -> ResolveResult<&'a str> {
    let context = match explicit_context {
        Some(name) if !name.is_empty() => name,
        _ => state.active_context.as_str(),
    };
    if context.is_empty() {
        return Err(StateError::NoActiveContext);
    }
    Ok(context)
}

/// Resolves a context to its environment, command and configuration.
///
/// Every link is re-checked here, so a dangling reference left behind by an
/// earlier removal surfaces as a precise `NotFound`.
pub fn resolve_environment<'a>(
    state: &'a ApplicationState,
    explicit_context: Option<&'a str>,
) -> ResolveResult<ResolvedEnvironment<'a>> {
    let name = select_context(state, explicit_context)?;

    let environment = state
        .environments
        .get(name)
        .ok_or_else(|| StateError::NotFound {
            kind: EntityKind::Environment,
            name: name.to_string(),
        })?;

    let command = state
        .commands
        .get(&environment.command_name)
        .ok_or_else(|| StateError::NotFound {
            kind: EntityKind::Command,
            name: environment.command_name.clone(),
        })?;

    let configuration = state
        .configurations
        .get(&environment.configuration_name)
        .ok_or_else(|| StateError::NotFound {
            kind: EntityKind::Configuration,
            name: environment.configuration_name.clone(),
        })?;

    Ok(ResolvedEnvironment {
        name,
        command,
        configuration,
    })
}

/// Resolves a context straight to the argument vector that launches it.
pub fn resolve_launch_command(
    state: &ApplicationState,
    explicit_context: Option<&str>,
) -> ResolveResult<Vec<String>> {
    resolve_environment(state, explicit_context).map(|resolved| resolved.launch_command())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state_manager;

    fn scenario_state() -> ApplicationState {
        let mut state = ApplicationState::default();
        state_manager::add_command(&mut state, "default", "emacs", Vec::new(), "d").unwrap();
        state_manager::add_configuration(&mut state, "default", "/home/u/.emacs.d", "d")
            .unwrap();
        state_manager::add_environment(&mut state, "default", "default", "default", "")
            .unwrap();
        state
    }

    #[test]
    fn test_resolve_active_context() {
        let state = scenario_state();
        assert_eq!(state.active_context, "default");

        let argv = resolve_launch_command(&state, Some("")).unwrap();
        assert_eq!(argv, vec!["emacs", "--init-directory", "/home/u/.emacs.d"]);

        let argv = resolve_launch_command(&state, None).unwrap();
        assert_eq!(argv, vec!["emacs", "--init-directory", "/home/u/.emacs.d"]);
    }

    #[test]
    fn test_fixed_arguments_precede_init_directory() {
        let mut state = scenario_state();
        state_manager::add_command(
            &mut state,
            "nw",
            "/usr/bin/emacs",
            vec!["-nw".to_string(), "--debug-init".to_string()],
            "",
        )
        .unwrap();
        state_manager::add_environment(&mut state, "term", "nw", "default", "").unwrap();

        let argv = resolve_launch_command(&state, None).unwrap();
        assert_eq!(
            argv,
            vec![
                "/usr/bin/emacs",
                "-nw",
                "--debug-init",
                "--init-directory",
                "/home/u/.emacs.d"
            ]
        );
    }

    #[test]
    fn test_explicit_context_overrides_active_one() {
        let mut state = scenario_state();
        state_manager::add_configuration(&mut state, "doom", "/home/u/doom", "").unwrap();
        state_manager::add_environment(&mut state, "doom", "default", "doom", "").unwrap();
        state_manager::set_active_context(&mut state, "default");

        let resolved = resolve_environment(&state, Some("doom")).unwrap();
        assert_eq!(resolved.name, "doom");
        assert_eq!(resolved.configuration.directory_path, "/home/u/doom");
    }

    #[test]
    fn test_no_context_fails() {
        let mut state = scenario_state();
        state_manager::clear_active_context(&mut state);

        let err = resolve_launch_command(&state, None).unwrap_err();
        assert_eq!(err, StateError::NoActiveContext);
        let err = resolve_launch_command(&state, Some("")).unwrap_err();
        assert_eq!(err, StateError::NoActiveContext);
    }

    #[test]
    fn test_unknown_environment_fails() {
        let mut state = scenario_state();
        state_manager::set_active_context(&mut state, "ghost");

        let err = resolve_launch_command(&state, None).unwrap_err();
        assert_eq!(
            err,
            StateError::NotFound {
                kind: EntityKind::Environment,
                name: "ghost".to_string()
            }
        );
    }

    #[test]
    fn test_dangling_command_reference_fails() {
        let mut state = scenario_state();
        state_manager::remove_command(&mut state, "default").unwrap();

        let err = resolve_launch_command(&state, Some("default")).unwrap_err();
        assert_eq!(
            err,
            StateError::NotFound {
                kind: EntityKind::Command,
                name: "default".to_string()
            }
        );
    }

    #[test]
    fn test_dangling_configuration_reference_fails() {
        let mut state = scenario_state();
        state_manager::remove_configuration(&mut state, "default").unwrap();

        let err = resolve_launch_command(&state, Some("default")).unwrap_err();
        assert_eq!(
            err,
            StateError::NotFound {
                kind: EntityKind::Configuration,
                name: "default".to_string()
            }
        );
    }

    #[test]
    fn test_resolution_does_not_mutate() {
        let state = scenario_state();
        let before = state.clone();
        let _ = resolve_launch_command(&state, None).unwrap();
        assert_eq!(state, before);
    }
}
