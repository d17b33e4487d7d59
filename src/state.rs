// src/state.rs

use crate::models::ApplicationState;
use std::ops::{Deref, DerefMut};

/// Tracks whether the loaded state was ever handed out mutably.
/// It holds the current state and, once mutated, a snapshot of the original
/// state as it was loaded.
#[derive(Debug)]
enum Snapshot {
    /// The state is clean, no mutations have been requested yet.
    Pristine(ApplicationState),
    /// A mutation has been requested. We now hold both the original snapshot
    /// and the current, mutable state.
    Dirty {
        original: ApplicationState,
        current: ApplicationState,
    },
}

/// The loaded application state of a single invocation.
///
/// Reads go through `Deref`; the first `DerefMut` takes a snapshot so the
/// caller can later ask whether anything actually changed.
#[derive(Debug)]
pub struct AppState {
    snapshot: Snapshot,
}

impl AppState {
    /// Wraps a freshly loaded state; it starts out pristine.
    pub fn new(state: ApplicationState) -> Self {
        Self {
            snapshot: Snapshot::Pristine(state),
        }
    }

    /// Checks if the state needs to be saved by comparing the current state
    /// against the original snapshot, if one exists.
    pub fn needs_saving(&self) -> bool {
        match &self.snapshot {
            Snapshot::Pristine(_) => false,
            Snapshot::Dirty { original, current } => original != current,
        }
    }

    /// Provides read-only access to the current state.
    pub fn state(&self) -> &ApplicationState {
        match &self.snapshot {
            Snapshot::Pristine(state) => state,
            Snapshot::Dirty { current, .. } => current,
        }
    }
}

impl Deref for AppState {
    type Target = ApplicationState;

    fn deref(&self) -> &Self::Target {
        self.state()
    }
}

impl DerefMut for AppState {
    fn deref_mut(&mut self) -> &mut ApplicationState {
        // First request for mutable access: keep a copy of what was loaded.
        if let Snapshot::Pristine(state) = &mut self.snapshot {
            let current = std::mem::take(state);
            self.snapshot = Snapshot::Dirty {
                original: current.clone(),
                current,
            };
        }

        match &mut self.snapshot {
            Snapshot::Pristine(state) => state,
            Snapshot::Dirty { current, .. } => current,
        }
    }
}
