//! Command metadata and state gating.

use indexmap::IndexMap;

use adit_core::{DispatchError, SimState};

/// Registration metadata for one command path.
///
/// Mirrors what the hosting dispatcher publishes to the operator: help
/// text, the parameter's display name, which simulation states accept
/// the command, and whether it is broadcast to worker contexts or kept
/// on the coordinating one.
#[derive(Clone, Debug)]
pub struct CommandSpec {
    /// The slash path the command is registered under.
    pub path: &'static str,
    /// Guidance lines shown by the help system.
    pub guidance: &'static [&'static str],
    /// Display name of the single parameter.
    pub parameter: &'static str,
    /// States in which the command may be issued.
    pub states: &'static [SimState],
    /// Whether the command is forwarded to worker contexts.
    pub broadcast: bool,
}

impl CommandSpec {
    /// Whether the command may be issued in `state`.
    pub fn available_in(&self, state: SimState) -> bool {
        self.states.contains(&state)
    }
}

/// The configuration states every Adit command is registered for.
///
/// None of these commands is meaningful mid-transport, so `Running` is
/// never in the list; the gate rejects before any parsing happens.
pub const CONFIG_STATES: &[SimState] = &[SimState::PreInit, SimState::Idle, SimState::GeomClosed];

/// Ordered table of registered commands.
#[derive(Debug, Default)]
pub struct CommandTable {
    specs: IndexMap<&'static str, CommandSpec>,
}

impl CommandTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command. Later registrations replace earlier ones with
    /// the same path.
    pub fn register(&mut self, spec: CommandSpec) {
        self.specs.insert(spec.path, spec);
    }

    /// Gate a dispatch attempt: the path must be registered and the
    /// command available in the current state.
    pub fn check(&self, state: SimState, path: &str) -> Result<&CommandSpec, DispatchError> {
        let spec = self
            .specs
            .get(path)
            .ok_or_else(|| DispatchError::UnknownCommand {
                path: path.to_owned(),
            })?;
        if !spec.available_in(state) {
            return Err(DispatchError::UnavailableInState {
                path: path.to_owned(),
                state,
            });
        }
        Ok(spec)
    }

    /// The registered spec for `path`, ungated.
    pub fn get(&self, path: &str) -> Option<&CommandSpec> {
        self.specs.get(path)
    }

    /// Iterate the registered commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.specs.values()
    }
}
