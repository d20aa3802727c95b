//! The state machine engine.

use tracing::debug;

use super::config::{MachineConfig, StateId};
use super::error::FsmError;
use super::history::{Origin, TransitionLog};

/// A finite state machine with a linear undo/redo history.
///
/// The machine owns its configuration, the active state, and the
/// transition log. Transitions happen either directly ([`change_state`])
/// or by applying an event to the active state's transition table
/// ([`trigger`]); both append to the log and advance its cursor, while
/// [`undo`] and [`redo`] walk the cursor without appending.
///
/// [`change_state`]: StateMachine::change_state
/// [`trigger`]: StateMachine::trigger
/// [`undo`]: StateMachine::undo
/// [`redo`]: StateMachine::redo
///
/// # Example
///
/// ```rust
/// use turnstile::{MachineConfig, StateMachine};
///
/// let config = MachineConfig::from_json(
///     r#"{
///         "initial": "draft",
///         "states": {
///             "draft":     { "transitions": { "submit": "review" } },
///             "review":    { "transitions": { "approve": "published", "reject": "draft" } },
///             "published": { "transitions": {} }
///         }
///     }"#,
/// )?;
///
/// let mut machine = StateMachine::new(config);
/// machine.trigger("submit")?;
/// machine.trigger("approve")?;
/// assert_eq!(machine.current_state(), "published");
///
/// assert!(machine.undo());
/// assert_eq!(machine.current_state(), "review");
/// # Ok::<(), turnstile::FsmError>(())
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: MachineConfig,
    active: StateId,
    log: TransitionLog,
}

impl StateMachine {
    /// Create a machine from its configuration.
    ///
    /// The machine starts on `config.initial` with a single-entry history.
    /// `initial` is not validated against the declared states; a machine
    /// started on an undeclared id has no outgoing transitions until
    /// [`change_state`](StateMachine::change_state) moves it onto a
    /// declared one.
    pub fn new(config: MachineConfig) -> Self {
        let active = config.initial.clone();
        let log = TransitionLog::new(active.clone());
        Self {
            config,
            active,
            log,
        }
    }

    /// Create a machine from the JSON wire format of its configuration.
    ///
    /// Fails with [`FsmError::InvalidConfiguration`] when the input is
    /// missing, `null`, or malformed.
    pub fn from_json(json: &str) -> Result<Self, FsmError> {
        Ok(Self::new(MachineConfig::from_json(json)?))
    }

    pub(crate) fn from_parts(config: MachineConfig, active: StateId, log: TransitionLog) -> Self {
        Self {
            config,
            active,
            log,
        }
    }

    /// The active state id.
    pub fn current_state(&self) -> &str {
        &self.active
    }

    /// The configuration the machine was built from.
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// The transition log, including the undo/redo cursor.
    pub fn history(&self) -> &TransitionLog {
        &self.log
    }

    /// Move directly to a declared state.
    ///
    /// Fails with [`FsmError::UnknownState`] when `state` is not declared,
    /// leaving the machine unchanged.
    pub fn change_state(&mut self, state: &str) -> Result<(), FsmError> {
        if !self.config.contains_state(state) {
            return Err(FsmError::UnknownState {
                state: state.to_owned(),
            });
        }
        debug!(from = %self.active, to = state, "change_state");
        self.active = state.to_owned();
        self.log.record(self.active.clone(), Origin::Manual);
        Ok(())
    }

    /// Apply an event to the active state.
    ///
    /// The destination is read from the active state's transition table
    /// and followed blindly; it is not validated against the declared
    /// states. Fails with [`FsmError::UnknownTransition`] when the active
    /// state declares no transition for `event` (including when the active
    /// state is itself undeclared), leaving the machine unchanged.
    pub fn trigger(&mut self, event: &str) -> Result<(), FsmError> {
        let Some(target) = self.config.target_for(&self.active, event) else {
            return Err(FsmError::UnknownTransition {
                state: self.active.clone(),
                event: event.to_owned(),
            });
        };
        let target = target.clone();
        debug!(from = %self.active, to = %target, event, "trigger");
        self.active = target;
        self.log.record(self.active.clone(), Origin::Triggered);
        Ok(())
    }

    /// Return to the configured initial state.
    ///
    /// The history and cursor are left untouched, so the log can disagree
    /// with the active state until the next history-recording operation.
    /// Undo and redo keep operating relative to the pre-reset cursor.
    pub fn reset(&mut self) {
        debug!(from = %self.active, to = %self.config.initial, "reset");
        self.active = self.config.initial.clone();
    }

    /// Declared state ids, or the ids of states handling `event`.
    ///
    /// With `None`: every declared state, in declaration order. With an
    /// event: the states whose transition table declares it, each at most
    /// once, in first-encountered order. An unrecognized event yields an
    /// empty list.
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        match event {
            None => self.config.states.keys().map(String::as_str).collect(),
            Some(event) => self
                .config
                .states
                .iter()
                .filter(|(_, def)| def.transitions.contains_key(event))
                .map(|(id, _)| id.as_str())
                .collect(),
        }
    }

    /// Step one entry back through the history.
    ///
    /// Returns `false` and leaves the machine unchanged when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.log.step_back() {
            Some(state) => {
                debug!(from = %self.active, to = %state, "undo");
                self.active = state;
                true
            }
            None => false,
        }
    }

    /// Step one entry forward through the history.
    ///
    /// Armed only immediately after a matching [`undo`](StateMachine::undo);
    /// a `change_state` or `trigger` in between disarms it. Returns `false`
    /// and leaves the machine unchanged when stepping forward is
    /// unavailable.
    pub fn redo(&mut self) -> bool {
        match self.log.step_forward() {
            Some(state) => {
                debug!(from = %self.active, to = %state, "redo");
                self.active = state;
                true
            }
            None => false,
        }
    }

    /// Discard the history, keeping a single entry for the active state at
    /// cursor 0. All other entries are dropped irrecoverably.
    pub fn clear_history(&mut self) {
        self.log.truncate_to(self.active.clone());
    }
}
