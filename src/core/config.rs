//! Declarative machine configuration.
//!
//! A [`MachineConfig`] is the immutable input that defines a machine: the
//! initial state plus, for every declared state, the event transitions
//! available from it. Identifiers are opaque strings, and both maps keep
//! declaration order so queries iterate states the way they were written.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::error::FsmError;

/// Identifier of a declared state.
pub type StateId = String;

/// Identifier of a transition-triggering event.
pub type EventId = String;

/// Transition table for a single state.
///
/// Maps each event the state responds to onto a destination state id.
/// States with no outgoing transitions carry an empty table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateDef {
    /// Event -> destination state, in declaration order.
    #[serde(default)]
    pub transitions: IndexMap<EventId, StateId>,
}

/// Declarative description of a state machine.
///
/// Supplied once, at construction, and never mutated by the engine. The
/// JSON wire format is:
///
/// ```json
/// {
///   "initial": "locked",
///   "states": {
///     "locked":   { "transitions": { "coin": "unlocked" } },
///     "unlocked": { "transitions": { "push": "locked" } }
///   }
/// }
/// ```
///
/// `initial` is not required to be a declared state. A machine started on
/// an undeclared id simply has no outgoing transitions until
/// `change_state` moves it onto a declared one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// State the machine starts in (and returns to on reset).
    pub initial: StateId,
    /// Declared states, in declaration order.
    pub states: IndexMap<StateId, StateDef>,
}

impl MachineConfig {
    /// Parse a configuration from its JSON wire format.
    ///
    /// Fails with [`FsmError::InvalidConfiguration`] when the input is
    /// empty, `null`, or otherwise not a configuration document.
    ///
    /// # Example
    ///
    /// ```rust
    /// use turnstile::MachineConfig;
    ///
    /// let config = MachineConfig::from_json(
    ///     r#"{ "initial": "a", "states": { "a": { "transitions": {} } } }"#,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(config.initial, "a");
    /// assert!(MachineConfig::from_json("null").is_err());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, FsmError> {
        serde_json::from_str(json).map_err(|e| FsmError::InvalidConfiguration(e.to_string()))
    }

    /// Whether `state` is a declared state id.
    pub fn contains_state(&self, state: &str) -> bool {
        self.states.contains_key(state)
    }

    /// Destination of `event` out of `state`, if the state declares it.
    pub fn target_for(&self, state: &str, event: &str) -> Option<&StateId> {
        self.states.get(state)?.transitions.get(event)
    }
}
