//! Engine error types.

use thiserror::Error;

use super::config::{EventId, StateId};

/// Errors surfaced by state machine operations.
///
/// Every failure is immediate and leaves the machine unchanged. Undo and
/// redo report unavailability through their `bool` result instead, since
/// running out of history is an expected outcome rather than an error.
#[derive(Debug, Error)]
pub enum FsmError {
    /// Construction input was missing, `null`, or not a configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// `change_state` was given an id that is not a declared state.
    #[error("Unknown state '{state}'")]
    UnknownState { state: StateId },

    /// `trigger` was given an event the active state does not declare.
    #[error("No transition for event '{event}' from state '{state}'")]
    UnknownTransition { state: StateId, event: EventId },
}
