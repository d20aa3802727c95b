//! Builder API for ergonomic configuration construction.
//!
//! This module provides a fluent builder and a macro for creating machine
//! configurations with minimal boilerplate, as an alternative to parsing
//! the JSON wire format.

pub mod error;
pub mod macros;

pub use error::BuildError;

use indexmap::IndexMap;

use crate::core::{EventId, MachineConfig, StateDef, StateId};

/// Fluent builder for [`MachineConfig`].
///
/// States and transitions are kept in the order they were declared, which
/// is the order state queries iterate them in.
///
/// # Example
///
/// ```rust
/// use turnstile::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .initial("red")
///     .transition("red", "advance", "green")
///     .transition("green", "advance", "yellow")
///     .transition("yellow", "advance", "red")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.initial, "red");
/// assert_eq!(config.states.len(), 3);
/// ```
pub struct ConfigBuilder {
    initial: Option<StateId>,
    states: IndexMap<StateId, StateDef>,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: IndexMap::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateId>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state with no outgoing transitions.
    ///
    /// Re-declaring an existing state keeps its transitions.
    pub fn state(mut self, state: impl Into<StateId>) -> Self {
        self.states
            .entry(state.into())
            .or_insert_with(StateDef::default);
        self
    }

    /// Declare a transition; the source state is declared implicitly.
    ///
    /// The destination is not validated against the declared states, the
    /// same permissiveness construction itself has.
    pub fn transition(
        mut self,
        from: impl Into<StateId>,
        event: impl Into<EventId>,
        to: impl Into<StateId>,
    ) -> Self {
        self.states
            .entry(from.into())
            .or_insert_with(StateDef::default)
            .transitions
            .insert(event.into(), to.into());
        self
    }

    /// Build the configuration.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<MachineConfig, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        Ok(MachineConfig {
            initial,
            states: self.states,
        })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_validates_required_fields() {
        let result = ConfigBuilder::new().build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_requires_states() {
        let result = ConfigBuilder::new().initial("a").build();

        assert!(matches!(result, Err(BuildError::NoStates)));
    }

    #[test]
    fn fluent_api_builds_config() {
        let config = ConfigBuilder::new()
            .initial("locked")
            .transition("locked", "coin", "unlocked")
            .transition("unlocked", "push", "locked")
            .build()
            .unwrap();

        assert_eq!(config.initial, "locked");
        assert_eq!(config.target_for("locked", "coin").unwrap(), "unlocked");
        assert_eq!(config.target_for("unlocked", "push").unwrap(), "locked");
    }

    #[test]
    fn transition_declares_source_state_implicitly() {
        let config = ConfigBuilder::new()
            .initial("a")
            .transition("a", "go", "b")
            .build()
            .unwrap();

        assert!(config.contains_state("a"));
        // Destinations stay undeclared unless declared explicitly.
        assert!(!config.contains_state("b"));
    }

    #[test]
    fn redeclaring_a_state_keeps_its_transitions() {
        let config = ConfigBuilder::new()
            .initial("a")
            .transition("a", "go", "b")
            .state("a")
            .build()
            .unwrap();

        assert_eq!(config.target_for("a", "go").unwrap(), "b");
    }

    #[test]
    fn declaration_order_is_preserved() {
        let config = ConfigBuilder::new()
            .initial("c")
            .state("c")
            .state("a")
            .state("b")
            .build()
            .unwrap();

        let ids: Vec<&str> = config.states.keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }
}
