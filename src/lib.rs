//! Turnstile: a declarative finite state machine engine
//!
//! Turnstile takes a declarative description of states and event-triggered
//! transitions, tracks a single active state, and keeps a linear undo/redo
//! history of every state change. All operations are synchronous and run on
//! one in-memory instance; callers sharing a machine across threads provide
//! their own mutual exclusion.
//!
//! # Core Concepts
//!
//! - **Configuration**: an immutable [`MachineConfig`] naming the initial
//!   state and, per state, the events it responds to
//! - **Transitions**: direct jumps via [`StateMachine::change_state`] or
//!   event-driven moves via [`StateMachine::trigger`]
//! - **History**: an append-growing [`TransitionLog`] with a cursor, walked
//!   backward and forward by [`StateMachine::undo`] / [`StateMachine::redo`]
//!
//! # Example
//!
//! ```rust
//! use turnstile::{ConfigBuilder, StateMachine};
//!
//! let config = ConfigBuilder::new()
//!     .initial("locked")
//!     .transition("locked", "coin", "unlocked")
//!     .transition("unlocked", "push", "locked")
//!     .build()
//!     .unwrap();
//!
//! let mut machine = StateMachine::new(config);
//! machine.trigger("coin").unwrap();
//! assert_eq!(machine.current_state(), "unlocked");
//!
//! assert!(machine.undo());
//! assert_eq!(machine.current_state(), "locked");
//! assert!(machine.redo());
//! assert_eq!(machine.current_state(), "unlocked");
//! ```

pub mod builder;
pub mod core;
pub mod snapshot;

// Re-export commonly used types
pub use crate::builder::{BuildError, ConfigBuilder};
pub use crate::core::{
    EventId, FsmError, HistoryEntry, MachineConfig, Origin, StateDef, StateId, StateMachine,
    TransitionLog,
};
pub use crate::snapshot::{Snapshot, SnapshotError};
