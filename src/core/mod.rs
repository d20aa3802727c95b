//! Core engine types and logic.
//!
//! This module contains the whole of the engine:
//! - Declarative machine configuration via [`MachineConfig`]
//! - The [`StateMachine`] itself
//! - Linear history tracking with an undo/redo cursor
//!
//! Everything here is synchronous and operates on a single owned instance;
//! there are no suspension points and no internal locking.

mod config;
mod error;
mod history;
mod machine;

pub use config::{EventId, MachineConfig, StateDef, StateId};
pub use error::FsmError;
pub use history::{HistoryEntry, Origin, TransitionLog};
pub use machine::StateMachine;
