//! Snapshot and restore for machine runtime state.
//!
//! A snapshot captures what the engine has accumulated at runtime: the
//! active state and the transition log with its cursor. It never includes
//! the configuration; the caller supplies that again on restore, so
//! machine definitions are not persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{MachineConfig, StateId, StateMachine, TransitionLog};

pub mod error;

pub use error::SnapshotError;

/// Version identifier for the snapshot format.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable capture of a machine's runtime state.
///
/// # Example
///
/// ```rust
/// use turnstile::{machine_config, Snapshot, StateMachine};
///
/// let config = machine_config! {
///     initial: "locked",
///     states: {
///         "locked" => { "coin" => "unlocked" },
///         "unlocked" => { "push" => "locked" },
///     }
/// };
///
/// let mut machine = StateMachine::new(config.clone());
/// machine.trigger("coin").unwrap();
///
/// let bytes = Snapshot::capture(&machine).to_bytes().unwrap();
///
/// let mut restored = Snapshot::from_bytes(&bytes)
///     .unwrap()
///     .restore(config)
///     .unwrap();
/// assert_eq!(restored.current_state(), "unlocked");
/// assert!(restored.undo());
/// assert_eq!(restored.current_state(), "locked");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version.
    pub version: u32,

    /// Unique snapshot identifier.
    pub id: String,

    /// When the snapshot was taken.
    pub created_at: DateTime<Utc>,

    /// Active state at capture time. Can legitimately disagree with the
    /// log's cursor entry when the machine was reset before capture.
    pub active: StateId,

    /// Transition log, including the cursor position.
    pub log: TransitionLog,
}

impl Snapshot {
    /// Capture the runtime state of a machine.
    pub fn capture(machine: &StateMachine) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            active: machine.current_state().to_owned(),
            log: machine.history().clone(),
        }
    }

    /// Encode to JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode and validate from JSON.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Encode to the binary format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode and validate from the binary format.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Rebuild a machine from this snapshot and its configuration.
    ///
    /// The configuration is supplied by the caller; snapshots never carry
    /// machine definitions.
    pub fn restore(self, config: MachineConfig) -> Result<StateMachine, SnapshotError> {
        self.validate()?;
        Ok(StateMachine::from_parts(config, self.active, self.log))
    }

    fn validate(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        if self.log.is_empty() {
            return Err(SnapshotError::ValidationFailed(
                "transition log holds no entries".to_string(),
            ));
        }
        if self.log.cursor() >= self.log.len() {
            return Err(SnapshotError::ValidationFailed(format!(
                "cursor {} out of bounds for log of {} entries",
                self.log.cursor(),
                self.log.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine() -> (MachineConfig, StateMachine) {
        let config = MachineConfig::from_json(
            r#"{
                "initial": "locked",
                "states": {
                    "locked":   { "transitions": { "coin": "unlocked" } },
                    "unlocked": { "transitions": { "push": "locked" } }
                }
            }"#,
        )
        .unwrap();
        let machine = StateMachine::new(config.clone());
        (config, machine)
    }

    #[test]
    fn capture_records_runtime_state() {
        let (_, mut machine) = machine();
        machine.trigger("coin").unwrap();

        let snapshot = Snapshot::capture(&machine);

        assert_eq!(snapshot.version, SNAPSHOT_VERSION);
        assert_eq!(snapshot.active, "unlocked");
        assert_eq!(snapshot.log.len(), 2);
        assert_eq!(snapshot.log.cursor(), 1);
    }

    #[test]
    fn restore_reattaches_the_supplied_config() {
        let (config, mut machine) = machine();
        machine.trigger("coin").unwrap();

        let snapshot = Snapshot::capture(&machine);
        let mut restored = snapshot.restore(config).unwrap();

        assert_eq!(restored.current_state(), "unlocked");
        restored.trigger("push").unwrap();
        assert_eq!(restored.current_state(), "locked");
    }

    #[test]
    fn restored_machine_keeps_undo_history() {
        let (config, mut machine) = machine();
        machine.trigger("coin").unwrap();

        let snapshot = Snapshot::capture(&machine);
        let mut restored = snapshot.restore(config).unwrap();

        assert!(restored.undo());
        assert_eq!(restored.current_state(), "locked");
        assert!(restored.redo());
        assert_eq!(restored.current_state(), "unlocked");
    }

    #[test]
    fn snapshot_roundtrips_through_json_and_bytes() {
        let (_, mut machine) = machine();
        machine.trigger("coin").unwrap();
        let snapshot = Snapshot::capture(&machine);

        let json = snapshot.to_json().unwrap();
        let from_json = Snapshot::from_json(&json).unwrap();
        assert_eq!(from_json.active, snapshot.active);
        assert_eq!(from_json.log.entries(), snapshot.log.entries());

        let bytes = snapshot.to_bytes().unwrap();
        let from_bytes = Snapshot::from_bytes(&bytes).unwrap();
        assert_eq!(from_bytes.active, snapshot.active);
        assert_eq!(from_bytes.log.cursor(), snapshot.log.cursor());
    }

    #[test]
    fn snapshot_preserves_reset_asymmetry() {
        let (config, mut machine) = machine();
        machine.trigger("coin").unwrap();
        machine.reset();

        let restored = Snapshot::capture(&machine).restore(config).unwrap();

        // Active state and cursor entry disagree, exactly as before capture.
        assert_eq!(restored.current_state(), "locked");
        assert_eq!(restored.history().current().state, "unlocked");
        assert_eq!(restored.history().cursor(), 1);
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let json = r#"{
            "version": 99,
            "id": "one-off",
            "created_at": "2026-01-01T00:00:00Z",
            "active": "locked",
            "log": {
                "entries": [
                    { "state": "locked", "origin": "Initial",
                      "recorded_at": "2026-01-01T00:00:00Z" }
                ],
                "cursor": 0
            }
        }"#;

        let result = Snapshot::from_json(json);
        assert!(matches!(
            result,
            Err(SnapshotError::UnsupportedVersion { found: 99, .. })
        ));
    }

    #[test]
    fn out_of_bounds_cursor_is_rejected() {
        let json = r#"{
            "version": 1,
            "id": "one-off",
            "created_at": "2026-01-01T00:00:00Z",
            "active": "locked",
            "log": {
                "entries": [
                    { "state": "locked", "origin": "Initial",
                      "recorded_at": "2026-01-01T00:00:00Z" }
                ],
                "cursor": 3
            }
        }"#;

        let result = Snapshot::from_json(json);
        assert!(matches!(result, Err(SnapshotError::ValidationFailed(_))));
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        let result = Snapshot::from_bytes(&[0xff, 0x00, 0x12]);
        assert!(matches!(
            result,
            Err(SnapshotError::DeserializationFailed(_))
        ));
    }
}
