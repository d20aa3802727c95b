//! Linear transition history with an undo/redo cursor.
//!
//! The log is an append-growing sequence of [`HistoryEntry`] values plus a
//! cursor marking the entry the machine currently sits on. Appends advance
//! the cursor by one; undo and redo move the cursor without appending.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::config::StateId;

/// How a history entry came to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Origin {
    /// The seed entry, or an entry whose forward marker was cleared by an
    /// undo landing on it.
    Initial,
    /// Appended by a direct `change_state`.
    Manual,
    /// Appended by an event-driven `trigger`.
    Triggered,
}

/// A recorded point the machine passed through.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// State the machine was in.
    pub state: StateId,
    /// How the entry was produced. Redo is armed only while the entry
    /// under the cursor carries [`Origin::Initial`], which is true for the
    /// seed entry and for entries an undo has landed on.
    pub origin: Origin,
    /// When the entry was recorded. Informational only; no operation
    /// depends on it.
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    fn new(state: StateId, origin: Origin) -> Self {
        Self {
            state,
            origin,
            recorded_at: Utc::now(),
        }
    }
}

/// Ordered history of state changes plus the undo/redo cursor.
///
/// The log is never empty: it is seeded with one entry at construction and
/// `truncate_to` reseeds rather than clears. `cursor() < len()` holds at
/// all times.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransitionLog {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl TransitionLog {
    /// Create a log seeded with `initial` at cursor 0.
    pub fn new(initial: StateId) -> Self {
        Self {
            entries: vec![HistoryEntry::new(initial, Origin::Initial)],
            cursor: 0,
        }
    }

    /// Append an entry and advance the cursor by one.
    ///
    /// Entries always land at the end of the log, even when the cursor
    /// sits before the last entry after an undo. Stale forward entries
    /// stay in place; the fresh origin marker now under the cursor is what
    /// keeps redo from reaching them.
    pub fn record(&mut self, state: StateId, origin: Origin) {
        self.entries.push(HistoryEntry::new(state, origin));
        self.cursor += 1;
    }

    /// All recorded entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Position of the cursor within the log.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log holds no entries. Logs built through the engine
    /// always keep at least their seed entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry under the cursor.
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.cursor]
    }

    /// Move the cursor one step back.
    ///
    /// Returns the state at the new cursor position, clearing that entry's
    /// origin marker so a following `step_forward` is armed. Returns
    /// `None` when the log has a single entry or the cursor is already on
    /// the oldest entry.
    pub fn step_back(&mut self) -> Option<StateId> {
        if self.entries.len() == 1 || self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        let entry = &mut self.entries[self.cursor];
        entry.origin = Origin::Initial;
        Some(entry.state.clone())
    }

    /// Move the cursor one step forward.
    ///
    /// Armed only while the entry under the cursor carries a cleared
    /// origin marker, which happens exactly when an undo landed there; an
    /// intervening append leaves a fresh marker under the cursor and
    /// disarms redo. Returns the state at the new cursor position, or
    /// `None` when stepping forward is unavailable.
    pub fn step_forward(&mut self) -> Option<StateId> {
        if self.entries.len() == 1
            || self.cursor == self.entries.len() - 1
            || self.entries[self.cursor].origin != Origin::Initial
        {
            return None;
        }
        self.cursor += 1;
        Some(self.entries[self.cursor].state.clone())
    }

    /// Drop every entry and reseed the log with `state` at cursor 0.
    pub fn truncate_to(&mut self, state: StateId) {
        self.entries.clear();
        self.entries.push(HistoryEntry::new(state, Origin::Initial));
        self.cursor = 0;
    }
}
