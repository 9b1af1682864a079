//! Undo/redo over immutable scene snapshots.
//!
//! The history is a linear stack of snapshots of the canvases array plus a
//! cursor. Committing after the cursor has moved back truncates the forward
//! (redo) branch. The commit boundary is gesture-granular: live updates
//! during a drag/resize/rotate never touch the history; the gesture
//! controller commits exactly once on release, so one user-perceived
//! gesture is one undoable step.

use crate::model::Canvas;

/// Snapshot-based undo/redo manager.
#[derive(Debug, Clone)]
pub struct SnapshotHistory {
    snapshots: Vec<Vec<Canvas>>,
    cursor: usize,
    max_depth: usize,
    enabled: bool,
}

impl SnapshotHistory {
    /// Creates a history seeded with the initial scene state.
    pub fn new(initial: Vec<Canvas>, max_depth: usize) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
            max_depth: max_depth.max(1),
            enabled: true,
        }
    }

    /// Records a checkpoint. Any redo branch beyond the cursor is
    /// discarded; the oldest snapshot is dropped once the stack exceeds
    /// the configured depth.
    pub fn commit(&mut self, snapshot: Vec<Canvas>) {
        if !self.enabled {
            return;
        }
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        self.cursor += 1;
        // +1: the stack holds the current state in addition to undo steps.
        if self.snapshots.len() > self.max_depth + 1 {
            self.snapshots.remove(0);
            self.cursor -= 1;
        }
    }

    /// Moves the cursor back one step and returns that snapshot.
    pub fn undo(&mut self) -> Option<Vec<Canvas>> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        Some(self.snapshots[self.cursor].clone())
    }

    /// Moves the cursor forward one step and returns that snapshot.
    pub fn redo(&mut self) -> Option<Vec<Canvas>> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        Some(self.snapshots[self.cursor].clone())
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Number of states reachable by undo.
    pub fn undo_depth(&self) -> usize {
        self.cursor
    }

    /// Number of states reachable by redo.
    pub fn redo_depth(&self) -> usize {
        self.snapshots.len() - 1 - self.cursor
    }

    /// Discards all history and reseeds with the given state.
    /// Used when loading a project from disk.
    pub fn reset(&mut self, initial: Vec<Canvas>) {
        self.snapshots = vec![initial];
        self.cursor = 0;
    }

    /// Whether checkpoints are currently being recorded.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables checkpoint recording. Undo/redo of already
    /// recorded states remains available while disabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}
