//! Canvas lifecycle operations for the scene store.

use scenekit_core::CanvasId;

use crate::model::Canvas;

use super::SceneStore;

impl SceneStore {
    /// Appends a new empty canvas and makes it active.
    pub fn add_canvas(&mut self) -> CanvasId {
        let canvas = Canvas::new(format!("Canvas {}", self.canvases.len() + 1));
        let id = canvas.id;
        self.canvases.push(canvas);
        self.active_canvas_index = self.canvases.len() - 1;
        self.active_element_id = None;
        self.selected_element_ids.clear();
        self.commit_to_history();
        id
    }

    /// Removes the canvas at `index`. Declined when it is the only canvas
    /// or the index is out of range.
    pub fn remove_canvas(&mut self, index: usize) -> bool {
        if self.canvases.len() <= 1 {
            tracing::warn!("declined to remove the last canvas");
            return false;
        }
        if index >= self.canvases.len() {
            return false;
        }
        self.canvases.remove(index);
        if self.active_canvas_index >= self.canvases.len() {
            self.active_canvas_index = self.canvases.len() - 1;
        } else if index < self.active_canvas_index {
            self.active_canvas_index -= 1;
        }
        self.active_element_id = None;
        self.selected_element_ids.clear();
        self.commit_to_history();
        true
    }

    /// Deep-copies the canvas at `index`, inserting the copy right after
    /// the original and making it active. Returns the new canvas id.
    pub fn duplicate_canvas(&mut self, index: usize) -> Option<CanvasId> {
        let source = self.canvases.get(index)?;
        let copy = source.duplicate(format!("{} copy", source.name));
        let id = copy.id;
        self.canvases.insert(index + 1, copy);
        self.active_canvas_index = index + 1;
        self.active_element_id = None;
        self.selected_element_ids.clear();
        self.commit_to_history();
        Some(id)
    }

    /// Moves the canvas at `from` to position `to`, keeping the same
    /// canvas active. Out-of-range indices decline the operation.
    pub fn reorder_canvases(&mut self, from: usize, to: usize) -> bool {
        if from >= self.canvases.len() || to >= self.canvases.len() {
            return false;
        }
        if from == to {
            return true;
        }
        let active_id = self.canvases[self.active_canvas_index].id;
        let canvas = self.canvases.remove(from);
        self.canvases.insert(to, canvas);
        if let Some(idx) = self.canvases.iter().position(|c| c.id == active_id) {
            self.active_canvas_index = idx;
        }
        self.commit_to_history();
        true
    }

    /// Renames a canvas by id. Stale ids are a no-op.
    pub fn update_canvas_name(&mut self, id: CanvasId, name: impl Into<String>) {
        if let Some(canvas) = self.canvases.iter_mut().find(|c| c.id == id) {
            canvas.name = name.into();
            self.commit_to_history();
        }
    }

    /// Switches the active canvas. A pure index change: no element moves,
    /// no history entry. Out-of-range indices are declined.
    pub fn set_active_canvas(&mut self, index: usize) -> bool {
        if index >= self.canvases.len() {
            return false;
        }
        if index != self.active_canvas_index {
            self.active_canvas_index = index;
            self.active_element_id = None;
            self.selected_element_ids.clear();
        }
        true
    }

    /// Resolves a canvas id to its current index.
    pub fn canvas_index_of(&self, id: CanvasId) -> Option<usize> {
        self.canvases.iter().position(|c| c.id == id)
    }
}
