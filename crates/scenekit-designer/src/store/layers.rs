//! Layer (z-order) operations for the scene store.
//!
//! Layers are plain integers, not necessarily contiguous; gaps are never
//! compacted. Layer 0 is reserved for the background element, so the floor
//! for every other element is 1.

use scenekit_core::constants::MIN_ELEMENT_LAYER;
use scenekit_core::ElementId;

use super::SceneStore;

impl SceneStore {
    /// The highest layer in use on the active canvas.
    pub fn get_highest_layer(&self) -> i64 {
        self.active_canvas().highest_layer()
    }

    /// Assigns an explicit layer, clamped to the non-background floor.
    /// Declined for the background element; stale ids are a no-op.
    pub fn update_element_layer(&mut self, id: ElementId, new_layer: i64) {
        let clamped = new_layer.max(MIN_ELEMENT_LAYER);
        let Some(element) = self.active_canvas_mut().get_mut(id) else {
            return;
        };
        if element.is_background() {
            tracing::warn!(%id, "declined layer change for background element");
            return;
        }
        if element.layer != clamped {
            element.layer = clamped;
            self.commit_to_history();
        }
    }

    /// Moves the element above everything else.
    pub fn bring_to_front(&mut self, id: ElementId) {
        let top = self.get_highest_layer() + 1;
        self.update_element_layer(id, top);
    }

    /// Moves the element to the bottom of the non-background stack.
    pub fn send_to_back(&mut self, id: ElementId) {
        self.update_element_layer(id, MIN_ELEMENT_LAYER);
    }

    /// Moves the element one step up.
    pub fn move_layer_up(&mut self, id: ElementId) {
        if let Some(layer) = self.get_element(id).map(|e| e.layer) {
            self.update_element_layer(id, layer + 1);
        }
    }

    /// Moves the element one step down, with a floor at layer 1.
    pub fn move_layer_down(&mut self, id: ElementId) {
        if let Some(layer) = self.get_element(id).map(|e| e.layer) {
            self.update_element_layer(id, layer - 1);
        }
    }
}
