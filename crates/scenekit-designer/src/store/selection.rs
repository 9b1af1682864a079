//! Selection operations for the scene store.

use scenekit_core::ElementId;

use crate::geometry;

use super::SceneStore;

impl SceneStore {
    /// Makes an element active (the target of property panels and single-
    /// element gestures). Stale ids clear the active element instead.
    pub fn set_active_element(&mut self, id: Option<ElementId>) {
        self.active_element_id = id.filter(|&id| self.active_canvas().get(id).is_some());
    }

    /// Replaces the multi-selection with the given ids, dropping any that
    /// do not resolve on the active canvas.
    pub fn select_multiple_elements(&mut self, ids: &[ElementId]) {
        self.selected_element_ids = ids
            .iter()
            .copied()
            .filter(|&id| self.active_canvas().get(id).is_some())
            .collect();
        self.active_element_id = self.selected_element_ids.first().copied();
    }

    /// Clears both the multi-selection and the active element.
    pub fn clear_selection(&mut self) {
        self.selected_element_ids.clear();
        self.active_element_id = None;
    }

    /// Marquee selection: selects every element on the active canvas whose
    /// bounding box intersects the rectangle (boundary contact counts).
    /// Background and hidden elements are never candidates regardless of
    /// overlap. With `additive`, the result is unioned with the existing
    /// selection; otherwise it replaces it.
    pub fn marquee_select(&mut self, x: f64, y: f64, width: f64, height: f64, additive: bool) {
        // Normalize so a drag in any direction produces the same rect.
        let (rx, rw) = if width < 0.0 { (x + width, -width) } else { (x, width) };
        let (ry, rh) = if height < 0.0 { (y + height, -height) } else { (y, height) };
        let rect = (rx, ry, rx + rw, ry + rh);

        let hits: Vec<ElementId> = self
            .active_canvas()
            .elements
            .iter()
            .filter(|e| !e.is_background() && !e.is_hidden)
            .filter(|e| geometry::rects_intersect(e.bounds(), rect))
            .map(|e| e.id)
            .collect();

        if additive {
            for id in hits {
                if !self.selected_element_ids.contains(&id) {
                    self.selected_element_ids.push(id);
                }
            }
        } else {
            self.selected_element_ids = hits;
        }
        self.active_element_id = self.selected_element_ids.first().copied();
    }
}
