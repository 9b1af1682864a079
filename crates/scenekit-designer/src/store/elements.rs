//! Element operations (add, update, remove, duplicate) for the scene store.

use scenekit_core::constants::DUPLICATE_OFFSET;
use scenekit_core::ElementId;

use crate::geometry;
use crate::model::{Element, ElementType, ElementUpdate, Point, Size};

use super::SceneStore;

impl SceneStore {
    /// Adds a type-appropriate default element to the active canvas, makes
    /// it the active element, and returns it so callers (e.g. the image
    /// upload flow) can immediately attach async-loaded data by id.
    ///
    /// The background is special-cased: if the canvas already has one, its
    /// style is updated in place instead of creating a duplicate, and any
    /// non-background element sitting at layer 0 is pushed above the
    /// current highest layer so layer 0 stays reserved.
    pub fn add_element(&mut self, element_type: ElementType) -> Element {
        let template = Element::new(element_type);
        self.add_element_from(template)
    }

    /// Adds a pre-built element, applying the same layer and background
    /// rules as [`SceneStore::add_element`].
    pub fn add_element_from(&mut self, mut element: Element) -> Element {
        if element.element_type == ElementType::Background {
            let style = element.style.clone();
            if let Some(existing) = self.active_canvas_mut().background_mut() {
                for (k, v) in style {
                    existing.style.insert(k, v);
                }
                let updated = existing.clone();
                self.commit_to_history();
                return updated;
            }
            element.layer = 0;
            // Layer 0 belongs to the background alone. Anything squatting
            // there is pushed above the current top.
            let highest = self.active_canvas().highest_layer();
            let canvas = self.active_canvas_mut();
            let mut next = highest + 1;
            for other in canvas.elements.iter_mut() {
                if other.layer == 0 && !other.is_background() {
                    other.layer = next;
                    next += 1;
                }
            }
        } else {
            element.layer = self.active_canvas().highest_layer() + 1;
        }

        let added = element.clone();
        self.active_canvas_mut().elements.push(element);
        self.active_element_id = Some(added.id);
        self.commit_to_history();
        added
    }

    /// Merges a sparse update into the element and records one history
    /// entry. This is the committed mutation path; a stale id is a no-op.
    pub fn update_element(&mut self, id: ElementId, update: ElementUpdate) {
        if self.apply_to_element(id, &update) {
            self.commit_to_history();
        }
    }

    /// Identical merge semantics to [`SceneStore::update_element`] but
    /// without a history entry. Used for every intermediate frame of a
    /// gesture so a drag does not flood the undo stack with per-pixel
    /// states. Still flags the scene as having unsaved changes.
    pub fn update_element_without_history(&mut self, id: ElementId, update: ElementUpdate) {
        if self.apply_to_element(id, &update) {
            self.mark_modified();
        }
    }

    fn apply_to_element(&mut self, id: ElementId, update: &ElementUpdate) -> bool {
        match self.active_canvas_mut().get_mut(id) {
            Some(element) => {
                element.apply_update(update);
                true
            }
            None => {
                tracing::debug!(%id, "update for unknown element dropped");
                false
            }
        }
    }

    /// Removes an element from the active canvas. Clears it from the
    /// active/selected sets. Stale ids are a no-op.
    pub fn remove_element(&mut self, id: ElementId) {
        if self.active_canvas_mut().remove(id).is_some() {
            self.forget_element(id);
            self.commit_to_history();
        }
    }

    /// Removes several elements as a single undoable step.
    pub fn remove_multiple_elements(&mut self, ids: &[ElementId]) {
        let mut removed_any = false;
        for &id in ids {
            if self.active_canvas_mut().remove(id).is_some() {
                self.forget_element(id);
                removed_any = true;
            }
        }
        if removed_any {
            self.commit_to_history();
        }
    }

    fn forget_element(&mut self, id: ElementId) {
        if self.active_element_id == Some(id) {
            self.active_element_id = None;
        }
        self.selected_element_ids.retain(|&sid| sid != id);
        if self.dragged_inventory_item == Some(id) {
            self.dragged_inventory_item = None;
        }
    }

    /// Duplicates an element on the active canvas: fresh id, position
    /// offset by (+20, +20), everything else deep-copied including asset
    /// references and style. The copy lands on top and becomes active.
    ///
    /// The background is not duplicable; a canvas has at most one.
    pub fn duplicate_element(&mut self, id: ElementId) -> Option<Element> {
        let source = self.active_canvas().get(id)?;
        if source.is_background() {
            tracing::warn!(%id, "declined to duplicate background element");
            return None;
        }
        let mut copy = source.clone();
        copy.id = uuid::Uuid::new_v4();
        copy.position = Point::new(
            copy.position.x + DUPLICATE_OFFSET,
            copy.position.y + DUPLICATE_OFFSET,
        );
        copy.layer = self.active_canvas().highest_layer() + 1;
        let added = copy.clone();
        self.active_canvas_mut().elements.push(copy);
        self.active_element_id = Some(added.id);
        self.commit_to_history();
        Some(added)
    }

    /// Duplicates several elements as a single undoable step, e.g. a
    /// copy/paste of the whole marquee selection. The copies become the
    /// new selection. Background and stale ids are skipped.
    pub fn duplicate_multiple_elements(&mut self, ids: &[ElementId]) -> Vec<Element> {
        let mut next_layer = self.active_canvas().highest_layer() + 1;
        let mut copies = Vec::new();
        for &id in ids {
            let Some(source) = self.active_canvas().get(id) else {
                continue;
            };
            if source.is_background() {
                continue;
            }
            let mut copy = source.clone();
            copy.id = uuid::Uuid::new_v4();
            copy.position = Point::new(
                copy.position.x + DUPLICATE_OFFSET,
                copy.position.y + DUPLICATE_OFFSET,
            );
            copy.layer = next_layer;
            next_layer += 1;
            self.active_canvas_mut().elements.push(copy.clone());
            copies.push(copy);
        }
        if !copies.is_empty() {
            self.selected_element_ids = copies.iter().map(|e| e.id).collect();
            self.active_element_id = self.selected_element_ids.first().copied();
            self.commit_to_history();
        }
        copies
    }

    /// Resizes an image element to a percentage of its natural size,
    /// both dimensions scaled by the same factor so the aspect ratio is
    /// preserved by construction. The percentage is clamped to the
    /// slider's 10-200 range. Elements without an `original_size` are
    /// left alone.
    pub fn scale_element_to_percent(&mut self, id: ElementId, percent: f64) {
        let Some(original) = self.get_element(id).and_then(|e| e.original_size) else {
            return;
        };
        let size = geometry::scaled_size(original, percent);
        self.update_element(id, ElementUpdate::size(size));
    }

    /// Attaches asset-pipeline output to an image element: the content
    /// reference, the natural dimensions, and a display size computed by
    /// the aspect-preserving placement rule. The element is also centered
    /// on its new size. Tolerates the element having been deleted while
    /// the asset loaded.
    pub fn attach_image_data(&mut self, id: ElementId, src: String, natural: Size) {
        let size = geometry::image_placement_size(natural);
        let position = Point::new(
            (scenekit_core::constants::CANVAS_WIDTH - size.width) / 2.0,
            (scenekit_core::constants::CANVAS_HEIGHT - size.height) / 2.0,
        );
        self.update_element(
            id,
            ElementUpdate {
                src: Some(src),
                original_size: Some(natural),
                size: Some(size),
                position: Some(position),
                ..Default::default()
            },
        );
    }
}
