use tracing::trace;

use scenekit_core::constants::ROTATION_DEAD_ZONE_DEG;
use scenekit_core::ElementId;

use crate::geometry;
use crate::model::{ElementUpdate, Point, StyleValue};
use crate::store::SceneStore;

/// Rotate gesture: accumulates incremental pointer angle deltas around the
/// element's center.
///
/// Deltas between consecutive samples are normalized into [-180, 180]
/// before accumulating so that crossing the atan2 wrap boundary does not
/// produce a near-360 degree jump. Sub-degree deltas are dropped to
/// suppress pointer jitter.
#[derive(Debug, Clone, PartialEq)]
pub struct RotateGesture {
    element_id: ElementId,
    center: Point,
    last_angle: f64,
    rotation: f64,
    moved: bool,
}

impl RotateGesture {
    /// Starts a rotation, capturing the element's center, its current
    /// rotation, and the initial pointer angle.
    pub fn begin(store: &SceneStore, element_id: ElementId, pointer: Point) -> Option<Self> {
        let element = store.find_element(element_id)?;
        let center = element.center();
        Some(Self {
            element_id,
            center,
            last_angle: geometry::pointer_angle(center, pointer),
            rotation: geometry::get_rotation(element),
            moved: false,
        })
    }

    /// Applies one pointer sample, rewriting the rotate() token in the
    /// element's transform string while preserving any other transform
    /// functions in it.
    pub fn update(&mut self, store: &mut SceneStore, pointer: Point) {
        let angle = geometry::pointer_angle(self.center, pointer);
        let delta = geometry::normalize_angle_delta(angle - self.last_angle);
        self.last_angle = angle;
        if delta.abs() < ROTATION_DEAD_ZONE_DEG {
            return;
        }
        self.moved = true;
        self.rotation += delta;
        let degrees = self.rotation.round();

        let Some(element) = store.find_element(self.element_id) else {
            return;
        };
        let transform = geometry::with_rotation(element.transform().unwrap_or(""), degrees);
        trace!(element_id = %self.element_id, degrees, "rotate frame");
        store.update_element_without_history(
            self.element_id,
            ElementUpdate::style_entry("transform", StyleValue::from(transform)),
        );
    }

    /// Ends the gesture, committing once if any rotation was applied.
    pub fn finish(self, store: &mut SceneStore) {
        if self.moved {
            store.commit_to_history();
        }
    }

    pub fn element_id(&self) -> ElementId {
        self.element_id
    }

    /// The accumulated rotation in degrees, unrounded.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }
}
