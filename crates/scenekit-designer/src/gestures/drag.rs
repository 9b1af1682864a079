use tracing::trace;

use scenekit_core::ElementId;

use crate::model::{ElementType, ElementUpdate, Point};
use crate::store::SceneStore;

/// Move gesture: translates an element by the pointer delta.
#[derive(Debug, Clone, PartialEq)]
pub struct DragGesture {
    element_id: ElementId,
    start_pointer: Point,
    start_position: Point,
    moved: bool,
}

impl DragGesture {
    /// Starts a drag on an element, capturing its current position.
    /// Returns `None` if the element does not exist, or if it is an
    /// image with no interaction in game mode. Such images are inert
    /// scenery while playing, not manipulable objects.
    pub fn begin(store: &SceneStore, element_id: ElementId, pointer: Point) -> Option<Self> {
        let element = store.find_element(element_id)?;
        if store.is_game_mode()
            && element.element_type == ElementType::Image
            && element.interaction.is_none()
        {
            return None;
        }
        Some(Self {
            element_id,
            start_pointer: pointer,
            start_position: element.position,
            moved: false,
        })
    }

    /// Applies one pointer sample as an uncommitted position update.
    /// Each sample supersedes the previous one, so callers should feed
    /// the latest sample per frame rather than queueing intermediates.
    pub fn update(&mut self, store: &mut SceneStore, pointer: Point) {
        let delta_x = pointer.x - self.start_pointer.x;
        let delta_y = pointer.y - self.start_pointer.y;
        if delta_x == 0.0 && delta_y == 0.0 {
            return;
        }
        self.moved = true;
        let position = Point::new(
            self.start_position.x + delta_x,
            self.start_position.y + delta_y,
        );
        trace!(element_id = %self.element_id, x = position.x, y = position.y, "drag frame");
        store.update_element_without_history(self.element_id, ElementUpdate::position(position));
    }

    /// Ends the gesture. Commits one history entry if any motion was
    /// applied; a pure click leaves the history untouched. Cancellation
    /// (pointer loss) uses the same path, whatever was applied stands.
    pub fn finish(self, store: &mut SceneStore) {
        if self.moved {
            store.commit_to_history();
        }
    }

    pub fn element_id(&self) -> ElementId {
        self.element_id
    }
}
