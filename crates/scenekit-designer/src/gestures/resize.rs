use tracing::trace;

use scenekit_core::constants::MIN_ELEMENT_SIZE;
use scenekit_core::ElementId;

use crate::model::{ElementUpdate, Point, Size};
use crate::store::SceneStore;

/// The eight resize handles around an element's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeHandle {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl ResizeHandle {
    fn moves_west_edge(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    fn moves_east_edge(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    fn moves_north_edge(self) -> bool {
        matches!(self, Self::North | Self::NorthWest | Self::NorthEast)
    }

    fn moves_south_edge(self) -> bool {
        matches!(self, Self::South | Self::SouthWest | Self::SouthEast)
    }
}

/// Resize gesture: drags one handle while the opposite edge stays put.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeGesture {
    element_id: ElementId,
    handle: ResizeHandle,
    start_pointer: Point,
    start_position: Point,
    start_size: Size,
    moved: bool,
}

impl ResizeGesture {
    /// Starts a resize from one of the eight handles. Returns `None` for
    /// unknown elements and for elements without an explicit size.
    pub fn begin(
        store: &SceneStore,
        element_id: ElementId,
        handle: ResizeHandle,
        pointer: Point,
    ) -> Option<Self> {
        let element = store.find_element(element_id)?;
        let size = element.size?;
        Some(Self {
            element_id,
            handle,
            start_pointer: pointer,
            start_position: element.position,
            start_size: size,
            moved: false,
        })
    }

    /// Applies one pointer sample as an uncommitted size (and, for the
    /// west/north edges, position) update. The dragged edge follows the
    /// pointer, the far edge is anchored, and each dimension floors at
    /// the minimum element size rather than collapsing or inverting.
    pub fn update(&mut self, store: &mut SceneStore, pointer: Point) {
        let dx = pointer.x - self.start_pointer.x;
        let dy = pointer.y - self.start_pointer.y;
        if dx == 0.0 && dy == 0.0 {
            return;
        }
        self.moved = true;

        let mut width = self.start_size.width;
        let mut height = self.start_size.height;
        let mut x = self.start_position.x;
        let mut y = self.start_position.y;

        if self.handle.moves_east_edge() {
            width = (self.start_size.width + dx).max(MIN_ELEMENT_SIZE);
        } else if self.handle.moves_west_edge() {
            width = (self.start_size.width - dx).max(MIN_ELEMENT_SIZE);
            // Anchor the east edge: shift x by exactly the width change.
            x = self.start_position.x + (self.start_size.width - width);
        }

        if self.handle.moves_south_edge() {
            height = (self.start_size.height + dy).max(MIN_ELEMENT_SIZE);
        } else if self.handle.moves_north_edge() {
            height = (self.start_size.height - dy).max(MIN_ELEMENT_SIZE);
            y = self.start_position.y + (self.start_size.height - height);
        }

        trace!(
            element_id = %self.element_id,
            width,
            height,
            "resize frame"
        );
        store.update_element_without_history(
            self.element_id,
            ElementUpdate {
                position: Some(Point::new(x, y)),
                size: Some(Size::new(width, height)),
                ..Default::default()
            },
        );
    }

    /// Ends the gesture, committing once if any motion was applied.
    pub fn finish(self, store: &mut SceneStore) {
        if self.moved {
            store.commit_to_history();
        }
    }

    pub fn element_id(&self) -> ElementId {
        self.element_id
    }

    pub fn handle(&self) -> ResizeHandle {
        self.handle
    }
}
