//! Scene store: the design-state core.
//!
//! Owns the list of canvases, the active canvas/element selection, layer
//! assignment, and every mutation operation, composing the element model
//! with the history engine.
//!
//! This module is split into submodules for better organization:
//! - `elements`: element creation, sparse updates, removal, duplication
//! - `layers`: z-order assignment and reordering
//! - `canvases`: canvas lifecycle and navigation
//! - `selection`: active element, multi-select, marquee selection
//! - `game`: game-mode projection, inventory, combinations
//!
//! Failure semantics: lookups by id are tolerant (no-op when the id is
//! stale), and structural invariants (single background, layer 0
//! reservation, at least one canvas) are enforced here at the mutation
//! boundary by declining the operation, never by throwing.

mod canvases;
mod elements;
mod game;
mod layers;
mod selection;

use scenekit_core::constants::HISTORY_DEPTH;
use scenekit_core::ElementId;

use crate::history::SnapshotHistory;
use crate::model::{Canvas, Element};

/// The single shared mutable resource of the editor.
///
/// All mutation happens on the one event-processing thread; gesture
/// controllers re-read current element state from here rather than caching
/// position/size across an async boundary.
#[derive(Debug, Clone)]
pub struct SceneStore {
    canvases: Vec<Canvas>,
    active_canvas_index: usize,
    active_element_id: Option<ElementId>,
    selected_element_ids: Vec<ElementId>,
    history: SnapshotHistory,
    game_mode: bool,
    inventory_open: bool,
    dragged_inventory_item: Option<ElementId>,
    is_modified: bool,
}

impl SceneStore {
    /// Creates a store with a single empty canvas.
    pub fn new() -> Self {
        let canvases = vec![Canvas::new("Canvas 1")];
        let history = SnapshotHistory::new(canvases.clone(), HISTORY_DEPTH);
        Self {
            canvases,
            active_canvas_index: 0,
            active_element_id: None,
            selected_element_ids: Vec::new(),
            history,
            game_mode: false,
            inventory_open: false,
            dragged_inventory_item: None,
            is_modified: false,
        }
    }

    /// Replaces the whole scene, e.g. after loading a project file.
    /// History is reseeded; the load itself is not undoable.
    pub fn load(&mut self, canvases: Vec<Canvas>, active_canvas_index: usize) {
        debug_assert!(!canvases.is_empty(), "a project always has a canvas");
        self.active_canvas_index = active_canvas_index.min(canvases.len().saturating_sub(1));
        self.canvases = canvases;
        self.history.reset(self.canvases.clone());
        self.active_element_id = None;
        self.selected_element_ids.clear();
        self.dragged_inventory_item = None;
        self.is_modified = false;
    }

    // --- Queries ---

    pub fn canvases(&self) -> &[Canvas] {
        &self.canvases
    }

    pub fn active_canvas_index(&self) -> usize {
        self.active_canvas_index
    }

    pub fn active_canvas(&self) -> &Canvas {
        &self.canvases[self.active_canvas_index]
    }

    pub(crate) fn active_canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvases[self.active_canvas_index]
    }

    /// The active (last placed or clicked) element on the active canvas.
    pub fn active_element(&self) -> Option<&Element> {
        self.active_canvas().get(self.active_element_id?)
    }

    pub fn active_element_id(&self) -> Option<ElementId> {
        self.active_element_id
    }

    pub fn selected_element_ids(&self) -> &[ElementId] {
        &self.selected_element_ids
    }

    /// Looks up an element on the active canvas.
    pub fn get_element(&self, id: ElementId) -> Option<&Element> {
        self.active_canvas().get(id)
    }

    /// Looks up an element on any canvas. Inventory items keep living on
    /// their home canvas, so game-mode code resolves ids scene-wide.
    pub fn find_element(&self, id: ElementId) -> Option<&Element> {
        self.canvases.iter().find_map(|c| c.get(id))
    }

    pub(crate) fn find_element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.canvases.iter_mut().find_map(|c| c.get_mut(id))
    }

    /// Whether the scene has uncommitted-to-disk changes.
    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    pub(crate) fn mark_modified(&mut self) {
        self.is_modified = true;
    }

    /// Marks the scene clean, e.g. after a successful save.
    pub fn mark_saved(&mut self) {
        self.is_modified = false;
    }

    // --- History ---

    /// Records the current scene as one undoable step. Called implicitly
    /// by every committed mutation and exactly once by a gesture on
    /// release.
    pub fn commit_to_history(&mut self) {
        self.history.commit(self.canvases.clone());
        self.is_modified = true;
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Restores the previous snapshot. Returns false at the bottom of the
    /// stack.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    /// Restores the next snapshot. Returns false at the top of the stack.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    fn restore(&mut self, snapshot: Vec<Canvas>) {
        self.canvases = snapshot;
        if self.active_canvas_index >= self.canvases.len() {
            self.active_canvas_index = self.canvases.len() - 1;
        }
        // Selection may reference elements that no longer exist.
        self.selected_element_ids
            .retain(|id| self.canvases.iter().any(|c| c.get(*id).is_some()));
        if let Some(id) = self.active_element_id {
            if self.find_element(id).is_none() {
                self.active_element_id = None;
            }
        }
        self.is_modified = true;
    }
}

impl Default for SceneStore {
    fn default() -> Self {
        Self::new()
    }
}
