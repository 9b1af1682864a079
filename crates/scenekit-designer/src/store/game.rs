//! Game-mode projection: inventory and item combination state.

use scenekit_core::ElementId;

use crate::model::{CombinationResult, Element, InteractionKind};

use super::SceneStore;

impl SceneStore {
    /// Switches between edit mode and game mode. The model itself is left
    /// untouched; game mode is a projection over the same elements.
    pub fn toggle_game_mode(&mut self) {
        self.game_mode = !self.game_mode;
        self.inventory_open = false;
        self.dragged_inventory_item = None;
        tracing::debug!(game_mode = self.game_mode, "mode switched");
    }

    pub fn is_game_mode(&self) -> bool {
        self.game_mode
    }

    /// Opens or closes the inventory panel.
    pub fn toggle_inventory(&mut self) {
        self.inventory_open = !self.inventory_open;
    }

    pub fn is_inventory_open(&self) -> bool {
        self.inventory_open
    }

    /// Moves an element into the inventory. A discrete user action, so it
    /// commits. Returns false for stale ids and items already held.
    pub fn add_to_inventory(&mut self, id: ElementId) -> bool {
        if let Some(element) = self.find_element_mut(id) {
            if !element.in_inventory {
                element.in_inventory = true;
                self.commit_to_history();
                return true;
            }
        }
        false
    }

    /// Takes an element back out of the inventory.
    pub fn remove_from_inventory(&mut self, id: ElementId) {
        if let Some(element) = self.find_element_mut(id) {
            if element.in_inventory {
                element.in_inventory = false;
                self.commit_to_history();
            }
        }
        if self.dragged_inventory_item == Some(id) {
            self.dragged_inventory_item = None;
        }
    }

    /// Every element currently held in the inventory, scene-wide.
    pub fn inventory_items(&self) -> Vec<&Element> {
        self.canvases
            .iter()
            .flat_map(|c| c.elements.iter())
            .filter(|e| e.in_inventory)
            .collect()
    }

    /// Records which inventory item is mid-drag, if any.
    pub fn set_dragged_inventory_item(&mut self, id: Option<ElementId>) {
        self.dragged_inventory_item = id.filter(|&id| {
            self.find_element(id)
                .map(|e| e.in_inventory)
                .unwrap_or(false)
        });
    }

    pub fn dragged_inventory_item(&self) -> Option<ElementId> {
        self.dragged_inventory_item
    }

    /// Whether dropping `item_id` onto `target_id` would combine.
    pub fn can_combine(&self, item_id: ElementId, target_id: ElementId) -> bool {
        let Some(item) = self.find_element(item_id) else {
            return false;
        };
        if !item.in_inventory {
            return false;
        }
        self.find_element(target_id)
            .and_then(|t| t.interaction.as_ref())
            .map(|i| i.kind == InteractionKind::Combinable && i.can_combine_with.contains(&item_id))
            .unwrap_or(false)
    }

    /// Applies a successful combination's bookkeeping and returns the
    /// configured result for the caller to act on. The inventory item is
    /// consumed (removed from inventory and hidden); the target's
    /// interaction is cleared so the combination cannot re-trigger. One
    /// committed step.
    ///
    /// Returns `None` when the pair does not combine.
    pub(crate) fn consume_combination(
        &mut self,
        item_id: ElementId,
        target_id: ElementId,
    ) -> Option<CombinationResult> {
        if !self.can_combine(item_id, target_id) {
            return None;
        }
        let result = self
            .find_element(target_id)
            .and_then(|t| t.interaction.as_ref())
            .and_then(|i| i.combination_result.clone());

        if let Some(item) = self.find_element_mut(item_id) {
            item.in_inventory = false;
            item.is_hidden = true;
        }
        if let Some(target) = self.find_element_mut(target_id) {
            target.interaction = None;
        }
        if self.dragged_inventory_item == Some(item_id) {
            self.dragged_inventory_item = None;
        }
        self.commit_to_history();
        result
    }
}
