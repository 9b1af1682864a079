//! Game-mode interaction dispatch.
//!
//! Activating an element in game mode maps its configured interaction to
//! an [`InteractionEffect`] the host shell acts on. Effects that change
//! scene state (inventory pickup, canvas navigation, item combination)
//! are applied by the store itself before the effect is returned;
//! everything else is reported back as data.

use tracing::debug;

use scenekit_core::{CanvasId, ElementId};

use crate::model::{CombinationResult, InteractionKind, MessagePosition};
use crate::puzzles::ActivePuzzle;
use crate::store::SceneStore;

/// Outcome of activating an element in game mode.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionEffect {
    /// Nothing configured, or the element was not found.
    None,
    /// Show a message overlay.
    ShowMessage {
        message: String,
        position: MessagePosition,
    },
    /// Play a sound.
    PlaySound { url: String },
    /// Open a puzzle overlay for the given element. Carries the seeded
    /// session so the host can run it even when the source config is no
    /// longer reachable, as after a combination cleared the target.
    OpenPuzzle {
        element_id: ElementId,
        puzzle: ActivePuzzle,
    },
    /// The active canvas was switched to this canvas.
    NavigateToCanvas { canvas_id: CanvasId },
    /// The element was picked up into the inventory.
    AddedToInventory { element_id: ElementId },
    /// The element accepts inventory items dropped onto it.
    AwaitCombination { element_id: ElementId },
}

impl SceneStore {
    /// Dispatches a game-mode click on an element to its configured
    /// interaction. Unknown ids and incomplete configurations fall back
    /// to [`InteractionEffect::None`].
    pub fn activate_element(&mut self, id: ElementId) -> InteractionEffect {
        let Some(element) = self.find_element(id) else {
            debug!(element_id = %id, "activate: element not found");
            return InteractionEffect::None;
        };
        let Some(interaction) = element.interaction.clone() else {
            return InteractionEffect::None;
        };

        match interaction.kind {
            InteractionKind::None => InteractionEffect::None,
            InteractionKind::Message => match interaction.message {
                Some(message) if !message.is_empty() => InteractionEffect::ShowMessage {
                    message,
                    position: interaction.message_position.unwrap_or_default(),
                },
                _ => InteractionEffect::None,
            },
            InteractionKind::Sound => match interaction.sound_url {
                Some(url) if !url.is_empty() => InteractionEffect::PlaySound { url },
                _ => InteractionEffect::None,
            },
            InteractionKind::Puzzle => {
                match ActivePuzzle::from_element(element) {
                    Some(puzzle) => InteractionEffect::OpenPuzzle {
                        element_id: id,
                        puzzle,
                    },
                    None => InteractionEffect::None,
                }
            }
            InteractionKind::CanvasNavigation => {
                match interaction.target_canvas_id.and_then(|c| {
                    self.canvas_index_of(c).map(|index| (c, index))
                }) {
                    Some((canvas_id, index)) => {
                        self.set_active_canvas(index);
                        InteractionEffect::NavigateToCanvas { canvas_id }
                    }
                    None => InteractionEffect::None,
                }
            }
            InteractionKind::AddToInventory => {
                if self.add_to_inventory(id) {
                    InteractionEffect::AddedToInventory { element_id: id }
                } else {
                    InteractionEffect::None
                }
            }
            InteractionKind::Combinable => InteractionEffect::AwaitCombination { element_id: id },
        }
    }

    /// Drops an inventory item onto a combinable target. On a valid pair
    /// the item is consumed, the target's interaction is cleared, and the
    /// configured result is dispatched like a fresh interaction.
    pub fn handle_item_combination(
        &mut self,
        item_id: ElementId,
        target_id: ElementId,
    ) -> InteractionEffect {
        if !self.can_combine(item_id, target_id) {
            debug!(item = %item_id, target = %target_id, "combination rejected");
            return InteractionEffect::None;
        }
        let Some(result) = self.consume_combination(item_id, target_id) else {
            return InteractionEffect::None;
        };

        match result {
            CombinationResult::Message {
                message,
                message_position,
            } => InteractionEffect::ShowMessage {
                message,
                position: message_position,
            },
            CombinationResult::Sound { sound_url } => InteractionEffect::PlaySound { url: sound_url },
            CombinationResult::CanvasNavigation { target_canvas_id } => {
                match self.canvas_index_of(target_canvas_id) {
                    Some(index) => {
                        self.set_active_canvas(index);
                        InteractionEffect::NavigateToCanvas {
                            canvas_id: target_canvas_id,
                        }
                    }
                    None => InteractionEffect::None,
                }
            }
            CombinationResult::Puzzle {
                puzzle_type,
                puzzle_config,
                sequence_puzzle_config,
                click_sequence_puzzle_config,
                slider_puzzle_config,
            } => {
                let puzzle = ActivePuzzle::from_configs(
                    puzzle_type,
                    puzzle_config.as_ref(),
                    sequence_puzzle_config.as_ref(),
                    click_sequence_puzzle_config.as_ref(),
                    slider_puzzle_config.as_ref(),
                );
                match puzzle {
                    Some(puzzle) => InteractionEffect::OpenPuzzle {
                        element_id: target_id,
                        puzzle,
                    },
                    None => InteractionEffect::None,
                }
            }
        }
    }
}
