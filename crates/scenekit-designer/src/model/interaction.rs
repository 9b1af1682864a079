use serde::{Deserialize, Serialize};

use scenekit_core::{CanvasId, ElementId};

use super::puzzle::{
    ClickSequencePuzzleConfig, PuzzleConfig, PuzzleKind, SequencePuzzleConfig, SliderPuzzleConfig,
};

/// What happens when an element is activated in game mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InteractionKind {
    /// Inert.
    #[default]
    None,
    /// Display a message at the configured position.
    Message,
    /// Play the referenced audio once per activation.
    Sound,
    /// Open the matching puzzle sub-engine.
    Puzzle,
    /// Switch the active canvas.
    CanvasNavigation,
    /// Move the element into the inventory.
    AddToInventory,
    /// Accepts inventory items dropped onto it.
    Combinable,
}

/// Where a message interaction renders its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessagePosition {
    Top,
    #[default]
    Center,
    Bottom,
}

/// The effect a successful item combination produces.
///
/// Reuses the message/sound/navigation/puzzle effects; the puzzle case
/// embeds its own config so a combination can unlock a fresh puzzle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CombinationResult {
    Message {
        message: String,
        #[serde(default)]
        message_position: MessagePosition,
    },
    Sound {
        sound_url: String,
    },
    CanvasNavigation {
        target_canvas_id: CanvasId,
    },
    Puzzle {
        puzzle_type: PuzzleKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        puzzle_config: Option<PuzzleConfig>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        sequence_puzzle_config: Option<SequencePuzzleConfig>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        click_sequence_puzzle_config: Option<ClickSequencePuzzleConfig>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        slider_puzzle_config: Option<SliderPuzzleConfig>,
    },
}

/// Declarative interaction configuration on an element.
///
/// Only the fields relevant to `kind` are populated; the rest stay `None`
/// and are skipped during serialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_position: Option<MessagePosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_canvas_id: Option<CanvasId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub puzzle_type: Option<PuzzleKind>,
    /// Inventory-item ids accepted by a combinable element.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub can_combine_with: Vec<ElementId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combination_result: Option<CombinationResult>,
}

impl Interaction {
    /// An interaction of the given kind with no payload.
    pub fn of_kind(kind: InteractionKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    /// A message interaction.
    pub fn message(text: impl Into<String>, position: MessagePosition) -> Self {
        Self {
            kind: InteractionKind::Message,
            message: Some(text.into()),
            message_position: Some(position),
            ..Default::default()
        }
    }

    /// A canvas-navigation interaction.
    pub fn navigation(target: CanvasId) -> Self {
        Self {
            kind: InteractionKind::CanvasNavigation,
            target_canvas_id: Some(target),
            ..Default::default()
        }
    }
}
