use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use scenekit_core::constants::{
    BACKGROUND_LAYER, CANVAS_HEIGHT, CANVAS_WIDTH, MIN_ELEMENT_LAYER,
};
use scenekit_core::ElementId;

use super::interaction::Interaction;
use super::puzzle::{
    ClickSequencePuzzleConfig, PuzzleConfig, SequencePuzzleConfig, SliderPuzzleConfig,
};
use super::{Point, Size, StyleValue};

/// The kind of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementType {
    Rectangle,
    Circle,
    Triangle,
    Line,
    Heading,
    Subheading,
    Paragraph,
    Image,
    Background,
    Puzzle,
    SequencePuzzle,
    ClickSequencePuzzle,
    SliderPuzzle,
}

impl ElementType {
    /// Whether this type is one of the text variants.
    pub fn is_text(self) -> bool {
        matches!(self, Self::Heading | Self::Subheading | Self::Paragraph)
    }

    /// Whether this type is one of the four puzzle variants.
    pub fn is_puzzle(self) -> bool {
        matches!(
            self,
            Self::Puzzle | Self::SequencePuzzle | Self::ClickSequencePuzzle | Self::SliderPuzzle
        )
    }
}

/// Metadata describing the original file behind an image element.
///
/// Kept alongside the content reference so a persisted project can
/// reconstruct a usable asset handle without the original bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    pub name: String,
    pub mime_type: String,
    #[serde(default)]
    pub size_bytes: u64,
}

/// A single placeable, transformable object on a canvas.
///
/// Elements are plain data. Rotation is encoded inside the `transform`
/// entry of the style map as `rotate(<deg>deg)` and is derived by parsing,
/// never stored as a separate persisted field; gesture code read-modify-
/// writes that string, preserving any other transform functions present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Unique identifier, assigned at creation, immutable.
    pub id: ElementId,
    /// Element variant.
    #[serde(rename = "type")]
    pub element_type: ElementType,
    /// Top-left anchor in canvas units.
    pub position: Point,
    /// Explicit box, absent for intrinsically-sized text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    /// Natural un-scaled size of an image. Set once, never mutated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_size: Option<Size>,
    /// Integer z-order; 0 is reserved for the background element.
    pub layer: i64,
    /// Open-ended presentation map, including the `transform` entry.
    #[serde(default)]
    pub style: BTreeMap<String, StyleValue>,
    /// Text payload for text variants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Game-mode interaction configuration. Absent means inert.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interaction: Option<Interaction>,
    /// Selection-set puzzle config (type == Puzzle).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub puzzle_config: Option<PuzzleConfig>,
    /// Ordered-sequence puzzle config (type == SequencePuzzle).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_puzzle_config: Option<SequencePuzzleConfig>,
    /// Click-sequence puzzle config (type == ClickSequencePuzzle).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub click_sequence_puzzle_config: Option<ClickSequencePuzzleConfig>,
    /// Multi-slider puzzle config (type == SliderPuzzle).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slider_puzzle_config: Option<SliderPuzzleConfig>,
    /// Persistent content reference resolved by the asset pipeline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Key into the external content-addressed asset cache.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_key: Option<String>,
    /// Original-file metadata for reconstructing an asset handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_metadata: Option<FileMetadata>,
    /// Live object URL for the decoded asset. Transient, never persisted.
    #[serde(skip)]
    pub object_url: Option<String>,
    /// Hidden in game mode.
    #[serde(default)]
    pub is_hidden: bool,
    /// Currently held in the game-mode inventory.
    #[serde(default)]
    pub in_inventory: bool,
}

impl Element {
    /// Creates an element of the given type with its documented defaults,
    /// centered on the canvas. The caller assigns the layer.
    pub fn new(element_type: ElementType) -> Self {
        let size = default_size(element_type);
        let position = match size {
            Some(s) => Point::new(
                (CANVAS_WIDTH - s.width) / 2.0,
                (CANVAS_HEIGHT - s.height) / 2.0,
            ),
            None => Point::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0),
        };
        Self {
            id: Uuid::new_v4(),
            element_type,
            position,
            size,
            original_size: None,
            layer: if element_type == ElementType::Background {
                BACKGROUND_LAYER
            } else {
                MIN_ELEMENT_LAYER
            },
            style: default_style(element_type),
            content: default_content(element_type),
            interaction: None,
            puzzle_config: None,
            sequence_puzzle_config: None,
            click_sequence_puzzle_config: None,
            slider_puzzle_config: None,
            src: None,
            cache_key: None,
            file_metadata: None,
            object_url: None,
            is_hidden: false,
            in_inventory: false,
        }
    }

    /// Whether this element is the canvas background.
    pub fn is_background(&self) -> bool {
        self.element_type == ElementType::Background
    }

    /// The `transform` style entry, if present.
    pub fn transform(&self) -> Option<&str> {
        self.style.get("transform").and_then(StyleValue::as_str)
    }

    /// Axis-aligned bounding box as `(x1, y1, x2, y2)` in canvas units.
    ///
    /// Sizeless elements degenerate to a zero-area box at their anchor.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let (w, h) = match self.size {
            Some(s) => (s.width, s.height),
            None => (0.0, 0.0),
        };
        (
            self.position.x,
            self.position.y,
            self.position.x + w,
            self.position.y + h,
        )
    }

    /// Center of the bounding box in canvas units.
    pub fn center(&self) -> Point {
        let (x1, y1, x2, y2) = self.bounds();
        Point::new((x1 + x2) / 2.0, (y1 + y2) / 2.0)
    }

    /// Applies a sparse update. Only present fields are merged; the style
    /// map is merged entry-wise. `original_size` is set at most once.
    pub fn apply_update(&mut self, update: &ElementUpdate) {
        if let Some(p) = update.position {
            self.position = p;
        }
        if let Some(s) = update.size {
            self.size = Some(s);
        }
        if let Some(os) = update.original_size {
            if self.original_size.is_none() {
                self.original_size = Some(os);
            }
        }
        if let Some(layer) = update.layer {
            self.layer = layer;
        }
        if let Some(ref style) = update.style {
            for (k, v) in style {
                self.style.insert(k.clone(), v.clone());
            }
        }
        if let Some(ref content) = update.content {
            self.content = Some(content.clone());
        }
        if let Some(ref interaction) = update.interaction {
            self.interaction = Some(interaction.clone());
        }
        if let Some(ref cfg) = update.puzzle_config {
            self.puzzle_config = Some(cfg.clone());
        }
        if let Some(ref cfg) = update.sequence_puzzle_config {
            self.sequence_puzzle_config = Some(cfg.clone());
        }
        if let Some(ref cfg) = update.click_sequence_puzzle_config {
            self.click_sequence_puzzle_config = Some(cfg.clone());
        }
        if let Some(ref cfg) = update.slider_puzzle_config {
            self.slider_puzzle_config = Some(cfg.clone());
        }
        if let Some(ref src) = update.src {
            self.src = Some(src.clone());
        }
        if let Some(ref key) = update.cache_key {
            self.cache_key = Some(key.clone());
        }
        if let Some(ref meta) = update.file_metadata {
            self.file_metadata = Some(meta.clone());
        }
        if let Some(ref url) = update.object_url {
            self.object_url = Some(url.clone());
        }
        if let Some(hidden) = update.is_hidden {
            self.is_hidden = hidden;
        }
        if let Some(inv) = update.in_inventory {
            self.in_inventory = inv;
        }
    }
}

/// Sparse update for an element. Only present fields are applied.
#[derive(Debug, Clone, Default)]
pub struct ElementUpdate {
    pub position: Option<Point>,
    pub size: Option<Size>,
    pub original_size: Option<Size>,
    pub layer: Option<i64>,
    pub style: Option<BTreeMap<String, StyleValue>>,
    pub content: Option<String>,
    pub interaction: Option<Interaction>,
    pub puzzle_config: Option<PuzzleConfig>,
    pub sequence_puzzle_config: Option<SequencePuzzleConfig>,
    pub click_sequence_puzzle_config: Option<ClickSequencePuzzleConfig>,
    pub slider_puzzle_config: Option<SliderPuzzleConfig>,
    pub src: Option<String>,
    pub cache_key: Option<String>,
    pub file_metadata: Option<FileMetadata>,
    pub object_url: Option<String>,
    pub is_hidden: Option<bool>,
    pub in_inventory: Option<bool>,
}

impl ElementUpdate {
    /// Convenience update carrying only a position.
    pub fn position(p: Point) -> Self {
        Self {
            position: Some(p),
            ..Default::default()
        }
    }

    /// Convenience update carrying only a size.
    pub fn size(s: Size) -> Self {
        Self {
            size: Some(s),
            ..Default::default()
        }
    }

    /// Convenience update carrying a single style entry.
    pub fn style_entry(key: &str, value: StyleValue) -> Self {
        let mut style = BTreeMap::new();
        style.insert(key.to_string(), value);
        Self {
            style: Some(style),
            ..Default::default()
        }
    }
}

fn default_size(element_type: ElementType) -> Option<Size> {
    match element_type {
        ElementType::Rectangle => Some(Size::new(100.0, 80.0)),
        ElementType::Circle => Some(Size::new(100.0, 100.0)),
        ElementType::Triangle => Some(Size::new(50.0, 100.0)),
        ElementType::Line => Some(Size::new(150.0, 4.0)),
        // Text is intrinsically sized until the user gives it a box.
        ElementType::Heading | ElementType::Subheading | ElementType::Paragraph => None,
        // Images get their size from the asset pipeline on load.
        ElementType::Image => None,
        // The background fills the canvas; it has no size in the editing sense.
        ElementType::Background => None,
        ElementType::Puzzle
        | ElementType::SequencePuzzle
        | ElementType::ClickSequencePuzzle
        | ElementType::SliderPuzzle => Some(Size::new(200.0, 200.0)),
    }
}

fn default_style(element_type: ElementType) -> BTreeMap<String, StyleValue> {
    let mut style = BTreeMap::new();
    match element_type {
        ElementType::Rectangle | ElementType::Circle | ElementType::Triangle => {
            style.insert("fill".to_string(), StyleValue::from("#4f46e5"));
        }
        ElementType::Line => {
            style.insert("fill".to_string(), StyleValue::from("#1f2937"));
        }
        ElementType::Heading => {
            style.insert("fontSize".to_string(), StyleValue::from(32.0));
        }
        ElementType::Subheading => {
            style.insert("fontSize".to_string(), StyleValue::from(24.0));
        }
        ElementType::Paragraph => {
            style.insert("fontSize".to_string(), StyleValue::from(16.0));
        }
        ElementType::Background => {
            style.insert("backgroundColor".to_string(), StyleValue::from("#ffffff"));
        }
        _ => {}
    }
    style
}

fn default_content(element_type: ElementType) -> Option<String> {
    match element_type {
        ElementType::Heading => Some("Heading".to_string()),
        ElementType::Subheading => Some("Subheading".to_string()),
        ElementType::Paragraph => Some("Paragraph text".to_string()),
        _ => None,
    }
}
