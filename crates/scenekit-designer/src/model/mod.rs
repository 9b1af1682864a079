//! Scene model: elements, canvases, interactions, and puzzle configs.
//!
//! This module defines the data types that describe what is on a canvas.
//! Everything here is plain serializable data; behavior lives in the scene
//! store, the gesture controllers, and the puzzle sub-engines.

use serde::{Deserialize, Serialize};

mod canvas;
mod element;
mod interaction;
mod puzzle;

pub use canvas::Canvas;
pub use element::{Element, ElementType, ElementUpdate, FileMetadata};
pub use interaction::{CombinationResult, Interaction, InteractionKind, MessagePosition};
pub use puzzle::{
    ClickSequencePuzzleConfig, PuzzleConfig, PuzzleKind, PuzzleSymbolSet, SequencePuzzleConfig,
    SliderOrientation, SliderPuzzleConfig,
};

/// A point in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A width/height pair in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A value in an element's open-ended style map.
///
/// Styles are deliberately loose: the editor stores whatever presentation
/// keys the surrounding UI wants (`fill`, `fontSize`, `transform`, ...) and
/// the engine only ever interprets the `transform` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
    Bool(bool),
}

impl StyleValue {
    /// The contained string, if this value is textual.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The contained number, if this value is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}
