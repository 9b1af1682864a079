//! # SceneKit Designer
//!
//! This crate provides the element geometry and interaction engine for the
//! SceneKit scene editor: the in-memory scene graph of elements and
//! canvases, transform math, the undo/redo history, and the game-mode
//! interaction machinery.
//!
//! ## Core Components
//!
//! ### Scene Model
//! - **Elements**: Shapes, text, images, the background, and puzzle variants
//! - **Canvases**: Named ordered element collections, the unit of navigation
//! - **Styles**: An open string/number map; rotation lives in the
//!   `transform` entry as a `rotate(<deg>deg)` token
//!
//! ### Editing
//! - **Scene Store**: Owns canvases, selection, layers, and every mutation
//! - **History**: Snapshot undo/redo with a live-update vs. commit split,
//!   so one pointer gesture is one undoable step
//! - **Gestures**: Drag, eight-handle resize, and incremental rotate
//! - **Viewport**: Display-only zoom/pan over the fixed 1600x900 canvas
//!
//! ### Game Mode
//! - **Interactions**: Per-element message/sound/navigation/inventory/
//!   puzzle/combinable configuration and the activation dispatcher
//! - **Puzzles**: Four solvable state machines (selection set, ordered
//!   sequence, click sequence, sliders)
//!
//! ## Architecture
//!
//! ```text
//! SceneStore (canvases, selection, layers)
//!   ├── SnapshotHistory (undo/redo)
//!   ├── Gestures (drag / resize / rotate, live updates + commit)
//!   └── Interaction dispatch
//!         └── Puzzle sub-engines
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use scenekit_designer::{ElementType, SceneStore};
//!
//! let mut store = SceneStore::new();
//! let rect = store.add_element(ElementType::Rectangle);
//! store.undo();
//! assert!(store.active_canvas().elements.is_empty());
//! ```

pub mod geometry;
pub mod gestures;
pub mod history;
pub mod interaction;
pub mod model;
pub mod puzzles;
pub mod serialization;
pub mod store;
pub mod viewport;

pub use gestures::{DragGesture, ResizeGesture, ResizeHandle, RotateGesture};
pub use history::SnapshotHistory;
pub use interaction::InteractionEffect;
pub use model::{
    Canvas, ClickSequencePuzzleConfig, CombinationResult, Element, ElementType, ElementUpdate,
    FileMetadata, Interaction, InteractionKind, MessagePosition, Point, PuzzleConfig, PuzzleKind,
    PuzzleSymbolSet, SequencePuzzleConfig, Size, SliderOrientation, SliderPuzzleConfig, StyleValue,
};
pub use puzzles::{
    ActivePuzzle, ClickSequencePuzzle, PuzzleEngine, SelectionPuzzle, SequencePuzzle, SliderPuzzle,
};
pub use serialization::{ProjectFile, ProjectMetadata};
pub use store::SceneStore;
pub use viewport::Viewport;
