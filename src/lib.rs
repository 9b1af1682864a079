//! # SceneKit
//!
//! A visual scene editor engine. Users place, transform, and wire together
//! interactive elements (shapes, text, images, puzzles) across multiple named
//! canvases, then switch into a game mode where those elements respond to
//! click/drag interactions: messages, sounds, canvas navigation, inventory,
//! and combination puzzles.
//!
//! ## Architecture
//!
//! SceneKit is organized as a workspace with multiple crates:
//!
//! 1. **scenekit-core** - Shared errors, constants, and id types
//! 2. **scenekit-designer** - Scene store, element model, geometry, gestures,
//!    history, interaction dispatch, and puzzle sub-engines
//! 3. **scenekit** - Facade crate that re-exports the public API
//!
//! ## Features
//!
//! - **Element model**: shape, text, image, background, and puzzle variants
//!   with a free-form style map and per-element interaction configuration
//! - **Gestures**: drag, resize (eight handles), and rotate state machines
//!   that stay live during motion and commit one undo step on release
//! - **History**: snapshot-based undo/redo with gesture-granular commits
//! - **Game mode**: inventory, combinable items, and four puzzle engines
//! - **Persistence**: versioned JSON project files

pub use scenekit_core::{constants, CanvasId, ElementId, ProjectError, Result};

pub use scenekit_designer::{
    geometry, Canvas, ClickSequencePuzzle, CombinationResult, DragGesture, Element, ElementType,
    ElementUpdate, FileMetadata, Interaction, InteractionEffect, InteractionKind, MessagePosition,
    Point, ProjectFile, PuzzleKind, ResizeGesture, ResizeHandle, RotateGesture, SceneStore,
    SelectionPuzzle, SequencePuzzle, Size, SliderPuzzle, SnapshotHistory, StyleValue, Viewport,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(env_filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
