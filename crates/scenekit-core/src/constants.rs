//! Workspace-wide constants.
//!
//! The canvas coordinate space is fixed: every stored position and size is
//! expressed in un-scaled canvas units against a 1600x900 surface. The view
//! scale (zoom) is purely a display concern and never leaks into the model.

/// Width of the canvas coordinate space in canvas units.
pub const CANVAS_WIDTH: f64 = 1600.0;

/// Height of the canvas coordinate space in canvas units.
pub const CANVAS_HEIGHT: f64 = 900.0;

/// Minimum element width/height a resize gesture may produce.
pub const MIN_ELEMENT_SIZE: f64 = 20.0;

/// Layer reserved for the background element of a canvas.
pub const BACKGROUND_LAYER: i64 = 0;

/// Lowest layer a non-background element may occupy.
pub const MIN_ELEMENT_LAYER: i64 = 1;

/// Offset applied to a duplicated element, in canvas units.
pub const DUPLICATE_OFFSET: f64 = 20.0;

/// Lower bound of the image scale-percentage slider.
pub const MIN_SCALE_PERCENT: f64 = 10.0;

/// Upper bound of the image scale-percentage slider.
pub const MAX_SCALE_PERCENT: f64 = 200.0;

/// Largest fraction of either canvas dimension a freshly placed image
/// may occupy. The aspect ratio is always preserved.
pub const IMAGE_PLACEMENT_FRACTION: f64 = 0.4;

/// Maximum number of undo steps retained by the history engine.
pub const HISTORY_DEPTH: usize = 50;

/// Minimum viewport zoom factor.
pub const MIN_ZOOM: f64 = 0.1;

/// Maximum viewport zoom factor.
pub const MAX_ZOOM: f64 = 8.0;

/// Per-frame rotation changes below this many degrees are ignored,
/// suppressing pointer jitter during a rotate gesture.
pub const ROTATION_DEAD_ZONE_DEG: f64 = 1.0;
