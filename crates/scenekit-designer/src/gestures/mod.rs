//! Pointer gesture state machines.
//!
//! Each controller follows the same shape: `begin` captures the starting
//! state, `update` writes live (uncommitted) frames into the store, and
//! `finish` commits exactly once so a whole gesture is a single undo step.
//! A pure click, begin followed by finish with no motion, commits nothing.
//!
//! All positions passed in are canvas-space units, converted from client
//! pixels by [`crate::geometry::to_canvas_coordinates`] before they reach
//! a controller. Controllers re-read the element from the store on every
//! frame rather than caching it, so an element deleted mid-gesture simply
//! turns the remaining frames into no-ops.

mod drag;
mod resize;
mod rotate;

pub use drag::DragGesture;
pub use resize::{ResizeGesture, ResizeHandle};
pub use rotate::RotateGesture;
