//! Id aliases used throughout the workspace.
//!
//! Elements and canvases are addressed by opaque ids assigned at creation
//! time. Ids are never reused and never change for the lifetime of the
//! object, which is what makes tolerant-lookup semantics safe: a stale id
//! can only ever miss, never alias a different object.

use uuid::Uuid;

/// Unique identifier for an element.
pub type ElementId = Uuid;

/// Unique identifier for a canvas.
pub type CanvasId = Uuid;
