//! # SceneKit Core
//!
//! Core types and utilities shared across the SceneKit workspace.
//! Provides the fundamental abstractions for ids, errors, and the
//! constants that define the fixed canvas coordinate space.

pub mod constants;
pub mod error;
pub mod types;

pub use error::{ProjectError, Result};
pub use types::{CanvasId, ElementId};
