//! Error handling for SceneKit
//!
//! The engine itself never throws across its public operation boundary:
//! referential misses resolve as no-ops and declined structural operations
//! return `false`. The error types here cover the one boundary where real
//! failures exist: loading and saving persisted project state.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Persistence-boundary error type.
///
/// Raised when a project file cannot be read, written, or understood.
#[derive(Error, Debug)]
pub enum ProjectError {
    /// The file's format version is newer than this build understands.
    #[error("Unsupported project file version: {found} (expected {expected})")]
    UnsupportedVersion {
        /// The version found in the file.
        found: u32,
        /// The version this build writes.
        expected: u32,
    },

    /// The file parsed as JSON but violated a structural invariant.
    #[error("Corrupt project file: {reason}")]
    Corrupt {
        /// A message describing the violation.
        reason: String,
    },

    /// The file could not be parsed as JSON at all.
    #[error("Failed to parse project file")]
    Parse(#[from] serde_json::Error),

    /// An underlying filesystem error.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

/// Result type alias using [`ProjectError`].
pub type Result<T> = std::result::Result<T, ProjectError>;
