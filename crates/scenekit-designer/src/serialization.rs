//! Project file save/load.
//!
//! Projects persist as versioned JSON: the canvases array, the active
//! canvas index, and file metadata. Transient fields (live object URLs)
//! are skipped during serialization; elements keep `src`, `cache_key`,
//! and `file_metadata` so asset references can be reconstructed on load.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use scenekit_core::{ProjectError, Result};

use crate::model::Canvas;
use crate::store::SceneStore;

/// Project file format version.
const FILE_FORMAT_VERSION: u32 = 1;

/// Complete persisted project state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectFile {
    pub version: u32,
    pub metadata: ProjectMetadata,
    pub canvases: Vec<Canvas>,
    pub active_canvas_index: usize,
}

/// Project metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
}

impl ProjectFile {
    /// A new empty project with a single canvas.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION,
            metadata: ProjectMetadata {
                name: name.into(),
                created: now,
                modified: now,
                description: String::new(),
            },
            canvases: vec![Canvas::new("Canvas 1")],
            active_canvas_index: 0,
        }
    }

    /// Captures the current scene state into a persistable project.
    pub fn from_store(store: &SceneStore, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION,
            metadata: ProjectMetadata {
                name: name.into(),
                created: now,
                modified: now,
                description: String::new(),
            },
            canvases: store.canvases().to_vec(),
            active_canvas_index: store.active_canvas_index(),
        }
    }

    /// Saves the project as pretty-printed JSON, refreshing the modified
    /// timestamp.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.metadata.modified = Utc::now();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        info!(path = %path.as_ref().display(), canvases = self.canvases.len(), "project saved");
        Ok(())
    }

    /// Loads a project from disk, validating the format version and the
    /// structural invariants the store relies on.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut project: ProjectFile = serde_json::from_str(&content)?;
        if project.version != FILE_FORMAT_VERSION {
            return Err(ProjectError::UnsupportedVersion {
                found: project.version,
                expected: FILE_FORMAT_VERSION,
            });
        }
        project.validate()?;
        // A stale index is repairable; everything else is refused above.
        if project.active_canvas_index >= project.canvases.len() {
            project.active_canvas_index = project.canvases.len() - 1;
        }
        info!(path = %path.as_ref().display(), canvases = project.canvases.len(), "project loaded");
        Ok(project)
    }

    fn validate(&self) -> Result<()> {
        if self.canvases.is_empty() {
            return Err(ProjectError::Corrupt {
                reason: "project has no canvases".to_string(),
            });
        }
        for canvas in &self.canvases {
            let backgrounds = canvas.elements.iter().filter(|e| e.is_background()).count();
            if backgrounds > 1 {
                return Err(ProjectError::Corrupt {
                    reason: format!("canvas '{}' has {} background elements", canvas.name, backgrounds),
                });
            }
            if let Some(e) = canvas
                .elements
                .iter()
                .find(|e| !e.is_background() && e.layer == 0)
            {
                return Err(ProjectError::Corrupt {
                    reason: format!("element {} occupies reserved layer 0", e.id),
                });
            }
        }
        Ok(())
    }

    /// Installs the project's canvases into a store, reseeding history.
    pub fn into_store(self) -> SceneStore {
        let mut store = SceneStore::new();
        store.load(self.canvases, self.active_canvas_index);
        store
    }
}
