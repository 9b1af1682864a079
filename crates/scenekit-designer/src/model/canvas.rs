use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use scenekit_core::{CanvasId, ElementId};

use super::element::Element;

/// A named, ordered collection of elements; the unit of navigation in
/// game mode. Elements live permanently on one canvas unless explicitly
/// moved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Canvas {
    pub id: CanvasId,
    pub name: String,
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Canvas {
    /// Creates an empty canvas with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            elements: Vec::new(),
        }
    }

    /// Returns a reference to an element by id.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Returns a mutable reference to an element by id.
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// Removes an element by id, returning it if it was present.
    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        let idx = self.elements.iter().position(|e| e.id == id)?;
        Some(self.elements.remove(idx))
    }

    /// The background element, if this canvas has one.
    pub fn background(&self) -> Option<&Element> {
        self.elements.iter().find(|e| e.is_background())
    }

    /// Mutable access to the background element.
    pub fn background_mut(&mut self) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.is_background())
    }

    /// The highest layer currently in use by any element.
    pub fn highest_layer(&self) -> i64 {
        self.elements.iter().map(|e| e.layer).max().unwrap_or(0)
    }

    /// Elements in draw order: the background first (unconditionally),
    /// then everything else sorted by `(layer, id)`.
    pub fn draw_order(&self) -> Vec<&Element> {
        let mut sorted: Vec<&Element> = self.elements.iter().filter(|e| !e.is_background()).collect();
        sorted.sort_by(|a, b| a.layer.cmp(&b.layer).then_with(|| a.id.cmp(&b.id)));
        let mut out = Vec::with_capacity(self.elements.len());
        if let Some(bg) = self.background() {
            out.push(bg);
        }
        out.extend(sorted);
        out
    }

    /// Deep copy of this canvas under a fresh id.
    ///
    /// Every element receives a new id; `canCombineWith` references between
    /// elements of this canvas are remapped so the copies point at each
    /// other rather than back at the originals.
    pub fn duplicate(&self, name: impl Into<String>) -> Self {
        let mut id_map: HashMap<ElementId, ElementId> = HashMap::new();
        let mut elements: Vec<Element> = self
            .elements
            .iter()
            .map(|e| {
                let mut copy = e.clone();
                copy.id = Uuid::new_v4();
                id_map.insert(e.id, copy.id);
                copy
            })
            .collect();
        for element in &mut elements {
            if let Some(interaction) = &mut element.interaction {
                for target in &mut interaction.can_combine_with {
                    if let Some(mapped) = id_map.get(target) {
                        *target = *mapped;
                    }
                }
            }
        }
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            elements,
        }
    }
}
