use crate::model::ClickSequencePuzzleConfig;

use super::PuzzleEngine;

/// Click-sequence puzzle: ordered like [`super::SequencePuzzle`], but
/// re-clicking an already-clicked index truncates the sequence back to
/// (and excluding) that index's position. Users can undo trailing clicks
/// without a full reset, then submit with an explicit check.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickSequencePuzzle {
    solution: Vec<usize>,
    clicked: Vec<usize>,
    solved: bool,
}

impl ClickSequencePuzzle {
    pub fn new(config: &ClickSequencePuzzleConfig) -> Self {
        Self {
            solution: config.solution.clone(),
            clicked: config.clicked_indices.clone(),
            solved: false,
        }
    }

    /// Appends a click, or truncates back to a previous click of the same
    /// index.
    pub fn click(&mut self, index: usize) {
        if self.solved {
            return;
        }
        if let Some(pos) = self.clicked.iter().position(|&i| i == index) {
            self.clicked.truncate(pos);
        } else {
            self.clicked.push(index);
        }
    }

    /// Clicks so far, in order.
    pub fn clicked_indices(&self) -> &[usize] {
        &self.clicked
    }

    /// Compares the clicked order against the solution and latches the
    /// solved state on success. A failed check leaves the sequence intact.
    pub fn check(&mut self) -> bool {
        if self.solved {
            return true;
        }
        if self.clicked == self.solution {
            self.solved = true;
        }
        self.solved
    }
}

impl PuzzleEngine for ClickSequencePuzzle {
    fn is_solved(&self) -> bool {
        self.solved
    }

    fn reset(&mut self) {
        self.clicked.clear();
        self.solved = false;
    }
}
