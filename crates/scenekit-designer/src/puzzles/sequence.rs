use crate::model::SequencePuzzleConfig;

use super::PuzzleEngine;

/// Ordered-sequence puzzle: clicks append to the current order and must
/// reproduce the solution position-for-position. A full-length mismatch
/// resets the sequence to empty; the retry starts over, there is no
/// partial correction.
#[derive(Debug, Clone, PartialEq)]
pub struct SequencePuzzle {
    solution: Vec<usize>,
    current: Vec<usize>,
    solved: bool,
}

impl SequencePuzzle {
    pub fn new(config: &SequencePuzzleConfig) -> Self {
        Self {
            solution: config.solution.clone(),
            current: config.current_order.clone(),
            solved: false,
        }
    }

    /// Appends a click. Already-clicked indices are inert (not toggles).
    /// Once the sequence reaches solution length it either solves or
    /// resets to empty.
    pub fn click(&mut self, index: usize) {
        if self.solved || self.current.contains(&index) {
            return;
        }
        self.current.push(index);
        if self.current.len() == self.solution.len() {
            if self.current == self.solution {
                self.solved = true;
            } else {
                self.current.clear();
            }
        }
    }

    /// Clicks so far, in order.
    pub fn current_order(&self) -> &[usize] {
        &self.current
    }
}

impl PuzzleEngine for SequencePuzzle {
    fn is_solved(&self) -> bool {
        self.solved
    }

    fn reset(&mut self) {
        self.current.clear();
        self.solved = false;
    }
}
