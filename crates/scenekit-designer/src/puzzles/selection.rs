use smallvec::SmallVec;

use crate::model::PuzzleConfig;

use super::PuzzleEngine;

/// Selection-set puzzle: toggle slot membership until the selected set
/// equals the solution set. Order is irrelevant. An empty solution means
/// any non-empty selection solves it.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionPuzzle {
    placeholders: usize,
    solution: Vec<usize>,
    selected: SmallVec<[usize; 8]>,
    solved: bool,
}

impl SelectionPuzzle {
    pub fn new(config: &PuzzleConfig) -> Self {
        Self {
            placeholders: config.placeholders,
            solution: config.solution.clone(),
            selected: SmallVec::new(),
            solved: false,
        }
    }

    /// Toggles membership of a slot index. Out-of-range indices and input
    /// after solving are ignored.
    pub fn toggle(&mut self, index: usize) {
        if self.solved || index >= self.placeholders {
            return;
        }
        if let Some(pos) = self.selected.iter().position(|&i| i == index) {
            self.selected.remove(pos);
        } else {
            self.selected.push(index);
        }
    }

    /// Currently selected indices, in toggle order.
    pub fn selected(&self) -> &[usize] {
        &self.selected
    }

    /// Compares the selected set against the solution set and latches the
    /// solved state on success. A failed check changes nothing; a retry is
    /// expected gameplay, not an error.
    pub fn check(&mut self) -> bool {
        if self.solved {
            return true;
        }
        self.solved = if self.solution.is_empty() {
            !self.selected.is_empty()
        } else {
            let mut a: Vec<usize> = self.selected.to_vec();
            let mut b = self.solution.clone();
            a.sort_unstable();
            a.dedup();
            b.sort_unstable();
            b.dedup();
            a == b
        };
        self.solved
    }
}

impl PuzzleEngine for SelectionPuzzle {
    fn is_solved(&self) -> bool {
        self.solved
    }

    fn reset(&mut self) {
        self.selected.clear();
        self.solved = false;
    }
}
