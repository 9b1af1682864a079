use crate::model::SliderPuzzleConfig;

use super::PuzzleEngine;

/// Slider puzzle: a row of sliders that must each land on a target value.
/// A failed check leaves the sliders interactive, nothing is reset.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderPuzzle {
    solution: Vec<u32>,
    initial_values: Vec<u32>,
    values: Vec<u32>,
    max_value: u32,
    solved: bool,
}

impl SliderPuzzle {
    pub fn new(config: &SliderPuzzleConfig) -> Self {
        let mut initial_values = config.current_values.clone();
        initial_values.resize(config.slider_count, 0);
        Self {
            solution: config.solution.clone(),
            values: initial_values.clone(),
            initial_values,
            max_value: config.max_value,
            solved: false,
        }
    }

    /// Sets a single slider, clamped to the configured maximum. Out of
    /// range indices and moves after solving are ignored.
    pub fn set_value(&mut self, index: usize, value: u32) {
        if self.solved || index >= self.values.len() {
            return;
        }
        self.values[index] = value.min(self.max_value);
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    /// Compares every slider against its target and latches the solved
    /// state on success.
    pub fn check(&mut self) -> bool {
        if self.solved {
            return true;
        }
        if self.values.len() == self.solution.len()
            && self.values.iter().zip(&self.solution).all(|(v, s)| v == s)
        {
            self.solved = true;
        }
        self.solved
    }
}

impl PuzzleEngine for SliderPuzzle {
    fn is_solved(&self) -> bool {
        self.solved
    }

    fn reset(&mut self) {
        self.values.clone_from(&self.initial_values);
        self.solved = false;
    }
}
