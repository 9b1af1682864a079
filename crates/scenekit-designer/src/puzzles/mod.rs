//! Puzzle sub-engines.
//!
//! Four independent solvable state machines sharing one contract: seeded
//! from a config, fed user input events, and queried for solved-ness.
//! Every engine is terminal once solved; further input is ignored until
//! an explicit reset returns it to its initial state.
//!
//! The mismatch behavior deliberately differs per engine: the ordered-
//! sequence puzzle resets to empty on a wrong sequence while the slider
//! puzzle stays interactive after a failed check. The asymmetry is part of
//! the contract, not an inconsistency to unify.

mod click_sequence;
mod selection;
mod sequence;
mod slider;

pub use click_sequence::ClickSequencePuzzle;
pub use selection::SelectionPuzzle;
pub use sequence::SequencePuzzle;
pub use slider::SliderPuzzle;

use crate::model::{
    ClickSequencePuzzleConfig, Element, PuzzleConfig, PuzzleKind, SequencePuzzleConfig,
    SliderPuzzleConfig,
};

/// Common contract implemented by all four sub-engines.
pub trait PuzzleEngine {
    /// Whether the puzzle has reached its terminal solved state.
    fn is_solved(&self) -> bool;

    /// Returns the engine to its initial state.
    fn reset(&mut self);
}

/// A running puzzle session of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ActivePuzzle {
    Selection(SelectionPuzzle),
    Sequence(SequencePuzzle),
    ClickSequence(ClickSequencePuzzle),
    Slider(SliderPuzzle),
}

impl ActivePuzzle {
    /// Seeds a session from an element's variant config. Returns `None`
    /// when the element does not carry a matching config.
    pub fn from_element(element: &Element) -> Option<Self> {
        let kind = element
            .interaction
            .as_ref()
            .and_then(|i| i.puzzle_type)
            .or(match element.element_type {
                crate::model::ElementType::Puzzle => Some(PuzzleKind::Puzzle),
                crate::model::ElementType::SequencePuzzle => Some(PuzzleKind::SequencePuzzle),
                crate::model::ElementType::ClickSequencePuzzle => {
                    Some(PuzzleKind::ClickSequencePuzzle)
                }
                crate::model::ElementType::SliderPuzzle => Some(PuzzleKind::SliderPuzzle),
                _ => None,
            })?;
        Self::from_configs(
            kind,
            element.puzzle_config.as_ref(),
            element.sequence_puzzle_config.as_ref(),
            element.click_sequence_puzzle_config.as_ref(),
            element.slider_puzzle_config.as_ref(),
        )
    }

    /// Seeds a session of `kind` from whichever config is populated.
    pub fn from_configs(
        kind: PuzzleKind,
        puzzle: Option<&PuzzleConfig>,
        sequence: Option<&SequencePuzzleConfig>,
        click_sequence: Option<&ClickSequencePuzzleConfig>,
        slider: Option<&SliderPuzzleConfig>,
    ) -> Option<Self> {
        match kind {
            PuzzleKind::Puzzle => puzzle.map(|c| Self::Selection(SelectionPuzzle::new(c))),
            PuzzleKind::SequencePuzzle => {
                sequence.map(|c| Self::Sequence(SequencePuzzle::new(c)))
            }
            PuzzleKind::ClickSequencePuzzle => {
                click_sequence.map(|c| Self::ClickSequence(ClickSequencePuzzle::new(c)))
            }
            PuzzleKind::SliderPuzzle => slider.map(|c| Self::Slider(SliderPuzzle::new(c))),
        }
    }

    pub fn kind(&self) -> PuzzleKind {
        match self {
            Self::Selection(_) => PuzzleKind::Puzzle,
            Self::Sequence(_) => PuzzleKind::SequencePuzzle,
            Self::ClickSequence(_) => PuzzleKind::ClickSequencePuzzle,
            Self::Slider(_) => PuzzleKind::SliderPuzzle,
        }
    }

    pub fn is_solved(&self) -> bool {
        match self {
            Self::Selection(p) => p.is_solved(),
            Self::Sequence(p) => p.is_solved(),
            Self::ClickSequence(p) => p.is_solved(),
            Self::Slider(p) => p.is_solved(),
        }
    }

    pub fn reset(&mut self) {
        match self {
            Self::Selection(p) => p.reset(),
            Self::Sequence(p) => p.reset(),
            Self::ClickSequence(p) => p.reset(),
            Self::Slider(p) => p.reset(),
        }
    }
}
