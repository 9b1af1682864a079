use serde::{Deserialize, Serialize};

/// Which puzzle sub-engine a puzzle interaction opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PuzzleKind {
    /// Selection-set puzzle: order-independent set equality.
    Puzzle,
    /// Ordered-sequence puzzle: position-wise equality, reset on mismatch.
    SequencePuzzle,
    /// Click-sequence puzzle: ordered with re-click truncation.
    ClickSequencePuzzle,
    /// Multi-slider puzzle: every slider must match.
    SliderPuzzle,
}

/// Symbol set shown in a selection-set puzzle's placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PuzzleSymbolSet {
    #[default]
    Image,
    Number,
    Alphabet,
}

/// Config for the selection-set puzzle.
///
/// Solved when the set of user-selected indices equals the set of solution
/// indices, order irrelevant. An empty `solution` means any non-empty
/// selection solves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleConfig {
    #[serde(rename = "type", default)]
    pub symbol_set: PuzzleSymbolSet,
    /// Number of selectable slots.
    pub placeholders: usize,
    /// Content references shown in the slots (image symbol set).
    #[serde(default)]
    pub images: Vec<String>,
    /// Indices that must be selected.
    #[serde(default)]
    pub solution: Vec<usize>,
    /// Highest number shown (number symbol set).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_number: Option<u32>,
    /// Highest letter shown (alphabet symbol set).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_letter: Option<char>,
}

/// Config for the ordered-sequence puzzle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SequencePuzzleConfig {
    #[serde(default)]
    pub images: Vec<String>,
    /// Required click order.
    pub solution: Vec<usize>,
    /// Clicks so far, in order.
    #[serde(default)]
    pub current_order: Vec<usize>,
}

/// Config for the click-sequence puzzle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickSequencePuzzleConfig {
    #[serde(default)]
    pub images: Vec<String>,
    /// Required click order.
    pub solution: Vec<usize>,
    /// Clicks so far; re-clicking an entry truncates back to it.
    #[serde(default)]
    pub clicked_indices: Vec<usize>,
}

/// Slider layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SliderOrientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Config for the multi-slider puzzle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderPuzzleConfig {
    #[serde(default)]
    pub orientation: SliderOrientation,
    pub slider_count: usize,
    /// Required value per slider.
    pub solution: Vec<u32>,
    /// Current value per slider.
    #[serde(default)]
    pub current_values: Vec<u32>,
    /// Inclusive upper bound for every slider.
    pub max_value: u32,
}
