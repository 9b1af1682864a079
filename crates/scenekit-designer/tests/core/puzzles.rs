use scenekit_designer::{
    ActivePuzzle, ClickSequencePuzzle, ClickSequencePuzzleConfig, Element, ElementType,
    Interaction, InteractionKind, PuzzleConfig, PuzzleEngine, PuzzleKind, PuzzleSymbolSet,
    SelectionPuzzle, SequencePuzzle, SequencePuzzleConfig, SliderOrientation, SliderPuzzle,
    SliderPuzzleConfig,
};

fn selection_config(placeholders: usize, solution: &[usize]) -> PuzzleConfig {
    PuzzleConfig {
        symbol_set: PuzzleSymbolSet::Image,
        placeholders,
        images: Vec::new(),
        solution: solution.to_vec(),
        max_number: None,
        max_letter: None,
    }
}

fn sequence_config(solution: &[usize]) -> SequencePuzzleConfig {
    SequencePuzzleConfig {
        images: Vec::new(),
        solution: solution.to_vec(),
        current_order: Vec::new(),
    }
}

fn click_sequence_config(solution: &[usize]) -> ClickSequencePuzzleConfig {
    ClickSequencePuzzleConfig {
        images: Vec::new(),
        solution: solution.to_vec(),
        clicked_indices: Vec::new(),
    }
}

fn slider_config(count: usize, solution: &[u32], max: u32) -> SliderPuzzleConfig {
    SliderPuzzleConfig {
        orientation: SliderOrientation::Horizontal,
        slider_count: count,
        solution: solution.to_vec(),
        current_values: Vec::new(),
        max_value: max,
    }
}

#[test]
fn test_selection_puzzle_set_equality_ignores_order() {
    let mut puzzle = SelectionPuzzle::new(&selection_config(4, &[0, 2]));
    puzzle.toggle(2);
    puzzle.toggle(0);
    assert!(puzzle.check());
    assert!(puzzle.is_solved());
}

#[test]
fn test_selection_puzzle_wrong_set_fails() {
    let mut puzzle = SelectionPuzzle::new(&selection_config(4, &[0, 2]));
    puzzle.toggle(0);
    puzzle.toggle(1);
    assert!(!puzzle.check());
    assert!(!puzzle.is_solved());
}

#[test]
fn test_selection_puzzle_toggle_removes_again() {
    let mut puzzle = SelectionPuzzle::new(&selection_config(4, &[1]));
    puzzle.toggle(1);
    puzzle.toggle(3);
    puzzle.toggle(3);
    assert_eq!(puzzle.selected(), &[1]);
    assert!(puzzle.check());
}

#[test]
fn test_selection_puzzle_empty_solution_accepts_any_selection() {
    let mut puzzle = SelectionPuzzle::new(&selection_config(4, &[]));
    assert!(!puzzle.check());
    puzzle.toggle(3);
    assert!(puzzle.check());
}

#[test]
fn test_selection_puzzle_ignores_out_of_range_and_post_solve_input() {
    let mut puzzle = SelectionPuzzle::new(&selection_config(3, &[0]));
    puzzle.toggle(7);
    assert!(puzzle.selected().is_empty());

    puzzle.toggle(0);
    assert!(puzzle.check());
    puzzle.toggle(1);
    assert_eq!(puzzle.selected(), &[0]);
    assert!(puzzle.is_solved());
}

#[test]
fn test_sequence_puzzle_correct_order_solves() {
    let mut puzzle = SequencePuzzle::new(&sequence_config(&[1, 0, 2]));
    puzzle.click(1);
    puzzle.click(0);
    puzzle.click(2);
    assert!(puzzle.is_solved());
}

#[test]
fn test_sequence_puzzle_wrong_order_resets_to_empty() {
    let mut puzzle = SequencePuzzle::new(&sequence_config(&[1, 0, 2]));
    puzzle.click(0);
    puzzle.click(1);
    puzzle.click(2);
    assert!(!puzzle.is_solved());
    assert!(puzzle.current_order().is_empty());
}

#[test]
fn test_sequence_puzzle_repeated_click_is_inert() {
    let mut puzzle = SequencePuzzle::new(&sequence_config(&[1, 0, 2]));
    puzzle.click(1);
    puzzle.click(1);
    assert_eq!(puzzle.current_order(), &[1]);
}

#[test]
fn test_click_sequence_reclick_truncates() {
    // solution=[0,1]: click 0, click 1, re-click 1 (back to [0]), click 1.
    let mut puzzle = ClickSequencePuzzle::new(&click_sequence_config(&[0, 1]));
    puzzle.click(0);
    puzzle.click(1);
    puzzle.click(1);
    assert_eq!(puzzle.clicked_indices(), &[0]);
    puzzle.click(1);
    assert_eq!(puzzle.clicked_indices(), &[0, 1]);
    assert!(puzzle.check());
}

#[test]
fn test_click_sequence_reclick_of_first_clears_all() {
    let mut puzzle = ClickSequencePuzzle::new(&click_sequence_config(&[0, 1, 2]));
    puzzle.click(0);
    puzzle.click(1);
    puzzle.click(0);
    assert!(puzzle.clicked_indices().is_empty());
}

#[test]
fn test_click_sequence_failed_check_keeps_sequence() {
    let mut puzzle = ClickSequencePuzzle::new(&click_sequence_config(&[0, 1]));
    puzzle.click(1);
    assert!(!puzzle.check());
    assert_eq!(puzzle.clicked_indices(), &[1]);
}

#[test]
fn test_slider_puzzle_exact_match_solves() {
    let mut puzzle = SliderPuzzle::new(&slider_config(2, &[5, 7], 10));
    puzzle.set_value(0, 5);
    puzzle.set_value(1, 7);
    assert!(puzzle.check());
    assert!(puzzle.is_solved());
}

#[test]
fn test_slider_puzzle_failed_check_stays_interactive() {
    let mut puzzle = SliderPuzzle::new(&slider_config(2, &[5, 7], 10));
    puzzle.set_value(0, 5);
    puzzle.set_value(1, 6);
    assert!(!puzzle.check());
    // Values survive the failed check and remain adjustable.
    assert_eq!(puzzle.values(), &[5, 6]);
    puzzle.set_value(1, 7);
    assert!(puzzle.check());
}

#[test]
fn test_slider_puzzle_clamps_to_max_value() {
    let mut puzzle = SliderPuzzle::new(&slider_config(1, &[10], 10));
    puzzle.set_value(0, 99);
    assert_eq!(puzzle.values(), &[10]);
    assert!(puzzle.check());
}

#[test]
fn test_slider_puzzle_reset_restores_seeded_values() {
    let mut config = slider_config(3, &[4, 4, 4], 8);
    config.current_values = vec![2, 6];
    let mut puzzle = SliderPuzzle::new(&config);
    // Seed is padded with zeros up to the slider count.
    assert_eq!(puzzle.values(), &[2, 6, 0]);

    puzzle.set_value(0, 4);
    puzzle.set_value(2, 7);
    assert!(!puzzle.check());

    puzzle.reset();
    assert_eq!(puzzle.values(), &[2, 6, 0]);
    assert!(!puzzle.is_solved());
}

#[test]
fn test_engines_are_terminal_once_solved_until_reset() {
    let mut puzzle = SequencePuzzle::new(&sequence_config(&[0]));
    puzzle.click(0);
    assert!(puzzle.is_solved());
    puzzle.click(0);
    assert!(puzzle.is_solved());

    puzzle.reset();
    assert!(!puzzle.is_solved());
    assert!(puzzle.current_order().is_empty());
}

#[test]
fn test_active_puzzle_from_element_uses_matching_config() {
    let mut element = Element::new(ElementType::SliderPuzzle);
    element.slider_puzzle_config = Some(slider_config(2, &[1, 2], 5));
    let puzzle = ActivePuzzle::from_element(&element).unwrap();
    assert_eq!(puzzle.kind(), PuzzleKind::SliderPuzzle);
}

#[test]
fn test_active_puzzle_prefers_interaction_puzzle_type() {
    let mut element = Element::new(ElementType::Rectangle);
    let mut interaction = Interaction::of_kind(InteractionKind::Puzzle);
    interaction.puzzle_type = Some(PuzzleKind::SequencePuzzle);
    element.interaction = Some(interaction);
    element.sequence_puzzle_config = Some(sequence_config(&[0, 1]));

    let puzzle = ActivePuzzle::from_element(&element).unwrap();
    assert_eq!(puzzle.kind(), PuzzleKind::SequencePuzzle);
}

#[test]
fn test_active_puzzle_without_config_is_none() {
    let element = Element::new(ElementType::Puzzle);
    assert!(ActivePuzzle::from_element(&element).is_none());
}
