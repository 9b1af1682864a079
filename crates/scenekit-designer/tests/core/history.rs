use scenekit_designer::{Canvas, SnapshotHistory};

fn scene(names: &[&str]) -> Vec<Canvas> {
    names.iter().map(|n| Canvas::new(*n)).collect()
}

#[test]
fn test_new_history_has_nothing_to_undo() {
    let history = SnapshotHistory::new(scene(&["Canvas 1"]), 50);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert_eq!(history.undo_depth(), 0);
    assert_eq!(history.redo_depth(), 0);
}

#[test]
fn test_commit_then_undo_restores_previous_snapshot() {
    let mut history = SnapshotHistory::new(scene(&["Canvas 1"]), 50);
    history.commit(scene(&["Canvas 1", "Canvas 2"]));
    assert!(history.can_undo());
    assert_eq!(history.undo_depth(), 1);

    let restored = history.undo().unwrap();
    assert_eq!(restored.len(), 1);
    assert_eq!(restored[0].name, "Canvas 1");
    assert!(!history.can_undo());
    assert!(history.can_redo());
}

#[test]
fn test_redo_after_undo() {
    let mut history = SnapshotHistory::new(scene(&["Canvas 1"]), 50);
    history.commit(scene(&["Canvas 1", "Canvas 2"]));
    history.undo().unwrap();

    let restored = history.redo().unwrap();
    assert_eq!(restored.len(), 2);
    assert!(history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn test_commit_truncates_redo_branch() {
    let mut history = SnapshotHistory::new(scene(&["a"]), 50);
    history.commit(scene(&["a", "b"]));
    history.commit(scene(&["a", "b", "c"]));
    history.undo().unwrap();
    history.undo().unwrap();
    assert!(history.can_redo());

    history.commit(scene(&["a", "x"]));
    assert!(!history.can_redo());
    let restored = history.undo().unwrap();
    assert_eq!(restored[0].name, "a");
    assert_eq!(restored.len(), 1);
}

#[test]
fn test_depth_limit_evicts_oldest() {
    let mut history = SnapshotHistory::new(scene(&["base"]), 3);
    for i in 0..10 {
        history.commit(vec![Canvas::new(format!("step {i}"))]);
    }
    assert_eq!(history.undo_depth(), 3);

    // Walking all the way back lands on the oldest retained snapshot,
    // not the original seed.
    let mut last = None;
    while history.can_undo() {
        last = history.undo();
    }
    assert_eq!(last.unwrap()[0].name, "step 6");
}

#[test]
fn test_undo_past_bottom_returns_none() {
    let mut history = SnapshotHistory::new(scene(&["only"]), 50);
    assert!(history.undo().is_none());
    assert!(history.redo().is_none());
}

#[test]
fn test_reset_clears_both_directions() {
    let mut history = SnapshotHistory::new(scene(&["a"]), 50);
    history.commit(scene(&["a", "b"]));
    history.undo().unwrap();
    history.reset(scene(&["fresh"]));
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn test_disabled_history_ignores_commits() {
    let mut history = SnapshotHistory::new(scene(&["a"]), 50);
    history.set_enabled(false);
    history.commit(scene(&["a", "b"]));
    assert!(!history.can_undo());

    history.set_enabled(true);
    history.commit(scene(&["a", "b"]));
    assert!(history.can_undo());
}
