use scenekit_designer::{
    ElementType, ElementUpdate, Point, SceneStore, Size, StyleValue,
};

#[test]
fn test_new_store_has_one_empty_canvas() {
    let store = SceneStore::new();
    assert_eq!(store.canvases().len(), 1);
    assert_eq!(store.active_canvas().name, "Canvas 1");
    assert!(store.active_canvas().elements.is_empty());
    assert!(!store.can_undo());
}

#[test]
fn test_add_element_applies_type_defaults() {
    let mut store = SceneStore::new();
    let rect = store.add_element(ElementType::Rectangle);
    assert_eq!(rect.size, Some(Size::new(100.0, 80.0)));
    // Centered on the 1600x900 canvas.
    assert_eq!(rect.position, Point::new(750.0, 410.0));
    assert_eq!(rect.layer, 1);
    assert_eq!(store.active_element_id(), Some(rect.id));

    let circle = store.add_element(ElementType::Circle);
    assert_eq!(circle.size, Some(Size::new(100.0, 100.0)));
    assert_eq!(circle.layer, 2);
}

#[test]
fn test_add_background_takes_layer_zero() {
    let mut store = SceneStore::new();
    store.add_element(ElementType::Rectangle);
    let bg = store.add_element(ElementType::Background);
    assert_eq!(bg.layer, 0);
    assert!(store.active_canvas().background().is_some());
}

#[test]
fn test_second_background_updates_first_in_place() {
    let mut store = SceneStore::new();
    let first = store.add_element(ElementType::Background);

    let mut second = scenekit_designer::Element::new(ElementType::Background);
    second
        .style
        .insert("backgroundColor".to_string(), StyleValue::from("#ff0000"));
    let merged = store.add_element_from(second);

    // Still one background, the original element, with the new style.
    assert_eq!(merged.id, first.id);
    let backgrounds: Vec<_> = store
        .active_canvas()
        .elements
        .iter()
        .filter(|e| e.is_background())
        .collect();
    assert_eq!(backgrounds.len(), 1);
    assert_eq!(
        backgrounds[0].style.get("backgroundColor").and_then(StyleValue::as_str),
        Some("#ff0000")
    );
}

#[test]
fn test_update_element_merges_and_commits() {
    let mut store = SceneStore::new();
    let rect = store.add_element(ElementType::Rectangle);

    store.update_element(rect.id, ElementUpdate::position(Point::new(10.0, 20.0)));
    let element = store.get_element(rect.id).unwrap();
    assert_eq!(element.position, Point::new(10.0, 20.0));
    // Style from creation survives a position-only update.
    assert!(element.style.contains_key("fill"));

    store.undo();
    assert_eq!(store.get_element(rect.id).unwrap().position, rect.position);
}

#[test]
fn test_update_unknown_element_is_noop() {
    let mut store = SceneStore::new();
    store.add_element(ElementType::Rectangle);
    let before_undoable = store.can_undo();

    store.update_element(uuid::Uuid::new_v4(), ElementUpdate::position(Point::new(0.0, 0.0)));
    assert_eq!(store.can_undo(), before_undoable);
    assert_eq!(store.active_canvas().elements.len(), 1);
}

#[test]
fn test_uncommitted_updates_collapse_into_one_undo_step() {
    let mut store = SceneStore::new();
    let rect = store.add_element(ElementType::Rectangle);
    let start = rect.position;

    for i in 1..=30 {
        store.update_element_without_history(
            rect.id,
            ElementUpdate::position(Point::new(start.x + i as f64, start.y)),
        );
    }
    store.commit_to_history();

    assert!(store.undo());
    // One undo lands on the pre-gesture position, not an intermediate frame.
    assert_eq!(store.get_element(rect.id).unwrap().position, start);
}

#[test]
fn test_remove_element_clears_selection_membership() {
    let mut store = SceneStore::new();
    let a = store.add_element(ElementType::Rectangle);
    let b = store.add_element(ElementType::Circle);
    store.select_multiple_elements(&[a.id, b.id]);

    store.remove_element(a.id);
    assert!(store.get_element(a.id).is_none());
    assert_eq!(store.selected_element_ids(), &[b.id]);
}

#[test]
fn test_remove_multiple_is_one_undo_step() {
    let mut store = SceneStore::new();
    let a = store.add_element(ElementType::Rectangle);
    let b = store.add_element(ElementType::Circle);
    let c = store.add_element(ElementType::Triangle);

    store.remove_multiple_elements(&[a.id, b.id, c.id]);
    assert!(store.active_canvas().elements.is_empty());

    store.undo();
    assert_eq!(store.active_canvas().elements.len(), 3);
}

#[test]
fn test_duplicate_element_fidelity() {
    let mut store = SceneStore::new();
    let image = store.add_element(ElementType::Image);
    store.attach_image_data(image.id, "assets/cat.png".to_string(), Size::new(800.0, 600.0));
    store.update_element(
        image.id,
        ElementUpdate::style_entry("transform", StyleValue::from("rotate(30deg)")),
    );

    let original = store.get_element(image.id).unwrap().clone();
    let copy = store.duplicate_element(image.id).unwrap();

    assert_ne!(copy.id, original.id);
    assert_eq!(copy.position.x, original.position.x + 20.0);
    assert_eq!(copy.position.y, original.position.y + 20.0);
    assert_eq!(copy.src, original.src);
    assert_eq!(copy.original_size, original.original_size);
    assert_eq!(copy.style, original.style);
    assert!(copy.layer > original.layer);
}

#[test]
fn test_duplicate_multiple_is_one_step_and_selects_copies() {
    let mut store = SceneStore::new();
    let bg = store.add_element(ElementType::Background);
    let a = store.add_element(ElementType::Rectangle);
    let b = store.add_element(ElementType::Circle);

    let copies = store.duplicate_multiple_elements(&[a.id, bg.id, b.id]);
    assert_eq!(copies.len(), 2);
    assert_eq!(store.selected_element_ids(), &[copies[0].id, copies[1].id]);
    assert_eq!(store.active_canvas().elements.len(), 5);

    store.undo();
    assert_eq!(store.active_canvas().elements.len(), 3);
}

#[test]
fn test_duplicate_background_is_declined() {
    let mut store = SceneStore::new();
    let bg = store.add_element(ElementType::Background);
    assert!(store.duplicate_element(bg.id).is_none());
    assert_eq!(store.active_canvas().elements.len(), 1);
}

#[test]
fn test_scale_element_to_percent_uses_original_size() {
    let mut store = SceneStore::new();
    let image = store.add_element(ElementType::Image);
    store.attach_image_data(image.id, "assets/dog.png".to_string(), Size::new(400.0, 200.0));

    store.scale_element_to_percent(image.id, 150.0);
    assert_eq!(
        store.get_element(image.id).unwrap().size,
        Some(Size::new(600.0, 300.0))
    );

    // original_size is the fixed denominator, not the current size.
    store.scale_element_to_percent(image.id, 50.0);
    assert_eq!(
        store.get_element(image.id).unwrap().size,
        Some(Size::new(200.0, 100.0))
    );
}

#[test]
fn test_layer_operations_respect_reserved_floor() {
    let mut store = SceneStore::new();
    let a = store.add_element(ElementType::Rectangle);
    let b = store.add_element(ElementType::Circle);

    store.send_to_back(b.id);
    assert_eq!(store.get_element(b.id).unwrap().layer, 1);

    store.move_layer_down(b.id);
    assert_eq!(store.get_element(b.id).unwrap().layer, 1);

    store.bring_to_front(b.id);
    assert!(store.get_element(b.id).unwrap().layer > store.get_element(a.id).unwrap().layer);
}

#[test]
fn test_background_layer_is_immovable() {
    let mut store = SceneStore::new();
    let bg = store.add_element(ElementType::Background);
    store.bring_to_front(bg.id);
    assert_eq!(store.get_element(bg.id).unwrap().layer, 0);
}

#[test]
fn test_remove_last_canvas_is_declined() {
    let mut store = SceneStore::new();
    assert!(!store.remove_canvas(0));
    assert_eq!(store.canvases().len(), 1);

    store.add_canvas();
    assert!(store.remove_canvas(0));
    assert_eq!(store.canvases().len(), 1);
}

#[test]
fn test_add_canvas_becomes_active() {
    let mut store = SceneStore::new();
    let id = store.add_canvas();
    assert_eq!(store.active_canvas_index(), 1);
    assert_eq!(store.active_canvas().id, id);
    assert_eq!(store.active_canvas().name, "Canvas 2");
}

#[test]
fn test_duplicate_canvas_deep_copies_elements() {
    let mut store = SceneStore::new();
    let rect = store.add_element(ElementType::Rectangle);
    let copy_id = store.duplicate_canvas(0).unwrap();

    assert_eq!(store.canvases().len(), 2);
    let copy_index = store.canvas_index_of(copy_id).unwrap();
    let copy = &store.canvases()[copy_index];
    assert_eq!(copy.elements.len(), 1);
    // Fresh element ids on the copy.
    assert_ne!(copy.elements[0].id, rect.id);
    assert_eq!(copy.elements[0].size, rect.size);
}

#[test]
fn test_reorder_canvases_tracks_active_by_identity() {
    let mut store = SceneStore::new();
    store.add_canvas();
    store.add_canvas();
    let active_id = store.active_canvas().id;

    assert!(store.reorder_canvases(2, 0));
    assert_eq!(store.active_canvas().id, active_id);
    assert_eq!(store.active_canvas_index(), 0);
}

#[test]
fn test_set_active_canvas_is_not_undoable() {
    let mut store = SceneStore::new();
    store.add_canvas();
    assert!(store.set_active_canvas(0));
    assert_eq!(store.active_canvas_index(), 0);
    assert!(!store.set_active_canvas(99));

    // The only undoable step is the canvas creation, not the navigation.
    assert!(store.undo());
    assert_eq!(store.canvases().len(), 1);
    assert!(!store.can_undo());
}

#[test]
fn test_marquee_select_uses_bounding_boxes() {
    let mut store = SceneStore::new();
    let a = store.add_element(ElementType::Rectangle);
    store.update_element(a.id, ElementUpdate::position(Point::new(0.0, 0.0)));
    let b = store.add_element(ElementType::Circle);
    store.update_element(b.id, ElementUpdate::position(Point::new(500.0, 500.0)));

    store.marquee_select(0.0, 0.0, 150.0, 150.0, false);
    assert_eq!(store.selected_element_ids(), &[a.id]);

    store.marquee_select(450.0, 450.0, 200.0, 200.0, true);
    let selected = store.selected_element_ids();
    assert!(selected.contains(&a.id) && selected.contains(&b.id));
}

#[test]
fn test_marquee_excludes_background_and_hidden() {
    let mut store = SceneStore::new();
    store.add_element(ElementType::Background);
    let rect = store.add_element(ElementType::Rectangle);
    let hidden = store.add_element(ElementType::Circle);
    store.update_element(
        hidden.id,
        ElementUpdate {
            is_hidden: Some(true),
            ..Default::default()
        },
    );

    store.marquee_select(0.0, 0.0, 1600.0, 900.0, false);
    assert_eq!(store.selected_element_ids(), &[rect.id]);
}

#[test]
fn test_marquee_normalizes_negative_rect() {
    let mut store = SceneStore::new();
    let rect = store.add_element(ElementType::Rectangle);
    store.update_element(rect.id, ElementUpdate::position(Point::new(100.0, 100.0)));

    // Dragged up-left: origin at bottom-right, negative extent.
    store.marquee_select(300.0, 300.0, -250.0, -250.0, false);
    assert_eq!(store.selected_element_ids(), &[rect.id]);
}

#[test]
fn test_undo_redo_round_trip_on_scene() {
    let mut store = SceneStore::new();
    let rect = store.add_element(ElementType::Rectangle);
    store.remove_element(rect.id);

    assert!(store.undo());
    assert!(store.get_element(rect.id).is_some());
    assert!(store.redo());
    assert!(store.get_element(rect.id).is_none());
}

#[test]
fn test_modified_flag_tracks_commits_and_saves() {
    let mut store = SceneStore::new();
    assert!(!store.is_modified());
    store.add_element(ElementType::Rectangle);
    assert!(store.is_modified());
    store.mark_saved();
    assert!(!store.is_modified());
    store.undo();
    assert!(store.is_modified());
}

#[test]
fn test_live_update_marks_scene_modified() {
    let mut store = SceneStore::new();
    let rect = store.add_element(ElementType::Rectangle);
    store.mark_saved();

    // A dropped update for a stale id leaves the scene clean.
    store.update_element_without_history(
        uuid::Uuid::new_v4(),
        ElementUpdate::position(Point::new(1.0, 1.0)),
    );
    assert!(!store.is_modified());

    store.update_element_without_history(
        rect.id,
        ElementUpdate::position(Point::new(5.0, 5.0)),
    );
    assert!(store.is_modified());
}
