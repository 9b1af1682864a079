use scenekit_designer::{Point, Viewport};

#[test]
fn test_new_viewport_is_identity() {
    let vp = Viewport::new(1600.0, 900.0);
    assert_eq!(vp.zoom(), 1.0);
    assert_eq!(vp.pan_x(), 0.0);
    assert_eq!(vp.pan_y(), 0.0);
}

#[test]
fn test_set_zoom_clamps_to_range() {
    let mut vp = Viewport::default();
    vp.set_zoom(0.01);
    assert_eq!(vp.zoom(), 0.1);
    vp.set_zoom(100.0);
    assert_eq!(vp.zoom(), 8.0);
    vp.set_zoom(2.0);
    assert_eq!(vp.zoom(), 2.0);
}

#[test]
fn test_zoom_in_out_steps() {
    let mut vp = Viewport::default();
    vp.zoom_in();
    assert!((vp.zoom() - 1.2).abs() < 1e-9);
    vp.zoom_out();
    assert!((vp.zoom() - 1.0).abs() < 1e-9);
}

#[test]
fn test_screen_canvas_round_trip() {
    let mut vp = Viewport::new(1600.0, 900.0);
    vp.set_zoom(2.0);
    vp.set_pan(30.0, -10.0);

    let canvas = vp.screen_to_canvas(430.0, 190.0);
    assert_eq!(canvas, Point::new(200.0, 100.0));

    let (px, py) = vp.canvas_to_screen(canvas);
    assert_eq!((px, py), (430.0, 190.0));
}

#[test]
fn test_zoom_to_point_keeps_point_fixed_on_screen() {
    let mut vp = Viewport::new(1600.0, 900.0);
    vp.set_pan(50.0, 20.0);
    let anchor = Point::new(400.0, 300.0);
    let before = vp.canvas_to_screen(anchor);

    vp.zoom_to_point(anchor, 3.0);
    let after = vp.canvas_to_screen(anchor);
    assert!((before.0 - after.0).abs() < 1e-9);
    assert!((before.1 - after.1).abs() < 1e-9);
    assert_eq!(vp.zoom(), 3.0);
}

#[test]
fn test_fit_canvas_centers_whole_canvas() {
    let mut vp = Viewport::new(800.0, 600.0);
    vp.fit_canvas();

    // Both canvas corners land inside the view area.
    let (x0, y0) = vp.canvas_to_screen(Point::new(0.0, 0.0));
    let (x1, y1) = vp.canvas_to_screen(Point::new(1600.0, 900.0));
    assert!(x0 >= 0.0 && y0 >= 0.0);
    assert!(x1 <= 800.0 && y1 <= 600.0);

    // Centered: equal margins on both sides.
    assert!((x0 - (800.0 - x1)).abs() < 1e-9);
    assert!((y0 - (600.0 - y1)).abs() < 1e-9);
}

#[test]
fn test_reset_restores_identity() {
    let mut vp = Viewport::default();
    vp.set_zoom(4.0);
    vp.pan_by(100.0, 50.0);
    vp.reset();
    assert_eq!(vp.zoom(), 1.0);
    assert_eq!(vp.pan_x(), 0.0);
    assert_eq!(vp.pan_y(), 0.0);
}
