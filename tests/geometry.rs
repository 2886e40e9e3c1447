use egui::{Pos2, Rect, Vec2};
use sketchpad::geometry::{pointer_to_canvas, CanvasTransform};

fn displayed_canvas() -> Rect {
    // 1920x1080 buffer shown at 768x512, offset inside the window
    Rect::from_min_size(Pos2::new(40.0, 60.0), Vec2::new(768.0, 512.0))
}

fn assert_close(actual: Pos2, expected: Pos2) {
    assert!(
        (actual.x - expected.x).abs() < 1e-3 && (actual.y - expected.y).abs() < 1e-3,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

#[test]
fn test_center_maps_to_buffer_center() {
    let bounds = displayed_canvas();
    let logical = pointer_to_canvas(bounds.center(), bounds, Vec2::new(1920.0, 1080.0));
    assert_close(logical, Pos2::new(960.0, 540.0));
}

#[test]
fn test_corners_map_to_buffer_corners() {
    let transform = CanvasTransform::new(displayed_canvas(), Vec2::new(1920.0, 1080.0));
    assert_close(transform.to_logical(displayed_canvas().min), Pos2::ZERO);
    assert_close(transform.to_logical(displayed_canvas().max), Pos2::new(1920.0, 1080.0));
}

#[test]
fn test_axes_scale_independently() {
    let transform = CanvasTransform::new(displayed_canvas(), Vec2::new(1920.0, 1080.0));
    let scale = transform.scale();
    assert!((scale.x - 2.5).abs() < 1e-6);
    assert!((scale.y - 1080.0 / 512.0).abs() < 1e-6);
}

#[test]
fn test_screen_round_trip() {
    let transform = CanvasTransform::new(displayed_canvas(), Vec2::new(1920.0, 1080.0));
    let logical = Pos2::new(123.0, 456.0);
    assert_close(transform.to_logical(transform.to_screen(logical)), logical);
}

#[test]
fn test_unscaled_canvas_only_offsets() {
    let bounds = Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::new(256.0, 256.0));
    let logical = pointer_to_canvas(Pos2::new(110.0, 220.0), bounds, Vec2::new(256.0, 256.0));
    assert_close(logical, Pos2::new(100.0, 200.0));
}

#[test]
fn test_degenerate_bounds_do_not_divide_by_zero() {
    let bounds = Rect::from_min_size(Pos2::new(10.0, 10.0), Vec2::ZERO);
    let logical = pointer_to_canvas(Pos2::new(15.0, 12.0), bounds, Vec2::new(100.0, 100.0));
    assert_close(logical, Pos2::new(5.0, 2.0));
}
