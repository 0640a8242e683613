use floorkit_designer::geometry::{
    distance, lock_to_axis, pick_axis, project_onto_segment, to_normalized, to_pixels, Axis,
    Bounds, CanvasSize, Point,
};
use proptest::prelude::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn test_normalization_round_trip(
        x in -5000.0f64..5000.0,
        y in -5000.0f64..5000.0,
        w in 1.0f64..4000.0,
        h in 1.0f64..4000.0,
    ) {
        let size = CanvasSize::new(w, h);
        let back = to_pixels(to_normalized(Point::new(x, y), size), size);
        prop_assert!(approx(back.x, x));
        prop_assert!(approx(back.y, y));
    }
}

#[test]
fn test_normalization_scales_axes_independently() {
    let size = CanvasSize::new(800.0, 400.0);
    let norm = to_normalized(Point::new(200.0, 200.0), size);
    assert_eq!(norm, Point::new(0.25, 0.5));
}

#[test]
fn test_distance_is_euclidean() {
    assert_eq!(distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
}

#[test]
fn test_projection_clamps_to_segment() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(10.0, 0.0);
    assert_eq!(project_onto_segment(Point::new(4.0, 7.0), a, b), Point::new(4.0, 0.0));
    assert_eq!(project_onto_segment(Point::new(-5.0, 1.0), a, b), a);
    assert_eq!(project_onto_segment(Point::new(25.0, -3.0), a, b), b);
}

#[test]
fn test_projection_onto_degenerate_segment_returns_start() {
    let a = Point::new(3.0, 3.0);
    assert_eq!(project_onto_segment(Point::new(9.0, 1.0), a, a), a);
}

#[test]
fn test_axis_threshold() {
    let start = Point::new(0.0, 0.0);
    assert_eq!(pick_axis(start, Point::new(5.0, 3.0), 6.0), None);
    assert_eq!(pick_axis(start, Point::new(8.0, 2.0), 6.0), Some(Axis::X));
    assert_eq!(pick_axis(start, Point::new(2.0, -9.0), 6.0), Some(Axis::Y));
}

#[test]
fn test_lock_to_axis() {
    let start = Point::new(10.0, 10.0);
    let p = Point::new(40.0, 13.0);
    assert_eq!(lock_to_axis(start, p, Some(Axis::X)), Point::new(40.0, 10.0));
    assert_eq!(lock_to_axis(start, p, Some(Axis::Y)), Point::new(10.0, 13.0));
    assert_eq!(lock_to_axis(start, p, None), p);
}

#[test]
fn test_bounds_touching_edges_intersect() {
    let a = Bounds::from_rect(0.0, 0.0, 10.0, 10.0);
    let touching = Bounds::from_rect(10.0, 0.0, 5.0, 5.0);
    let apart = Bounds::from_rect(10.5, 0.0, 5.0, 5.0);
    assert!(a.intersects(&touching));
    assert!(!a.intersects(&apart));
}
