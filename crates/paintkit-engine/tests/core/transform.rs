use paintkit_core::geometry::Point;
use paintkit_engine::transform::{reflect_position, scale_then_rotate, ReflectionAxis};

fn assert_close(actual: Point, expected: Point) {
    assert!(
        (actual.x - expected.x).abs() < 1e-9 && (actual.y - expected.y).abs() < 1e-9,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

#[test]
fn test_reflect_x_mirrors_y_coordinate() {
    let center = Point::new(5.0, 5.0);
    let reflected = reflect_position(Point::new(5.0, 2.0), center, ReflectionAxis::X);
    assert_eq!(reflected, Point::new(5.0, 8.0));
}

#[test]
fn test_reflect_y_mirrors_x_coordinate() {
    let center = Point::new(5.0, 5.0);
    let reflected = reflect_position(Point::new(2.0, 7.0), center, ReflectionAxis::Y);
    assert_eq!(reflected, Point::new(8.0, 7.0));
}

#[test]
fn test_reflect_xy_is_point_reflection() {
    let center = Point::new(5.0, 5.0);
    let reflected = reflect_position(Point::new(2.0, 7.0), center, ReflectionAxis::Xy);
    assert_eq!(reflected, Point::new(8.0, 3.0));
}

#[test]
fn test_reflect_twice_is_identity() {
    let center = Point::new(-3.0, 11.0);
    let original = Point::new(4.5, -2.25);
    for axis in [ReflectionAxis::X, ReflectionAxis::Y, ReflectionAxis::Xy] {
        let once = reflect_position(original, center, axis);
        let twice = reflect_position(once, center, axis);
        assert_eq!(twice, original);
    }
}

#[test]
fn test_rotation_quarter_turn() {
    // (10,5) about (5,5) by 90° lands on (5,10).
    let rotated = scale_then_rotate(Point::new(10.0, 5.0), Point::new(5.0, 5.0), 1.0, 1.0, 90.0);
    assert_close(rotated, Point::new(5.0, 10.0));
}

#[test]
fn test_identity_parameters_leave_point_unchanged() {
    let point = Point::new(7.25, -3.5);
    let center = Point::new(2.0, 2.0);
    assert_eq!(scale_then_rotate(point, center, 1.0, 1.0, 0.0), point);
}

#[test]
fn test_scale_is_about_center_not_origin() {
    let scaled = scale_then_rotate(Point::new(7.0, 9.0), Point::new(5.0, 5.0), 2.0, 0.5, 0.0);
    assert_eq!(scaled, Point::new(9.0, 7.0));
}

#[test]
fn test_scale_then_rotate_order_matters() {
    // With a non-uniform scale the two composition orders disagree; the
    // engine is committed to scale-first.
    let point = Point::new(8.0, 5.0);
    let center = Point::new(5.0, 5.0);

    let scale_first = scale_then_rotate(point, center, 2.0, 1.0, 90.0);

    let rotated = scale_then_rotate(point, center, 1.0, 1.0, 90.0);
    let rotate_first = Point::new(
        center.x + (rotated.x - center.x) * 2.0,
        center.y + (rotated.y - center.y) * 1.0,
    );

    assert_close(scale_first, Point::new(5.0, 11.0));
    assert_close(rotate_first, Point::new(5.0, 8.0));
    assert!((scale_first.y - rotate_first.y).abs() > 1.0);
}
