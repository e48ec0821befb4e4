use paintkit_core::geometry::Point;
use paintkit_engine::clip::{clip_segment, ClipAlgorithm, ClipWindow};

const ALGORITHMS: [ClipAlgorithm; 2] = [ClipAlgorithm::CohenSutherland, ClipAlgorithm::LiangBarsky];

fn window() -> ClipWindow {
    ClipWindow::new(0.0, 0.0, 10.0, 10.0)
}

fn assert_close(actual: Point, expected: Point) {
    assert!(
        (actual.x - expected.x).abs() < 1e-9 && (actual.y - expected.y).abs() < 1e-9,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

#[test]
fn test_fully_inside_accepted_unchanged() {
    let p1 = Point::new(2.0, 2.0);
    let p2 = Point::new(8.0, 8.0);
    for algorithm in ALGORITHMS {
        let (c1, c2) = clip_segment(algorithm, p1, p2, &window()).expect("inside segment");
        assert_eq!(c1, p1);
        assert_eq!(c2, p2);
    }
}

#[test]
fn test_fully_outside_rejected() {
    let p1 = Point::new(20.0, 20.0);
    let p2 = Point::new(30.0, 30.0);
    for algorithm in ALGORITHMS {
        assert!(clip_segment(algorithm, p1, p2, &window()).is_none());
    }
}

#[test]
fn test_parallel_outside_rejected() {
    // Horizontal segment above the window; Liang-Barsky's p == 0 case.
    let p1 = Point::new(-5.0, 20.0);
    let p2 = Point::new(15.0, 20.0);
    for algorithm in ALGORITHMS {
        assert!(clip_segment(algorithm, p1, p2, &window()).is_none());
    }
}

#[test]
fn test_horizontal_crossing_both_edges() {
    // The (-5,5)-(15,5) fixture: clips to (0,5)-(10,5) under both
    // algorithms.
    let p1 = Point::new(-5.0, 5.0);
    let p2 = Point::new(15.0, 5.0);
    for algorithm in ALGORITHMS {
        let (c1, c2) = clip_segment(algorithm, p1, p2, &window()).expect("crossing segment");
        assert_close(c1, Point::new(0.0, 5.0));
        assert_close(c2, Point::new(10.0, 5.0));
    }
}

#[test]
fn test_crossing_single_edge() {
    let p1 = Point::new(-5.0, 5.0);
    let p2 = Point::new(5.0, 5.0);
    for algorithm in ALGORITHMS {
        let (c1, c2) = clip_segment(algorithm, p1, p2, &window()).expect("crossing segment");
        assert_close(c1, Point::new(0.0, 5.0));
        assert_close(c2, Point::new(5.0, 5.0));
    }
}

#[test]
fn test_corner_cutting_two_edges() {
    let p1 = Point::new(4.0, -2.0);
    let p2 = Point::new(12.0, 6.0);
    for algorithm in ALGORITHMS {
        let (c1, c2) = clip_segment(algorithm, p1, p2, &window()).expect("corner cut");
        assert_close(c1, Point::new(6.0, 0.0));
        assert_close(c2, Point::new(10.0, 4.0));
    }
}

#[test]
fn test_segment_touching_boundary() {
    // Runs along the left edge; clipped to the window's vertical extent.
    let p1 = Point::new(0.0, -5.0);
    let p2 = Point::new(0.0, 15.0);
    for algorithm in ALGORITHMS {
        let (c1, c2) = clip_segment(algorithm, p1, p2, &window()).expect("tangent segment");
        assert_close(c1, Point::new(0.0, 0.0));
        assert_close(c2, Point::new(0.0, 10.0));
    }
}

#[test]
fn test_degenerate_window_keeps_only_boundary() {
    let degenerate = ClipWindow::new(5.0, 5.0, 5.0, 5.0);
    let on_boundary = Point::new(5.0, 5.0);
    for algorithm in ALGORITHMS {
        let (c1, c2) =
            clip_segment(algorithm, on_boundary, on_boundary, &degenerate).expect("boundary point");
        assert_eq!(c1, on_boundary);
        assert_eq!(c2, on_boundary);

        assert!(clip_segment(
            algorithm,
            Point::new(6.0, 6.0),
            Point::new(7.0, 7.0),
            &degenerate
        )
        .is_none());
    }
}

#[test]
fn test_window_normalizes_swapped_bounds() {
    let swapped = ClipWindow::new(10.0, 10.0, 0.0, 0.0);
    assert_eq!(swapped, window());
}

#[test]
fn test_rejection_leaves_inputs_unmodified() {
    // The API takes points by value; rejection must simply return None
    // rather than a mutated pair.
    let p1 = Point::new(-3.0, -3.0);
    let p2 = Point::new(-1.0, -8.0);
    for algorithm in ALGORITHMS {
        assert!(clip_segment(algorithm, p1, p2, &window()).is_none());
        assert_eq!(p1, Point::new(-3.0, -3.0));
        assert_eq!(p2, Point::new(-1.0, -8.0));
    }
}
