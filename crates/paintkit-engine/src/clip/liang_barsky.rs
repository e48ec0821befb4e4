//! Liang-Barsky parametric line clipping.

use super::ClipWindow;
use paintkit_core::geometry::Point;

/// Clips the segment p1-p2 against the window. Returns the clipped segment,
/// or `None` when it lies entirely outside.
///
/// The segment is treated parametrically as p1 + t·(p2 − p1) with entry and
/// exit parameters t0/t1 tightened across the four half-plane tests. Both
/// output endpoints are computed from the original, unmodified endpoints.
pub fn clip(p1: Point, p2: Point, window: &ClipWindow) -> Option<(Point, Point)> {
    let (x0, y0) = (p1.x, p1.y);
    let dx = p2.x - x0;
    let dy = p2.y - y0;

    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;

    // (p, q) per window edge: left, right, bottom, top.
    let edges = [
        (-dx, x0 - window.xmin),
        (dx, window.xmax - x0),
        (-dy, y0 - window.ymin),
        (dy, window.ymax - y0),
    ];

    for (p, q) in edges {
        if p == 0.0 {
            // Parallel to this edge; outside it means gone entirely.
            if q < 0.0 {
                return None;
            }
            continue;
        }

        let r = q / p;
        if p < 0.0 {
            // Entering the half-plane.
            if r > t1 {
                return None;
            }
            if r > t0 {
                t0 = r;
            }
        } else {
            // Leaving the half-plane.
            if r < t0 {
                return None;
            }
            if r < t1 {
                t1 = r;
            }
        }
    }

    let mut clipped1 = p1;
    let mut clipped2 = p2;
    if t1 < 1.0 {
        clipped2 = Point::new(x0 + t1 * dx, y0 + t1 * dy);
    }
    if t0 > 0.0 {
        clipped1 = Point::new(x0 + t0 * dx, y0 + t0 * dy);
    }
    Some((clipped1, clipped2))
}
