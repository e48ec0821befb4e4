//! Cohen-Sutherland region-code line clipping.

use super::ClipWindow;
use paintkit_core::geometry::Point;

// Region codes. Canvas coordinates grow downward, so BOTTOM flags y < ymin.
const INSIDE: u8 = 0; // 0000
const LEFT: u8 = 1; //   0001
const RIGHT: u8 = 2; //  0010
const BOTTOM: u8 = 4; // 0100
const TOP: u8 = 8; //    1000

/// Computes the 4-bit region code of a point relative to the window.
/// The horizontal and vertical tests are each exclusive, so a point is
/// never flagged on both sides of one axis.
fn outcode(window: &ClipWindow, x: f64, y: f64) -> u8 {
    let mut code = INSIDE;

    if x < window.xmin {
        code |= LEFT;
    } else if x > window.xmax {
        code |= RIGHT;
    }
    if y < window.ymin {
        code |= BOTTOM;
    } else if y > window.ymax {
        code |= TOP;
    }

    code
}

/// Clips the segment p1-p2 against the window. Returns the clipped segment,
/// or `None` when it lies entirely outside.
pub fn clip(p1: Point, p2: Point, window: &ClipWindow) -> Option<(Point, Point)> {
    let (mut x0, mut y0) = (p1.x, p1.y);
    let (mut x1, mut y1) = (p2.x, p2.y);
    let mut outcode0 = outcode(window, x0, y0);
    let mut outcode1 = outcode(window, x1, y1);

    loop {
        if (outcode0 | outcode1) == 0 {
            // Trivial accept: both endpoints inside.
            return Some((Point::new(x0, y0), Point::new(x1, y1)));
        }
        if (outcode0 & outcode1) != 0 {
            // Trivial reject: both endpoints share an outside half-plane.
            return None;
        }

        // Push the outside endpoint onto the boundary its outcode names.
        // The set bit guarantees the intersection denominator is nonzero.
        let outcode_out = if outcode0 != 0 { outcode0 } else { outcode1 };

        let (x, y);
        if outcode_out & TOP != 0 {
            x = x0 + (x1 - x0) * (window.ymax - y0) / (y1 - y0);
            y = window.ymax;
        } else if outcode_out & BOTTOM != 0 {
            x = x0 + (x1 - x0) * (window.ymin - y0) / (y1 - y0);
            y = window.ymin;
        } else if outcode_out & RIGHT != 0 {
            y = y0 + (y1 - y0) * (window.xmax - x0) / (x1 - x0);
            x = window.xmax;
        } else {
            y = y0 + (y1 - y0) * (window.xmin - x0) / (x1 - x0);
            x = window.xmin;
        }

        if outcode_out == outcode0 {
            x0 = x;
            y0 = y;
            outcode0 = outcode(window, x0, y0);
        } else {
            x1 = x;
            y1 = y;
            outcode1 = outcode(window, x1, y1);
        }
    }
}
