//! Scan-conversion algorithms.
//!
//! Every function maps a continuous primitive to the ordered sequence of
//! pixel positions that represent it. Nothing here touches shared state;
//! placing the result on a canvas is the caller's business.

use paintkit_core::geometry::Point;

/// Rasterizes a line segment with the Digital Differential Analyzer.
///
/// The step count is the continuous max(|dx|, |dy|); each step advances by
/// (dx/steps, dy/steps), emitting floor(steps)+1 samples inclusive of both
/// endpoints. Positions are emitted un-rounded; the store keeps floating
/// coordinates.
pub fn line_dda(p1: Point, p2: Point) -> Vec<Point> {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let steps = dx.abs().max(dy.abs());

    // Coincident endpoints still produce a single sample; stepping would
    // divide by zero.
    if steps == 0.0 {
        return vec![p1];
    }

    let x_increment = dx / steps;
    let y_increment = dy / steps;

    let count = steps.floor() as usize;
    let mut points = Vec::with_capacity(count + 1);
    let mut x = p1.x;
    let mut y = p1.y;
    for _ in 0..=count {
        points.push(Point::new(x, y));
        x += x_increment;
        y += y_increment;
    }
    points
}

/// Rasterizes a line segment with Bresenham's integer algorithm.
///
/// Endpoints are rounded to the nearest integer grid position. The output
/// always contains max(|dx|, |dy|) + 1 pixels, first and last being the
/// rounded endpoints.
pub fn line_bresenham(p1: Point, p2: Point) -> Vec<Point> {
    let mut x0 = p1.x.round() as i64;
    let mut y0 = p1.y.round() as i64;
    let x1 = p2.x.round() as i64;
    let y1 = p2.y.round() as i64;

    let dx = (x1 - x0).abs();
    let sx: i64 = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy: i64 = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut points = Vec::with_capacity((dx.max(-dy) + 1) as usize);
    loop {
        points.push(Point::new(x0 as f64, y0 as f64));
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        // Independent tests: on an exact 45° diagonal both axes advance in
        // the same step. An else here would break the symmetry.
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
    points
}

/// Rasterizes a circle with the midpoint (Bresenham) algorithm.
///
/// Starts at (0, radius) with decision variable d = 3 - 2r and emits the
/// 8-way symmetric reflections of each computed octant point about the
/// center. A zero radius emits the center point alone.
pub fn circle_bresenham(center: Point, radius: i64) -> Vec<Point> {
    if radius <= 0 {
        return vec![center];
    }

    let mut points = Vec::new();
    let mut x: i64 = 0;
    let mut y: i64 = radius;
    let mut d: i64 = 3 - 2 * radius;

    emit_octants(&mut points, center, x, y);
    while y >= x {
        x += 1;
        if d > 0 {
            y -= 1;
            d += 4 * (x - y) + 10;
        } else {
            d += 4 * x + 6;
        }
        emit_octants(&mut points, center, x, y);
    }
    points
}

/// Emits the eight symmetric reflections of an octant point (x, y).
fn emit_octants(points: &mut Vec<Point>, center: Point, x: i64, y: i64) {
    let (x, y) = (x as f64, y as f64);
    let offsets: [(f64, f64); 8] = [
        (x, y),
        (-x, y),
        (x, -y),
        (-x, -y),
        (y, x),
        (-y, x),
        (y, -x),
        (-y, -x),
    ];
    for (ox, oy) in offsets {
        points.push(Point::new(center.x + ox, center.y + oy));
    }
}

/// Rasterizes the four sides of the axis-aligned bounding box of two corner
/// points, each side via [`line_dda`]. Not a distinct algorithm.
pub fn rectangle_outline(p1: Point, p2: Point) -> Vec<Point> {
    let top_right = Point::new(p2.x, p1.y);
    let bottom_left = Point::new(p1.x, p2.y);

    let mut points = line_dda(p1, top_right);
    points.extend(line_dda(bottom_left, p2));
    points.extend(line_dda(p1, bottom_left));
    points.extend(line_dda(top_right, p2));
    points
}
