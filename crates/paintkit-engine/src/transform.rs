//! Pure transform math for selection operations.
//!
//! These functions are stateless; the selection manager decides what they
//! apply to and when the original-position baseline is rebased.

use paintkit_core::geometry::{rotate_point, Point};
use serde::{Deserialize, Serialize};

/// Axis of a reflection about the selection center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReflectionAxis {
    /// Mirror across the horizontal axis through the center (negates Y
    /// offsets).
    X,
    /// Mirror across the vertical axis through the center (negates X
    /// offsets).
    Y,
    /// Mirror across both axes (point reflection through the center).
    Xy,
}

/// Mirrors a position about `center` on the given axis.
pub fn reflect_position(position: Point, center: Point, axis: ReflectionAxis) -> Point {
    match axis {
        ReflectionAxis::X => Point::new(position.x, 2.0 * center.y - position.y),
        ReflectionAxis::Y => Point::new(2.0 * center.x - position.x, position.y),
        ReflectionAxis::Xy => Point::new(
            2.0 * center.x - position.x,
            2.0 * center.y - position.y,
        ),
    }
}

/// Scales `point` about `center` by (sx, sy), then rotates the result about
/// `center` by `angle_deg` degrees.
///
/// The order is load-bearing: scale first, then rotate. Swapping the two
/// yields different positions for any non-uniform scale, so callers that
/// need visual parity with the layout recomputation must go through this
/// function rather than composing the steps themselves.
pub fn scale_then_rotate(point: Point, center: Point, sx: f64, sy: f64, angle_deg: f64) -> Point {
    let scaled = Point::new(
        center.x + (point.x - center.x) * sx,
        center.y + (point.y - center.y) * sy,
    );
    rotate_point(scaled, center, angle_deg)
}
