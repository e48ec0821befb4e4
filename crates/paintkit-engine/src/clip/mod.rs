//! Line clipping against an axis-aligned rectangular window.
//!
//! Two interchangeable algorithms are provided. Both share the same
//! contract: given a segment and a window, either reject the segment
//! entirely (`None`) or return the shortened segment that lies inside.
//! For rectangular windows the two produce geometrically equivalent
//! results.

pub mod cohen_sutherland;
pub mod liang_barsky;

use paintkit_core::geometry::Point;
use serde::{Deserialize, Serialize};

/// Which clipping algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClipAlgorithm {
    CohenSutherland,
    LiangBarsky,
}

/// Axis-aligned clip window.
///
/// Invariant: `xmin <= xmax` and `ymin <= ymax`. A degenerate (zero-area)
/// window is legal and rejects everything not exactly on its boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipWindow {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl ClipWindow {
    /// Creates a clip window, normalizing the bounds so the invariant holds
    /// regardless of argument order.
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self {
            xmin: xmin.min(xmax),
            ymin: ymin.min(ymax),
            xmax: xmin.max(xmax),
            ymax: ymin.max(ymax),
        }
    }

}

/// Clips a segment with the chosen algorithm. `None` means the segment lies
/// entirely outside the window.
pub fn clip_segment(
    algorithm: ClipAlgorithm,
    p1: Point,
    p2: Point,
    window: &ClipWindow,
) -> Option<(Point, Point)> {
    match algorithm {
        ClipAlgorithm::CohenSutherland => cohen_sutherland::clip(p1, p2, window),
        ClipAlgorithm::LiangBarsky => liang_barsky::clip(p1, p2, window),
    }
}
