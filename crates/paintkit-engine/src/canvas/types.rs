//! Canvas type definitions: drawing modes, clip modes, line algorithms.

use serde::{Deserialize, Serialize};

use crate::clip::ClipAlgorithm;

/// Which line scan-conversion algorithm to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineAlgorithm {
    Dda,
    Bresenham,
}

/// Drawing modes for the canvas. At most one is active at a time; the
/// presentation layer's toggle buttons map straight onto this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawingMode {
    LineDda,
    LineBresenham,
    Circle,
    Rectangle,
    Select,
    Move,
    FreeDraw,
}

/// Clip modes for the canvas. While a clip algorithm is active, line draws
/// are passed through it against the current selection window before
/// rasterization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClipMode {
    NoClip,
    CohenSutherland,
    LiangBarsky,
}

impl ClipMode {
    /// The clipping algorithm this mode selects, if any.
    pub fn algorithm(&self) -> Option<ClipAlgorithm> {
        match self {
            ClipMode::NoClip => None,
            ClipMode::CohenSutherland => Some(ClipAlgorithm::CohenSutherland),
            ClipMode::LiangBarsky => Some(ClipAlgorithm::LiangBarsky),
        }
    }
}
