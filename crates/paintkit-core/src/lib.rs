//! # PaintKit Core
//!
//! Core types shared by the PaintKit raster engine and its front-ends:
//! 2D geometry primitives, colors, and the error taxonomy.

pub mod color;
pub mod error;
pub mod geometry;

pub use color::Color;
pub use error::{EngineError, Result};
pub use geometry::{rotate_point, Point, Rect, Size};
