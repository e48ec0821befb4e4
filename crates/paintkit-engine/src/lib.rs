//! # PaintKit Engine
//!
//! The raster geometry engine behind PaintKit's drawing surface. The engine
//! converts continuous primitives into discrete pixel sets, clips segments
//! against an axis-aligned window, and applies affine transforms to selected
//! pixel groups about a shared pivot.
//!
//! ## Core Components
//!
//! - **Rasterizer** ([`raster`]): DDA and Bresenham line scan conversion,
//!   midpoint circles, rectangle outlines. Pure functions, no shared state.
//! - **Clipper** ([`clip`]): Cohen-Sutherland and Liang-Barsky line clipping,
//!   interchangeable and geometrically equivalent on rectangular windows.
//! - **Pixel store** ([`pixel_store`]): the mutable collection of placed
//!   pixels with stable integer handles.
//! - **Selection manager** ([`selection_manager`]): rectangle queries, the
//!   active selection, its center, and the original-position baseline that
//!   keeps repeated slider transforms non-cumulative.
//! - **Transform math** ([`transform`]): reflection and the combined
//!   scale-then-rotate recomputation.
//! - **Canvas** ([`canvas`]): the command facade the presentation layer
//!   talks to. Owns the store, the selection, drawing/clip modes, and the
//!   brush color.
//!
//! ## Architecture
//!
//! ```text
//! Canvas (command surface)
//!   ├── PixelStore (placed pixels, stable handles)
//!   ├── SelectionManager (membership, pivot, baseline)
//!   │     └── transform (reflect / scale-then-rotate math)
//!   ├── raster (DDA, Bresenham line, Bresenham circle)
//!   └── clip (Cohen-Sutherland, Liang-Barsky)
//! ```
//!
//! Everything is single-threaded and synchronous: every command runs to
//! completion before the next is accepted, and batch deletions compute their
//! full candidate set before removing anything.
//!
//! ## Usage
//!
//! ```rust
//! use paintkit_core::geometry::Point;
//! use paintkit_engine::{Canvas, LineAlgorithm};
//!
//! let mut canvas = Canvas::new();
//! canvas.draw_line(LineAlgorithm::Bresenham, Point::new(0.0, 0.0), Point::new(10.0, 4.0));
//! assert_eq!(canvas.pixel_count(), 11);
//! ```

pub mod canvas;
pub mod clip;
pub mod pixel_store;
pub mod raster;
pub mod selection_manager;
pub mod transform;

pub use canvas::{Canvas, ClipMode, DrawingMode, LineAlgorithm};
pub use clip::{ClipAlgorithm, ClipWindow};
pub use pixel_store::{Pixel, PixelStore, PIXEL_SIZE};
pub use selection_manager::{SelectionManager, SelectionRect};
pub use transform::ReflectionAxis;

pub use paintkit_core::{Color, EngineError, Point, Rect, Result, Size};
