//! The drawing surface's command facade.
//!
//! `Canvas` is what the presentation layer talks to: it owns the pixel
//! store, the selection manager, the current drawing and clip modes, and
//! the brush color, and exposes one method per command. Window chrome,
//! input routing, and rendering live outside.

mod operations;
mod types;

pub use types::{ClipMode, DrawingMode, LineAlgorithm};

use paintkit_core::color::Color;
use paintkit_core::geometry::Point;
use tracing::debug;

use crate::clip;
use crate::pixel_store::{Pixel, PixelStore};
use crate::raster;
use crate::selection_manager::SelectionManager;

/// Canvas state managing pixels, selection, and drawing operations.
#[derive(Debug, Clone)]
pub struct Canvas {
    pub pixel_store: PixelStore,
    pub selection: SelectionManager,
    mode: DrawingMode,
    clip_mode: ClipMode,
    brush_color: Color,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Creates an empty canvas in DDA line mode with a black brush.
    pub fn new() -> Self {
        Self {
            pixel_store: PixelStore::new(),
            selection: SelectionManager::new(),
            mode: DrawingMode::LineDda,
            clip_mode: ClipMode::NoClip,
            brush_color: Color::BLACK,
        }
    }

    /// Sets the drawing mode.
    pub fn set_mode(&mut self, mode: DrawingMode) {
        self.mode = mode;
    }

    /// Gets the current drawing mode.
    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    /// Sets the clip mode applied to subsequent line draws.
    pub fn set_clip_mode(&mut self, clip_mode: ClipMode) {
        self.clip_mode = clip_mode;
    }

    /// Gets the current clip mode.
    pub fn clip_mode(&self) -> ClipMode {
        self.clip_mode
    }

    /// Sets the brush color used for subsequent draws.
    pub fn set_color(&mut self, color: Color) {
        self.brush_color = color;
    }

    /// Gets the current brush color.
    pub fn brush_color(&self) -> Color {
        self.brush_color
    }

    /// Number of pixels currently placed.
    pub fn pixel_count(&self) -> usize {
        self.pixel_store.len()
    }

    /// Iterates over the placed pixels in placement order, for rendering.
    pub fn pixels(&self) -> impl Iterator<Item = &Pixel> {
        self.pixel_store.iter()
    }

    /// Dispatches a two-point command according to the current drawing
    /// mode. This is the click-release entry point; `Move` and `FreeDraw`
    /// are drag-driven and place nothing here.
    pub fn draw(&mut self, p1: Point, p2: Point) {
        match self.mode {
            DrawingMode::LineDda => {
                self.draw_line(LineAlgorithm::Dda, p1, p2);
            }
            DrawingMode::LineBresenham => {
                self.draw_line(LineAlgorithm::Bresenham, p1, p2);
            }
            DrawingMode::Circle => {
                self.draw_circle(p1, p2);
            }
            DrawingMode::Rectangle => {
                self.draw_rectangle(p1, p2);
            }
            DrawingMode::Select => self.select(p1, p2),
            DrawingMode::Move | DrawingMode::FreeDraw => {}
        }
    }

    /// Rasterizes a line segment and places its pixels. While a clip mode
    /// is active and a selection rectangle exists, the segment first passes
    /// through the clipper; a rejected segment places nothing. Returns the
    /// number of pixels placed.
    pub fn draw_line(&mut self, algorithm: LineAlgorithm, p1: Point, p2: Point) -> usize {
        let Some((p1, p2)) = self.clip_draw_segment(p1, p2) else {
            debug!("segment rejected by active clip window");
            return 0;
        };

        let points = match algorithm {
            LineAlgorithm::Dda => raster::line_dda(p1, p2),
            LineAlgorithm::Bresenham => raster::line_bresenham(p1, p2),
        };
        self.place_pixels(&points)
    }

    /// Rasterizes a circle centered on `center` with radius
    /// floor(distance(center, rim)). Returns the number of pixels placed.
    pub fn draw_circle(&mut self, center: Point, rim: Point) -> usize {
        let radius = center.distance_to(&rim).floor() as i64;
        let points = raster::circle_bresenham(center, radius);
        self.place_pixels(&points)
    }

    /// Rasterizes the four sides of the rectangle spanned by two corner
    /// points. Returns the number of pixels placed.
    pub fn draw_rectangle(&mut self, p1: Point, p2: Point) -> usize {
        let points = raster::rectangle_outline(p1, p2);
        self.place_pixels(&points)
    }

    /// Places a free-hand stroke segment: one DDA line from the previous
    /// pointer position to the current one.
    pub fn free_draw_segment(&mut self, from: Point, to: Point) -> usize {
        let points = raster::line_dda(from, to);
        self.place_pixels(&points)
    }

    fn place_pixels(&mut self, points: &[Point]) -> usize {
        for &point in points {
            self.pixel_store.insert(point, self.brush_color);
        }
        debug!(placed = points.len(), "rasterized primitive");
        points.len()
    }

    fn clip_draw_segment(&self, p1: Point, p2: Point) -> Option<(Point, Point)> {
        let Some(algorithm) = self.clip_mode.algorithm() else {
            return Some((p1, p2));
        };
        let Some(rect) = self.selection.rect() else {
            return Some((p1, p2));
        };
        clip::clip_segment(algorithm, p1, p2, &rect.clip_window())
    }
}
