//! Selection and transform operations for Canvas.

use paintkit_core::error::Result;
use paintkit_core::geometry::Point;
use tracing::debug;

use super::Canvas;
use crate::clip::ClipAlgorithm;
use crate::selection_manager::SelectionRect;
use crate::transform::ReflectionAxis;

impl Canvas {
    /// Replaces the active selection with every pixel inside the closed
    /// bounding box of the two corner points.
    pub fn select(&mut self, p1: Point, p2: Point) {
        self.selection.select_rect(&mut self.pixel_store, p1, p2);
    }

    /// Removes every stored pixel ruled outside the selection rectangle by
    /// the chosen algorithm, then clears the selection. Returns the number
    /// of pixels removed.
    pub fn clip_selection(&mut self, algorithm: ClipAlgorithm) -> usize {
        self.selection.clip(&mut self.pixel_store, algorithm)
    }

    /// Mirrors the selection about its center and commits the mirrored
    /// layout as the new baseline.
    pub fn reflect(&mut self, axis: ReflectionAxis) {
        self.selection.reflect(&mut self.pixel_store, axis);
    }

    /// Sets the selection's scale factors and recomputes its layout.
    /// Factors must be strictly positive.
    pub fn set_scale(&mut self, sx: f64, sy: f64) -> Result<()> {
        self.selection.set_scale(&mut self.pixel_store, sx, sy)
    }

    /// Sets the selection's rotation angle (degrees) and recomputes its
    /// layout.
    pub fn set_rotation(&mut self, angle_degrees: f64) -> Result<()> {
        self.selection
            .set_rotation(&mut self.pixel_store, angle_degrees)
    }

    /// Translates the selection (pixels, rectangle, and center) by the
    /// delta.
    pub fn move_selection(&mut self, dx: f64, dy: f64) {
        self.selection.translate(&mut self.pixel_store, dx, dy);
    }

    /// The current selection rectangle, for outline rendering.
    pub fn selection_rect(&self) -> Option<SelectionRect> {
        self.selection.rect()
    }

    /// The selection center, for crosshair or handle rendering.
    pub fn selection_center(&self) -> Point {
        self.selection.center()
    }

    /// Empties the store and drops the selection and its rectangle.
    pub fn clear(&mut self) {
        let discarded = self.pixel_store.len();
        self.pixel_store.clear();
        self.selection.clear(&mut self.pixel_store);
        debug!(discarded, "canvas cleared");
    }
}
