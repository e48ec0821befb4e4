//! Selection state and selection operations.
//!
//! `SelectionManager` owns everything the transform engine reasons about:
//! which pixels are selected, the selection rectangle affordance, the
//! selection center (the pivot for every transform), and the
//! original-position baseline each recomputation is derived from.
//!
//! # Baseline rules
//!
//! Scale and rotation are always re-derived from the same baseline, so a
//! slider dragged back to its neutral value restores the exact original
//! layout instead of accumulating drift. Reflection is the one operation
//! that commits a new baseline: a second identical reflection is a true
//! toggle back. Moving the selection advances the center but deliberately
//! leaves the baseline alone.
//!
//! # Invariant
//!
//! Every key in the baseline map is a currently selected pixel; membership
//! and baseline are cleared and rebuilt together.

use std::collections::HashMap;

use paintkit_core::error::{EngineError, Result};
use paintkit_core::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clip::{self, ClipAlgorithm, ClipWindow};
use crate::pixel_store::{PixelStore, PIXEL_SIZE};
use crate::transform::{self, ReflectionAxis};

/// The selection rectangle affordance: position, size, and a display-only
/// rotation angle. One instance lives at a time; each new rectangular query
/// replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Rotation of the visual outline, in degrees. Applied only for
    /// display; the rectangle's bounds stay axis-aligned for clipping and
    /// membership tests.
    pub rotation: f64,
}

impl SelectionRect {
    fn from_rect(rect: Rect) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            rotation: 0.0,
        }
    }

    /// Geometric center of the unrotated outline.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Clip window spanning the rectangle's bounds.
    pub fn clip_window(&self) -> ClipWindow {
        ClipWindow::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Pivot of the display rotation, expressed relative to the
    /// rectangle's own top-left corner.
    pub fn rotation_pivot(&self, center: Point) -> Point {
        Point::new(center.x - self.x, center.y - self.y)
    }
}

/// Manages the active selection, its pivot, and its baseline.
#[derive(Debug, Clone)]
pub struct SelectionManager {
    rect: Option<SelectionRect>,
    center: Point,
    original_positions: HashMap<u64, Point>,
    /// Rectangle size captured at selection time; scaling resizes the
    /// outline from this fixed baseline.
    original_size: Size,
    scale_x: f64,
    scale_y: f64,
    rotation: f64,
}

impl Default for SelectionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionManager {
    /// Creates a manager with no selection.
    pub fn new() -> Self {
        Self {
            rect: None,
            center: Point::default(),
            original_positions: HashMap::new(),
            original_size: Size::default(),
            scale_x: 1.0,
            scale_y: 1.0,
            rotation: 0.0,
        }
    }

    /// The current selection rectangle, if one exists.
    pub fn rect(&self) -> Option<SelectionRect> {
        self.rect
    }

    /// The selection center: the pivot for scale, rotation, and
    /// reflection.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Number of currently selected pixels.
    pub fn selected_count(&self) -> usize {
        self.original_positions.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.original_positions.is_empty()
    }

    /// The recorded baseline position for a selected pixel.
    pub fn original_position(&self, id: u64) -> Option<Point> {
        self.original_positions.get(&id).copied()
    }

    /// Current scale parameters (sx, sy).
    pub fn scale(&self) -> (f64, f64) {
        (self.scale_x, self.scale_y)
    }

    /// Current rotation angle in degrees.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Replaces the active selection with every pixel whose position lies
    /// inside the closed bounding box of the two corner points.
    ///
    /// The membership test is on the pixel's position only, not its
    /// footprint, and is inclusive on all four boundaries. Rotation and
    /// scale parameters reset; each selected pixel's current position
    /// becomes its baseline.
    pub fn select_rect(&mut self, store: &mut PixelStore, p1: Point, p2: Point) {
        self.clear(store);

        let bounds = Rect::from_corners(p1, p2);
        self.rect = Some(SelectionRect::from_rect(bounds));
        self.center = bounds.center();
        self.original_size = Size::new(bounds.width, bounds.height);

        for pixel in store.iter_mut() {
            if bounds.contains_point(&pixel.position) {
                pixel.selected = true;
                self.original_positions.insert(pixel.id, pixel.position);
            }
        }

        debug!(
            selected = self.original_positions.len(),
            total = store.len(),
            "rectangle selection"
        );
    }

    /// Clears the selection: deselects every pixel, drops the rectangle,
    /// empties the baseline, and resets the transform parameters.
    pub fn clear(&mut self, store: &mut PixelStore) {
        for pixel in store.iter_mut() {
            pixel.selected = false;
        }
        self.rect = None;
        self.center = Point::default();
        self.original_positions.clear();
        self.original_size = Size::default();
        self.scale_x = 1.0;
        self.scale_y = 1.0;
        self.rotation = 0.0;
    }

    /// Clips the whole store against the selection rectangle.
    ///
    /// Every stored pixel (selected or not) contributes the degenerate
    /// segment from its position to position + footprint; pixels whose
    /// segment the algorithm rejects are removed. The candidate set is
    /// computed in full before any removal. Clipping is terminal: the
    /// selection and its rectangle are cleared afterwards. Returns the
    /// number of pixels removed; a no-op when the store is empty or no
    /// rectangle exists.
    pub fn clip(&mut self, store: &mut PixelStore, algorithm: ClipAlgorithm) -> usize {
        if store.is_empty() {
            return 0;
        }
        let Some(rect) = self.rect else {
            return 0;
        };
        let window = rect.clip_window();

        let doomed: Vec<u64> = store
            .iter()
            .filter(|pixel| {
                let p1 = pixel.position;
                let p2 = Point::new(p1.x + PIXEL_SIZE, p1.y + PIXEL_SIZE);
                clip::clip_segment(algorithm, p1, p2, &window).is_none()
            })
            .map(|pixel| pixel.id)
            .collect();

        let removed = store.remove_many(&doomed);
        debug!(removed, ?algorithm, "clipped store against selection window");

        self.clear(store);
        removed
    }

    /// Mirrors the selection about its center on the given axis.
    ///
    /// The baseline is first re-snapshotted from the current positions, so
    /// the mirror applies to the on-canvas layout rather than a stale
    /// pre-scale one. The mirrored positions are committed as the new
    /// baseline, making a second identical reflection a true toggle back.
    /// Pending scale parameters reset to identity so a stale scale is
    /// never reapplied against the fresh baseline.
    pub fn reflect(&mut self, store: &mut PixelStore, axis: ReflectionAxis) {
        if self.original_positions.is_empty() || self.rect.is_none() {
            return;
        }

        self.rebase_baseline(store);

        let center = self.center;
        for (id, original) in self.original_positions.iter_mut() {
            let reflected = transform::reflect_position(*original, center, axis);
            if let Some(pixel) = store.get_mut(*id) {
                pixel.position = reflected;
            }
            *original = reflected;
        }

        self.scale_x = 1.0;
        self.scale_y = 1.0;

        debug!(?axis, count = self.original_positions.len(), "reflected selection");
    }

    /// Sets the scale parameters and recomputes the selection layout.
    ///
    /// Factors must be strictly positive and finite; anything else is a
    /// caller contract violation and is rejected. With no active selection
    /// the parameters are stored but nothing moves.
    pub fn set_scale(&mut self, store: &mut PixelStore, sx: f64, sy: f64) -> Result<()> {
        if !sx.is_finite() || !sy.is_finite() {
            let value = if sx.is_finite() { sy } else { sx };
            return Err(EngineError::NonFiniteParameter { value });
        }
        if sx <= 0.0 || sy <= 0.0 {
            return Err(EngineError::InvalidScaleFactor { sx, sy });
        }

        self.scale_x = sx;
        self.scale_y = sy;
        self.apply_layout(store);
        Ok(())
    }

    /// Sets the rotation angle (degrees) and recomputes the selection
    /// layout.
    pub fn set_rotation(&mut self, store: &mut PixelStore, angle_degrees: f64) -> Result<()> {
        if !angle_degrees.is_finite() {
            return Err(EngineError::NonFiniteParameter {
                value: angle_degrees,
            });
        }

        self.rotation = angle_degrees;
        self.apply_layout(store);
        Ok(())
    }

    /// Translates the selection: every selected pixel, the rectangle, and
    /// the center move by the delta. The baseline is deliberately not
    /// rebased; see the module docs.
    pub fn translate(&mut self, store: &mut PixelStore, dx: f64, dy: f64) {
        if self.original_positions.is_empty() {
            return;
        }

        for pixel in store.iter_mut().filter(|p| p.selected) {
            pixel.position = pixel.position.offset(dx, dy);
        }
        if let Some(rect) = self.rect.as_mut() {
            rect.x += dx;
            rect.y += dy;
        }
        self.center = self.center.offset(dx, dy);
    }

    /// The combined scale-then-rotate recomputation, re-derived from the
    /// baseline on every invocation so repeated parameter changes are
    /// idempotent rather than cumulative.
    fn apply_layout(&mut self, store: &mut PixelStore) {
        if self.original_positions.is_empty() {
            return;
        }
        let Some(rect) = self.rect.as_mut() else {
            return;
        };

        let half = PIXEL_SIZE / 2.0;
        for (&id, original) in self.original_positions.iter() {
            let Some(pixel) = store.get_mut(id) else {
                continue;
            };
            // Scale the footprint center's offset from the pivot, rotate
            // the result, and place the pixel so its footprint center
            // lands there.
            let footprint_center = Point::new(original.x + half, original.y + half);
            let placed = transform::scale_then_rotate(
                footprint_center,
                self.center,
                self.scale_x,
                self.scale_y,
                self.rotation,
            );
            pixel.position = Point::new(placed.x - half, placed.y - half);
        }

        // Resize the outline about the pivot from its captured size and
        // re-aim its display rotation.
        let new_width = self.original_size.width * self.scale_x;
        let new_height = self.original_size.height * self.scale_y;
        rect.x = self.center.x - new_width / 2.0;
        rect.y = self.center.y - new_height / 2.0;
        rect.width = new_width;
        rect.height = new_height;
        rect.rotation = self.rotation;
    }

    /// Re-snapshots the baseline from the pixels' current positions.
    fn rebase_baseline(&mut self, store: &PixelStore) {
        for (id, original) in self.original_positions.iter_mut() {
            if let Some(pixel) = store.get(*id) {
                *original = pixel.position;
            }
        }
    }
}
