//! Storage for placed pixels.
//!
//! The store exclusively owns every pixel on the canvas. Pixels are
//! addressed by a stable `u64` handle that survives bulk removals; ids are
//! never reused within a session, so a stale handle simply resolves to
//! `None` instead of dangling.

use paintkit_core::color::Color;
use paintkit_core::geometry::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Side length of the square footprint every placed pixel occupies on the
/// canvas.
pub const PIXEL_SIZE: f64 = 1.5;

/// A placed unit primitive: a position, a fixed footprint, and a color.
///
/// Identity is the id, not the coordinate; coincident pixels of different
/// colors are distinct entities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pixel {
    pub id: u64,
    /// Top-left corner of the footprint, in floating canvas coordinates.
    pub position: Point,
    pub color: Color,
    pub selected: bool,
}

impl Pixel {
    /// Center of the pixel's square footprint.
    pub fn footprint_center(&self) -> Point {
        Point::new(
            self.position.x + PIXEL_SIZE / 2.0,
            self.position.y + PIXEL_SIZE / 2.0,
        )
    }
}

/// The live pixel collection. Growth is unbounded for the session's
/// lifetime.
#[derive(Debug, Clone, Default)]
pub struct PixelStore {
    // Kept sorted by id (inserts append monotonically increasing ids and
    // removals preserve order), which makes handle lookup a binary search.
    pixels: Vec<Pixel>,
    next_id: u64,
}

impl PixelStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a new pixel and returns its handle.
    pub fn insert(&mut self, position: Point, color: Color) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.pixels.push(Pixel {
            id,
            position,
            color,
            selected: false,
        });
        id
    }

    /// Looks up a pixel by handle.
    pub fn get(&self, id: u64) -> Option<&Pixel> {
        self.pixels
            .binary_search_by_key(&id, |p| p.id)
            .ok()
            .map(|index| &self.pixels[index])
    }

    /// Looks up a pixel by handle, mutably.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut Pixel> {
        match self.pixels.binary_search_by_key(&id, |p| p.id) {
            Ok(index) => Some(&mut self.pixels[index]),
            Err(_) => None,
        }
    }

    /// Removes every pixel whose id is in `ids`. Returns how many were
    /// removed.
    pub fn remove_many(&mut self, ids: &[u64]) -> usize {
        if ids.is_empty() {
            return 0;
        }
        let doomed: HashSet<u64> = ids.iter().copied().collect();
        let before = self.pixels.len();
        self.pixels.retain(|pixel| !doomed.contains(&pixel.id));
        before - self.pixels.len()
    }

    /// Iterates over all pixels in placement order.
    pub fn iter(&self) -> impl Iterator<Item = &Pixel> {
        self.pixels.iter()
    }

    /// Iterates over all pixels mutably, in placement order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Pixel> {
        self.pixels.iter_mut()
    }

    /// Number of pixels currently placed.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Whether the store holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Discards every pixel. Handles already given out will no longer
    /// resolve; ids keep counting up.
    pub fn clear(&mut self) {
        self.pixels.clear();
    }
}
