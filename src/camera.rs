//! Coordinate transforms between world, screen, and minimap space.
//!
//! All transforms are pure functions of the live camera, canvas size, UI
//! scale, and minimap geometry, bundled into a [`Projection`] value. They
//! are meaningless until the classifier has identified the minimap at least
//! once: before that, `map_size` and `camera.fov` still hold their initial
//! NaN values and every conversion propagates NaN rather than erroring.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::consts::PROJECTION_FACTOR;
use crate::minimap::Square;

/// A point in world, screen, or normalized-minimap space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Inferred camera state.
///
/// `x`/`y` are normalized minimap-relative coordinates, `raw_x`/`raw_y` the
/// pixel anchor on the canvas, `fov` the zoom level derived from the grid
/// stroke. All fields start as NaN and are only valid after the minimap
/// viewport indicator has been classified at least once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub x: f64,
    pub y: f64,
    pub raw_x: f64,
    pub raw_y: f64,
    pub fov: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { x: f64::NAN, y: f64::NAN, raw_x: f64::NAN, raw_y: f64::NAN, fov: f64::NAN }
    }
}

/// A snapshot of everything the coordinate transforms depend on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub camera: Camera,
    /// Pixels per world unit at fov 1.0, derived from the minimap size.
    pub map_size: f64,
    /// Pixel-density-normalized UI scale.
    pub scale: f64,
    /// Canvas width in device pixels.
    pub width: f64,
    /// Canvas height in device pixels.
    pub height: f64,
    /// The extended minimap square.
    pub minimap: Square,
}

impl Projection {
    /// Pixels per world unit at the current zoom.
    fn pixels_per_unit(&self) -> f64 {
        self.map_size * self.scale * self.camera.fov * PROJECTION_FACTOR
    }

    /// Convert a screen-pixel point to world coordinates.
    #[must_use]
    pub fn to_map(&self, p: Point) -> Point {
        let k = self.pixels_per_unit();
        Point {
            x: self.camera.x + (p.x - self.width / 2.0) / k,
            y: self.camera.y + (p.y - self.height / 2.0) / k,
        }
    }

    /// Convert a world point to screen-pixel coordinates.
    #[must_use]
    pub fn to_screen(&self, p: Point) -> Point {
        let k = self.pixels_per_unit();
        Point {
            x: (p.x - self.camera.x) * k + self.width / 2.0,
            y: (p.y - self.camera.y) * k + self.height / 2.0,
        }
    }

    /// Convert a normalized minimap coordinate to screen pixels.
    #[must_use]
    pub fn to_minimap(&self, p: Point) -> Point {
        Point {
            x: self.minimap.x + p.x * self.minimap.side,
            y: self.minimap.y + p.y * self.minimap.side,
        }
    }
}
