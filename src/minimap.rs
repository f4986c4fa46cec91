//! Minimap geometry derived from the canvas size.
//!
//! Two concentric squares anchor all minimap inference: `normal` is the
//! background square the host actually draws (matched by the classifier),
//! `extended` is a strictly larger hit-region used as the classification
//! tolerance and as the reference frame for normalized minimap coordinates.
//! Both are recomputed from the canvas size whenever the canvas resizes.

#[cfg(test)]
#[path = "minimap_test.rs"]
mod minimap_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::consts::{
    MINIMAP_EXTENDED_SIDE, MINIMAP_NORMAL_OFFSET, MINIMAP_NORMAL_SIDE, MINIMAP_WORLD_END,
    MINIMAP_WORLD_START,
};

/// An axis-aligned square, positioned by its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Square {
    pub x: f64,
    pub y: f64,
    pub side: f64,
}

impl Square {
    /// Whether `p` lies inside the square (inclusive on all edges).
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.y >= self.y && p.x <= self.x + self.side && p.y <= self.y + self.side
    }
}

impl Default for Square {
    fn default() -> Self {
        Self { x: f64::NAN, y: f64::NAN, side: f64::NAN }
    }
}

/// Minimap geometry and the world extent it represents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Minimap {
    /// The background square the host draws.
    pub normal: Square,
    /// The larger hit-region; reference frame for normalized coordinates.
    pub extended: Square,
    /// Fraction of the world extent where minimap coverage begins (x).
    pub start_x: f64,
    /// Fraction of the world extent where minimap coverage begins (y).
    pub start_y: f64,
    /// Fraction of the world extent where minimap coverage ends (x).
    pub end_x: f64,
    /// Fraction of the world extent where minimap coverage ends (y).
    pub end_y: f64,
}

impl Default for Minimap {
    fn default() -> Self {
        Self {
            normal: Square::default(),
            extended: Square::default(),
            start_x: MINIMAP_WORLD_START,
            start_y: MINIMAP_WORLD_START,
            end_x: MINIMAP_WORLD_END,
            end_y: MINIMAP_WORLD_END,
        }
    }
}

impl Minimap {
    /// Recompute both squares from the canvas size and UI ratio.
    ///
    /// The host anchors the minimap to the bottom-right corner, so both
    /// squares are positioned by subtracting a fixed fraction of `ratio`
    /// from the canvas extent. Side lengths scale linearly with `ratio`.
    pub fn layout(&mut self, width: f64, height: f64, ratio: f64) {
        self.normal.x = width - ratio * MINIMAP_NORMAL_OFFSET;
        self.normal.y = height - ratio * MINIMAP_NORMAL_OFFSET;
        self.normal.side = ratio * MINIMAP_NORMAL_SIDE;

        self.extended.x = width - ratio * MINIMAP_EXTENDED_SIDE;
        self.extended.y = height - ratio * MINIMAP_EXTENDED_SIDE;
        self.extended.side = ratio * MINIMAP_EXTENDED_SIDE;
    }

    /// Whether a canvas-absolute point falls inside the extended hit-region.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        self.extended.contains(p)
    }
}
