//! The observed drawing-call model.
//!
//! The host's interception layer forwards every primitive drawing call as a
//! [`DrawOp`] plus the paint attributes ([`Paint`]) active on the context at
//! call time. This is the entire input surface of the classifier: tests can
//! drive the engine with synthetic sequences of these values and no real
//! rendering surface.

#[cfg(test)]
#[path = "calls_test.rs"]
mod calls_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;

/// A primitive drawing call observed on the host's rendering context.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// The affine transform was replaced. `a`/`d` scale, `e`/`f` translate;
    /// the skew terms are recorded but never used by the host.
    SetTransform { a: f64, b: f64, c: f64, d: f64, e: f64, f: f64 },
    /// A new path was started at a local coordinate.
    MoveTo { x: f64, y: f64 },
    /// The current path was extended to a local coordinate.
    LineTo { x: f64, y: f64 },
    /// The current path was stroked.
    Stroke,
    /// The current path was filled.
    Fill,
    /// An axis-aligned rectangle was filled.
    FillRect(Rect),
    /// A tiled pattern was created; the host only does this for the scene
    /// background.
    CreatePattern,
}

/// Paint attributes active on the context when a call was issued.
#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    /// CSS color string of the current fill style.
    pub fill_style: String,
    /// CSS color string of the current stroke style.
    pub stroke_style: String,
    /// Global alpha in `[0, 1]`.
    pub global_alpha: f64,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            fill_style: "#000000".to_string(),
            stroke_style: "#000000".to_string(),
            global_alpha: 1.0,
        }
    }
}

/// An axis-aligned rectangle in local (pre-transform) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Center point of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}

/// The active affine offset/scale last set by the host.
///
/// The host translates path points by the offset only; the scale terms apply
/// to rectangle extents. Mirroring that, [`Transform::apply`] offsets without
/// scaling while [`Transform::apply_rect`] does both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, w: 1.0, h: 1.0 }
    }
}

impl Transform {
    /// Convert a local path coordinate into a canvas-absolute pivot.
    #[must_use]
    pub fn apply(&self, x: f64, y: f64) -> Point {
        Point::new(x + self.x, y + self.y)
    }

    /// Convert a local rectangle into canvas-absolute position and extent.
    #[must_use]
    pub fn apply_rect(&self, r: Rect) -> Rect {
        Rect { x: r.x + self.x, y: r.y + self.y, w: r.w * self.w, h: r.h * self.h }
    }
}
