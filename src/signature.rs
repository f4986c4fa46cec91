//! Pluggable shape signatures.
//!
//! Every classification heuristic is coupled to incidental details of the
//! host's renderer: exact color constants, opacity values, the name of its
//! main loop. Those details change without notice, so they live behind the
//! [`Signatures`] trait and in [`SignatureConfig`] where they can be
//! recalibrated (or swapped out entirely in tests) without touching the
//! classifier's control flow.

#[cfg(test)]
#[path = "signature_test.rs"]
mod signature_test;

use crate::calls::{Paint, Rect};
use crate::camera::Point;
use crate::consts::{
    ALPHA_EPSILON, DEFAULT_BACKGROUND_COLOR, DEFAULT_GRID_COLOR, DEFAULT_GRID_OPACITY, FOV_FLOOR,
    FRAME_MARKER, RECT_EPSILON, VIEWPORT_ALPHA, VIEWPORT_FILL,
};
use crate::minimap::Square;

/// Recalibratable constants behind the default signature matcher.
#[derive(Debug, Clone, PartialEq)]
pub struct SignatureConfig {
    /// Fill color of the scene background and grid fill.
    pub background_color: String,
    /// Stroke color of the world grid.
    pub grid_color: String,
    /// Base opacity of the world grid; divisor when deriving fov.
    pub grid_opacity: f64,
    /// Fill color of the minimap viewport indicator.
    pub viewport_fill: String,
    /// Global alpha of the minimap viewport indicator.
    pub viewport_alpha: f64,
    /// Rectangle-match tolerance in pixels, before UI scaling.
    pub rect_epsilon: f64,
    /// Alpha-comparison tolerance.
    pub alpha_epsilon: f64,
    /// Minimum plausible fov for background isolation.
    pub fov_floor: f64,
    /// Substring identifying the host's frame callback.
    pub frame_marker: String,
}

impl Default for SignatureConfig {
    fn default() -> Self {
        Self {
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            grid_color: DEFAULT_GRID_COLOR.to_string(),
            grid_opacity: DEFAULT_GRID_OPACITY,
            viewport_fill: VIEWPORT_FILL.to_string(),
            viewport_alpha: VIEWPORT_ALPHA,
            rect_epsilon: RECT_EPSILON,
            alpha_epsilon: ALPHA_EPSILON,
            fov_floor: FOV_FLOOR,
            frame_marker: FRAME_MARKER.to_string(),
        }
    }
}

/// Recognizers for the host's drawing signatures.
///
/// Implementations decide *what* a call looks like; the classifier decides
/// what to do about it.
pub trait Signatures {
    /// The constants this matcher was calibrated with.
    fn config(&self) -> &SignatureConfig;

    /// Does this stroke's paint match the world grid?
    fn is_grid_stroke(&self, paint: &Paint) -> bool;

    /// Does this canvas-absolute rectangle match the minimap background
    /// square within tolerance?
    fn is_minimap_chrome(&self, rect: Rect, normal: Square, ui_scale: f64) -> bool;

    /// Does this fill look like the minimap viewport indicator centered at
    /// `center`?
    fn is_viewport_marker(&self, paint: &Paint, center: Point, extended: Square) -> bool;

    /// Is this scheduling callback the host's main loop?
    fn is_frame_callback(&self, label: &str) -> bool;
}

/// The default matcher, calibrated against the current host renderer.
#[derive(Debug, Clone, Default)]
pub struct HostSignatures {
    config: SignatureConfig,
}

impl HostSignatures {
    #[must_use]
    pub fn new(config: SignatureConfig) -> Self {
        Self { config }
    }
}

impl Signatures for HostSignatures {
    fn config(&self) -> &SignatureConfig {
        &self.config
    }

    fn is_grid_stroke(&self, paint: &Paint) -> bool {
        paint.fill_style == self.config.background_color
            && paint.stroke_style == self.config.grid_color
    }

    fn is_minimap_chrome(&self, rect: Rect, normal: Square, ui_scale: f64) -> bool {
        let tol = self.config.rect_epsilon * ui_scale;
        (rect.x - normal.x).abs() < tol
            && (rect.y - normal.y).abs() < tol
            && (rect.w - normal.side).abs() < tol
            && (rect.h - normal.side).abs() < tol
    }

    fn is_viewport_marker(&self, paint: &Paint, center: Point, extended: Square) -> bool {
        paint.fill_style == self.config.viewport_fill
            && (paint.global_alpha - self.config.viewport_alpha).abs() < self.config.alpha_epsilon
            && extended.contains(center)
    }

    fn is_frame_callback(&self, label: &str) -> bool {
        label.contains(&self.config.frame_marker)
    }
}
