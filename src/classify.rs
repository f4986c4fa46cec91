//! The drawing-call classifier.
//!
//! A state machine over the per-frame call sequence. Each observed call is
//! classified as background / grid / minimap-chrome / viewport-marker /
//! player-marker / none, updating the inferred state as a side effect and
//! returning an [`Outcome`] directive for the engine to act on (layer
//! isolation, overlay repaint). Classification is best-effort and strictly
//! order-dependent: grid before minimap, chrome before viewport, minimap
//! before player. A frame that violates the order is skipped, not an error.

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;

use crate::calls::{DrawOp, Paint, Rect};
use crate::camera::Point;
use crate::signature::Signatures;
use crate::state::EngineState;

/// What a single observed call turned out to be.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Nothing recognized; the call passes through unmodified.
    Passthrough,
    /// The second background fill of the frame; the engine should isolate
    /// the background layer.
    BackgroundIsolated,
    /// The world grid stroke; fov has been re-derived.
    Grid,
    /// The minimap background square.
    MinimapChrome,
    /// The minimap viewport indicator; camera and map scale have been
    /// re-derived. Carries the local-space rect for the overlay repaint.
    ViewportMarker { rect: Rect },
    /// A 3-vertex path filled over the minimap; player position updated.
    PlayerMarker,
}

/// Classifier over an injected signature matcher.
pub struct Classifier {
    signatures: Box<dyn Signatures>,
}

impl Classifier {
    #[must_use]
    pub fn new(signatures: Box<dyn Signatures>) -> Self {
        Self { signatures }
    }

    /// The signature matcher in use.
    #[must_use]
    pub fn signatures(&self) -> &dyn Signatures {
        self.signatures.as_ref()
    }

    /// Classify one observed call, updating inferred state in place.
    pub fn observe(&self, state: &mut EngineState, op: &DrawOp, paint: &Paint) -> Outcome {
        match *op {
            DrawOp::SetTransform { a, d, e, f, .. } => {
                state.transform.x = e;
                state.transform.y = f;
                state.transform.w = a;
                state.transform.h = d;
                Outcome::Passthrough
            }
            DrawOp::MoveTo { x, y } => {
                state.record_move_to(x, y);
                Outcome::Passthrough
            }
            DrawOp::LineTo { x, y } => {
                state.record_line_to(x, y);
                Outcome::Passthrough
            }
            DrawOp::CreatePattern => {
                if !state.drawing_unsafe {
                    state.flags.drew_bg = state.flags.drew_bg.saturating_add(1);
                }
                Outcome::Passthrough
            }
            DrawOp::Stroke => self.on_stroke(state, paint),
            DrawOp::Fill => Self::on_fill(state),
            DrawOp::FillRect(rect) => self.on_fill_rect(state, rect, paint),
        }
    }

    /// Grid detection: once per frame, on matching background/grid colors.
    /// The observed alpha is the configured grid opacity scaled by fov and
    /// canvas scale, so fov falls out of the ratio.
    fn on_stroke(&self, state: &mut EngineState, paint: &Paint) -> Outcome {
        if state.flags.drew_grid || state.drawing_unsafe {
            return Outcome::Passthrough;
        }
        if !self.signatures.is_grid_stroke(paint) {
            return Outcome::Passthrough;
        }
        state.flags.drew_grid = true;
        state.camera.fov =
            paint.global_alpha / self.signatures.config().grid_opacity / state.scale;
        Outcome::Grid
    }

    /// Player detection: a 3-vertex path filled after the minimap chrome.
    /// The centroid of the triangle is the player's raw pixel position.
    fn on_fill(state: &mut EngineState) -> Outcome {
        if state.drawing_unsafe || !state.flags.drew_minimap || state.flags.drew_player {
            return Outcome::Passthrough;
        }
        if state.pos_phase != 2 {
            return Outcome::Passthrough;
        }
        let [a, b, c] = [state.positions[0], state.positions[1], state.positions[2]];
        state.player.raw_x = (a.x + b.x + c.x) / 3.0;
        state.player.raw_y = (a.y + b.y + c.y) / 3.0;
        let ext = state.minimap.extended;
        state.player.x = (state.player.raw_x - ext.x) / ext.side;
        state.player.y = (state.player.raw_y - ext.y) / ext.side;
        state.flags.drew_player = true;
        Outcome::PlayerMarker
    }

    /// Rectangle fills carry three distinct signals: the second background
    /// fill (layer isolation), the minimap chrome, and the viewport
    /// indicator. At most one fires per call.
    fn on_fill_rect(&self, state: &mut EngineState, rect: Rect, paint: &Paint) -> Outcome {
        if state.drawing_unsafe {
            return Outcome::Passthrough;
        }
        if state.flags.drew_bg == 1 && state.camera.fov > self.signatures.config().fov_floor {
            state.flags.drew_bg = 2;
            return Outcome::BackgroundIsolated;
        }

        let placed = state.transform.apply_rect(rect);
        state.pivot = Point::new(placed.x, placed.y);

        if self.signatures.is_minimap_chrome(placed, state.minimap.normal, state.ui_scale) {
            state.flags.drew_minimap = true;
            return Outcome::MinimapChrome;
        }

        let center = placed.center();
        if state.flags.drew_minimap
            && self.signatures.is_viewport_marker(paint, center, state.minimap.extended)
        {
            state.camera.raw_x = center.x;
            state.camera.raw_y = center.y;
            let ext = state.minimap.extended;
            state.camera.x = (center.x - ext.x) / ext.side;
            state.camera.y = (center.y - ext.y) / ext.side;
            state.update_mouse();
            state.update_map(placed.w);
            return Outcome::ViewportMarker { rect };
        }

        Outcome::Passthrough
    }
}
