//! Inferred engine state.
//!
//! One explicitly owned [`EngineState`] value holds everything the
//! classifier writes and everyone else reads: per-frame flags, the active
//! transform, the path-vertex ring, and the camera / player / mouse
//! estimates. Interception hooks receive it by reference; there are no
//! ambient globals. Readers must tolerate transiently stale values between
//! frames — a frame that fails to classify leaves the prior estimates in
//! place.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use serde::{Deserialize, Serialize};

use crate::calls::Transform;
use crate::camera::{Camera, Point, Projection};
use crate::consts::{BASE_HEIGHT, BASE_WIDTH, VERTEX_RING};
use crate::minimap::Minimap;

/// Per-frame classification flags. Reset exactly once per frame boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameFlags {
    /// Count of background-pattern candidates seen this frame.
    pub drew_bg: u8,
    /// The world grid stroke was classified this frame.
    pub drew_grid: bool,
    /// The player marker was classified this frame.
    pub drew_player: bool,
    /// The minimap background square was classified this frame.
    pub drew_minimap: bool,
}

impl FrameFlags {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Inferred player position: normalized minimap-relative and raw pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub x: f64,
    pub y: f64,
    pub raw_x: f64,
    pub raw_y: f64,
}

impl Default for Player {
    fn default() -> Self {
        Self { x: f64::NAN, y: f64::NAN, raw_x: f64::NAN, raw_y: f64::NAN }
    }
}

/// Tracked mouse position: world coordinates and raw device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MouseState {
    pub x: f64,
    pub y: f64,
    pub raw_x: f64,
    pub raw_y: f64,
}

impl Default for MouseState {
    fn default() -> Self {
        Self { x: f64::NAN, y: f64::NAN, raw_x: 0.0, raw_y: 0.0 }
    }
}

/// All mutable inferred state, owned by the engine and threaded through the
/// classifier by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineState {
    pub flags: FrameFlags,
    /// Classification is suspended while a consumer draws manually.
    pub drawing_unsafe: bool,
    /// The player marker was classified in the previous frame.
    pub is_in_game: bool,

    /// Affine offset/scale last set by the host.
    pub transform: Transform,
    /// Canvas-absolute coordinate of the most recent path point.
    pub pivot: Point,
    /// Index of the last vertex written into `positions` by `LineTo`.
    pub pos_phase: usize,
    /// Bounded ring of recorded path vertices, reset on `MoveTo`.
    pub positions: [Point; VERTEX_RING],

    pub camera: Camera,
    pub player: Player,
    pub mouse: MouseState,
    pub minimap: Minimap,

    /// Canvas width in device pixels.
    pub width: f64,
    /// Canvas height in device pixels.
    pub height: f64,
    /// Device pixel ratio reported by the host.
    pub dpr: f64,
    /// UI ratio: the dominant canvas dimension scaled by `ui_scaling`.
    pub ratio: f64,
    /// Canvas scale relative to the host's reference resolution.
    pub scale: f64,
    /// `scale` multiplied by the host's UI-scaling setting.
    pub ui_scale: f64,
    /// Host-controlled UI-scaling multiplier.
    pub ui_scaling: f64,
    /// Pixels per world unit at fov 1.0; derived from the minimap viewport.
    pub map_size: f64,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            flags: FrameFlags::default(),
            drawing_unsafe: false,
            is_in_game: false,
            transform: Transform::default(),
            pivot: Point::new(0.0, 0.0),
            pos_phase: 0,
            positions: [Point::new(f64::NAN, f64::NAN); VERTEX_RING],
            camera: Camera::default(),
            player: Player::default(),
            mouse: MouseState::default(),
            minimap: Minimap::default(),
            width: f64::NAN,
            height: f64::NAN,
            dpr: 1.0,
            ratio: f64::NAN,
            scale: f64::NAN,
            ui_scale: f64::NAN,
            ui_scaling: 1.0,
            map_size: f64::NAN,
        }
    }
}

impl EngineState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute ratio, scale, and minimap geometry from the canvas size.
    ///
    /// The host letterboxes against a 16:9 reference: whichever dimension
    /// dominates drives both the UI ratio and the scale factor.
    pub fn update_metrics(&mut self) {
        if self.height * 16.0 / 9.0 >= self.width {
            self.ratio = self.height * self.ui_scaling;
            self.scale = self.height / BASE_HEIGHT;
        } else {
            self.ratio = self.width / 16.0 * 9.0 * self.ui_scaling;
            self.scale = self.width / BASE_WIDTH;
        }
        self.ui_scale = self.scale * self.ui_scaling;
        let (w, h, ratio) = (self.width, self.height, self.ratio);
        self.minimap.layout(w, h, ratio);
    }

    /// Snapshot of everything the coordinate transforms depend on.
    #[must_use]
    pub fn projection(&self) -> Projection {
        Projection {
            camera: self.camera,
            map_size: self.map_size,
            scale: self.scale,
            width: self.width,
            height: self.height,
            minimap: self.minimap.extended,
        }
    }

    /// Re-derive the mouse's world position from its raw pixels.
    pub fn update_mouse(&mut self) {
        let p = self.projection().to_map(Point::new(self.mouse.raw_x, self.mouse.raw_y));
        self.mouse.x = p.x;
        self.mouse.y = p.y;
    }

    /// Re-derive `map_size` from the minimap viewport indicator's width.
    ///
    /// The viewport rectangle covers the on-screen world extent, so the
    /// ratio of minimap side to viewport width gives pixels per world unit.
    pub fn update_map(&mut self, viewport_w: f64) {
        self.map_size =
            self.width / self.camera.fov * self.minimap.normal.side / viewport_w / self.scale;
    }

    /// Record a `MoveTo`: reset the vertex ring and place the pivot.
    pub fn record_move_to(&mut self, x: f64, y: f64) {
        self.pivot = self.transform.apply(x, y);
        self.pos_phase = 0;
        self.positions[0] = self.pivot;
    }

    /// Record a `LineTo`: advance the ring, dropping vertices past its end.
    pub fn record_line_to(&mut self, x: f64, y: f64) {
        self.pivot = self.transform.apply(x, y);
        self.pos_phase += 1;
        if self.pos_phase < VERTEX_RING {
            self.positions[self.pos_phase] = self.pivot;
        }
    }
}
