//! The top-level engine.
//!
//! [`Engine`] ties the classifier, compositor, event bus, and input gate
//! together behind the public surface consumers and extension scripts see.
//! The host drives it with four kinds of calls: `attach`/`set_viewport` for
//! surface lifecycle, [`Engine::observe`] for every intercepted drawing
//! call, [`Engine::frame_scheduled`] for the per-frame scheduling
//! primitive, and the pointer/key methods for input events. Everything a
//! consumer reads back is a copy, never a live reference into engine state.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use tracing::{debug, info};

use crate::bus::{EventBus, ListenerId, Payload, topics};
use crate::calls::{DrawOp, Paint, Rect};
use crate::camera::{Camera, Point};
use crate::classify::{Classifier, Outcome};
use crate::compositor::Compositor;
use crate::error::ApiError;
use crate::input::{Disposition, InputGate, KeyEvent, PointerEvent};
use crate::minimap::Minimap;
use crate::signature::{HostSignatures, Signatures};
use crate::state::{EngineState, FrameFlags, MouseState, Player};
use crate::surface::{RecordingSurface, Surface};

/// Settings for the synthetic viewport overlay painted over the matched
/// minimap viewport rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportOverlay {
    pub enabled: bool,
    pub color: String,
    pub opacity: f64,
}

impl Default for ViewportOverlay {
    fn default() -> Self {
        Self { enabled: false, color: "#000000".to_string(), opacity: 0.5 }
    }
}

/// The render-call interception and state-inference engine.
pub struct Engine<S: Surface = RecordingSurface> {
    state: EngineState,
    bus: EventBus,
    classifier: Classifier,
    compositor: Compositor<S>,
    gate: InputGate,
    overlay: ViewportOverlay,
    typing: bool,
    canvas_ready: bool,
    input_ready: bool,
    game_ready: bool,
}

impl Default for Engine<RecordingSurface> {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine<RecordingSurface> {
    /// Engine over recording surfaces and the default host signatures.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(Compositor::default(), Box::new(HostSignatures::default()))
    }
}

impl<S: Surface> Engine<S> {
    /// Engine over caller-supplied surfaces and signature matcher.
    #[must_use]
    pub fn with_parts(compositor: Compositor<S>, signatures: Box<dyn Signatures>) -> Self {
        Self {
            state: EngineState::new(),
            bus: EventBus::new(),
            classifier: Classifier::new(signatures),
            compositor,
            gate: InputGate::new(),
            overlay: ViewportOverlay::default(),
            typing: false,
            canvas_ready: false,
            input_ready: false,
            game_ready: false,
        }
    }

    // ── Surface lifecycle ───────────────────────────────────────

    /// Bind to the host's drawing surface once it exists. Sizes all three
    /// layers and emits `canvas`. The surfaces live for the whole session;
    /// a second attach is a caller bug.
    pub fn attach(&mut self, css_width: f64, css_height: f64, dpr: f64) -> Result<(), ApiError> {
        if self.canvas_ready {
            return Err(ApiError::AlreadyAttached);
        }
        self.apply_viewport(css_width, css_height, dpr);
        self.canvas_ready = true;
        info!(width = self.state.width, height = self.state.height, "canvas attached");
        self.bus.emit(topics::CANVAS, &Payload::None);
        Ok(())
    }

    /// Track the host viewport. Safe to call every frame: no-ops on
    /// unchanged dimensions, otherwise resizes all three layers, recomputes
    /// the minimap geometry, and emits `resize`.
    pub fn set_viewport(&mut self, css_width: f64, css_height: f64, dpr: f64) -> Result<(), ApiError> {
        if !self.canvas_ready {
            return Err(ApiError::NotAttached);
        }
        let width = (css_width * dpr).floor();
        let height = (css_height * dpr).floor();
        if (width - self.state.width).abs() < f64::EPSILON
            && (height - self.state.height).abs() < f64::EPSILON
        {
            self.state.update_metrics();
            return Ok(());
        }
        self.apply_viewport(css_width, css_height, dpr);
        debug!(width, height, "viewport resized");
        self.bus.emit(topics::RESIZE, &Payload::None);
        Ok(())
    }

    fn apply_viewport(&mut self, css_width: f64, css_height: f64, dpr: f64) {
        let width = (css_width * dpr).floor();
        let height = (css_height * dpr).floor();
        self.state.width = width;
        self.state.height = height;
        self.state.dpr = dpr;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        self.compositor.resize_all(width.max(0.0) as u32, height.max(0.0) as u32);
        self.state.update_metrics();
    }

    /// The host's input system became available; emits `input` once.
    pub fn mark_input_ready(&mut self) {
        if self.input_ready {
            return;
        }
        self.input_ready = true;
        self.bus.emit(topics::INPUT, &Payload::None);
    }

    /// The host finished booting; emits `ready` once.
    pub fn mark_game_ready(&mut self) {
        if self.game_ready {
            return;
        }
        self.game_ready = true;
        info!("host ready");
        self.bus.emit(topics::READY, &Payload::None);
    }

    // ── Frame pipeline ──────────────────────────────────────────

    /// Classify one intercepted drawing call and act on the outcome.
    ///
    /// Returns what the call was classified as; `Passthrough` when nothing
    /// was recognized, which is the steady state for most calls.
    pub fn observe(&mut self, op: &DrawOp, paint: &Paint) -> Outcome {
        if !self.canvas_ready {
            return Outcome::Passthrough;
        }
        let outcome = self.classifier.observe(&mut self.state, op, paint);
        match outcome {
            Outcome::BackgroundIsolated => self.compositor.isolate_background(),
            Outcome::ViewportMarker { rect } => self.composite_frame(rect),
            _ => {}
        }
        outcome
    }

    /// Layer re-stack around the viewport match: capture the minimap, let
    /// listeners draw over the restored background, then composite.
    fn composite_frame(&mut self, viewport_rect: Rect) {
        if self.overlay.enabled {
            let paint = Paint {
                fill_style: self.overlay.color.clone(),
                stroke_style: self.overlay.color.clone(),
                global_alpha: self.overlay.opacity,
            };
            let placed = self.state.transform.apply_rect(viewport_rect);
            self.compositor.primary.fill_rect(placed, &paint);
        }
        self.compositor.capture_minimap();
        self.bus.emit(topics::DRAW_BACKGROUND, &Payload::None);
        self.compositor.composite_minimap();
    }

    /// Observe the host's recurring frame-scheduling call.
    ///
    /// Only acts when the signature matcher recognizes `callback_label` as
    /// the host's main loop: derives spawn/death from whether the player
    /// marker was classified in the just-finished frame, resets the
    /// per-frame flags, and emits `draw`.
    pub fn frame_scheduled(&mut self, callback_label: &str) {
        if !self.classifier.signatures().is_frame_callback(callback_label) {
            return;
        }
        let was_in_game = self.state.is_in_game;
        self.state.is_in_game = self.state.flags.drew_player;
        if was_in_game && !self.state.is_in_game {
            debug!("player marker lost");
            self.bus.emit(topics::DEATH, &Payload::None);
        } else if !was_in_game && self.state.is_in_game {
            debug!("player marker acquired");
            self.bus.emit(topics::SPAWN, &Payload::None);
        }
        self.state.flags.reset();
        self.bus.emit(topics::DRAW, &Payload::None);
    }

    // ── Input gating ────────────────────────────────────────────

    /// Gate a pointer-move event. Raw mouse pixels update before gating so
    /// the tracked position stays live even while movement is suppressed.
    pub fn pointer_moved(&mut self, event: PointerEvent) -> Disposition {
        self.state.mouse.raw_x = event.x * self.state.dpr;
        self.state.mouse.raw_y = event.y * self.state.dpr;
        self.state.update_mouse();
        self.bus.emit(topics::PRE_MOUSE_MOVE, &Payload::Pointer(event));
        let disposition = self.gate.pass_movement();
        if !disposition.is_suppressed() {
            self.bus.emit(topics::MOUSE_MOVE, &Payload::Pointer(event));
        }
        disposition
    }

    /// Gate a mouse-button press.
    pub fn pointer_down(&mut self, event: PointerEvent) -> Disposition {
        self.bus.emit(topics::PRE_MOUSE_DOWN, &Payload::Pointer(event));
        let disposition = self.gate.pass_buttons();
        if !disposition.is_suppressed() {
            self.bus.emit(topics::MOUSE_DOWN, &Payload::Pointer(event));
        }
        disposition
    }

    /// Gate a mouse-button release.
    pub fn pointer_up(&mut self, event: PointerEvent) -> Disposition {
        self.bus.emit(topics::PRE_MOUSE_UP, &Payload::Pointer(event));
        let disposition = self.gate.pass_buttons();
        if !disposition.is_suppressed() {
            self.bus.emit(topics::MOUSE_UP, &Payload::Pointer(event));
        }
        disposition
    }

    /// Gate a key press.
    pub fn key_down(&mut self, event: KeyEvent) -> Disposition {
        self.bus.emit(topics::PRE_KEY_DOWN, &Payload::Key(event.clone()));
        let disposition = self.gate.pass_keys();
        if !disposition.is_suppressed() {
            self.bus.emit(topics::KEY_DOWN, &Payload::Key(event));
        }
        disposition
    }

    /// Gate a key release.
    pub fn key_up(&mut self, event: KeyEvent) -> Disposition {
        self.bus.emit(topics::PRE_KEY_UP, &Payload::Key(event.clone()));
        let disposition = self.gate.pass_keys();
        if !disposition.is_suppressed() {
            self.bus.emit(topics::KEY_UP, &Payload::Key(event));
        }
        disposition
    }

    // ── Unsafe drawing scope ────────────────────────────────────

    /// Suspend classification while a consumer draws manually.
    pub fn begin_path(&mut self) {
        self.state.drawing_unsafe = true;
    }

    /// Resume classification after manual drawing.
    pub fn close_path(&mut self) {
        self.state.drawing_unsafe = false;
    }

    // ── Coordinate conversions ──────────────────────────────────

    /// Screen pixels to world coordinates. NaN until the minimap has been
    /// classified at least once.
    #[must_use]
    pub fn to_map(&self, x: f64, y: f64) -> Point {
        self.state.projection().to_map(Point::new(x, y))
    }

    /// World coordinates to screen pixels.
    #[must_use]
    pub fn to_screen(&self, x: f64, y: f64) -> Point {
        self.state.projection().to_screen(Point::new(x, y))
    }

    /// Normalized minimap coordinates to screen pixels.
    #[must_use]
    pub fn to_minimap(&self, x: f64, y: f64) -> Point {
        self.state.projection().to_minimap(Point::new(x, y))
    }

    // ── Read-only state ─────────────────────────────────────────

    #[must_use]
    pub fn canvas_ready(&self) -> bool {
        self.canvas_ready
    }

    #[must_use]
    pub fn input_ready(&self) -> bool {
        self.input_ready
    }

    #[must_use]
    pub fn game_ready(&self) -> bool {
        self.game_ready
    }

    /// The player marker was classified in the most recent complete frame.
    #[must_use]
    pub fn in_game(&self) -> bool {
        self.state.is_in_game
    }

    /// The classification flags accumulated so far this frame.
    #[must_use]
    pub fn frame_flags(&self) -> FrameFlags {
        self.state.flags
    }

    #[must_use]
    pub fn player(&self) -> Player {
        self.state.player
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.state.camera
    }

    #[must_use]
    pub fn mouse(&self) -> MouseState {
        self.state.mouse
    }

    #[must_use]
    pub fn minimap(&self) -> Minimap {
        self.state.minimap
    }

    #[must_use]
    pub fn map_size(&self) -> f64 {
        self.state.map_size
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.scale
    }

    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.state.ratio
    }

    #[must_use]
    pub fn ui_scale(&self) -> f64 {
        self.state.ui_scale
    }

    /// The compositor and its three layers, for hosts that present them.
    #[must_use]
    pub fn compositor(&self) -> &Compositor<S> {
        &self.compositor
    }

    #[must_use]
    pub fn compositor_mut(&mut self) -> &mut Compositor<S> {
        &mut self.compositor
    }

    // ── Mutable settings ────────────────────────────────────────

    /// Set the overlay color painted over the matched viewport rectangle.
    pub fn set_viewport_color(&mut self, color: &str) -> Result<(), ApiError> {
        if color.is_empty() {
            return Err(ApiError::EmptyColor);
        }
        self.overlay.color = color.to_string();
        Ok(())
    }

    /// Set the overlay opacity; must be within `[0, 1]`.
    pub fn set_viewport_opacity(&mut self, opacity: f64) -> Result<(), ApiError> {
        if !(0.0..=1.0).contains(&opacity) {
            return Err(ApiError::OpacityOutOfRange(opacity));
        }
        self.overlay.opacity = opacity;
        Ok(())
    }

    /// Show or hide the synthetic viewport overlay.
    pub fn set_viewport_visible(&mut self, visible: bool) {
        self.overlay.enabled = visible;
    }

    #[must_use]
    pub fn viewport_overlay(&self) -> ViewportOverlay {
        self.overlay.clone()
    }

    /// Set the host's UI-scaling multiplier; must be finite and positive.
    pub fn set_ui_scaling(&mut self, scaling: f64) -> Result<(), ApiError> {
        if !scaling.is_finite() || scaling <= 0.0 {
            return Err(ApiError::UiScalingOutOfRange(scaling));
        }
        self.state.ui_scaling = scaling;
        if self.canvas_ready {
            self.state.update_metrics();
        }
        Ok(())
    }

    /// Persistently suppress or release mouse movement.
    pub fn set_preventing_mouse_movement(&mut self, on: bool) {
        self.gate.movement.persistent = on;
    }

    #[must_use]
    pub fn preventing_mouse_movement(&self) -> bool {
        self.gate.movement.persistent
    }

    /// Suppress exactly one upcoming mouse-movement event.
    pub fn prevent_mouse_movement_once(&mut self) {
        self.gate.movement.once = true;
    }

    /// Persistently suppress or release mouse buttons.
    pub fn set_preventing_mouse_buttons(&mut self, on: bool) {
        self.gate.buttons.persistent = on;
    }

    #[must_use]
    pub fn preventing_mouse_buttons(&self) -> bool {
        self.gate.buttons.persistent
    }

    /// Suppress exactly one upcoming mouse-button event.
    pub fn prevent_mouse_buttons_once(&mut self) {
        self.gate.buttons.once = true;
    }

    /// Persistently suppress or release keys.
    pub fn set_preventing_keys(&mut self, on: bool) {
        self.gate.keys.persistent = on;
    }

    #[must_use]
    pub fn preventing_keys(&self) -> bool {
        self.gate.keys.persistent
    }

    /// Suppress exactly one upcoming key event.
    pub fn prevent_keys_once(&mut self) {
        self.gate.keys.once = true;
    }

    /// Record typing mode. The host reads this back to tell its own input
    /// system that keystrokes are text, not commands.
    pub fn set_typing(&mut self, typing: bool) {
        self.typing = typing;
    }

    #[must_use]
    pub fn typing(&self) -> bool {
        self.typing
    }

    // ── Events ──────────────────────────────────────────────────

    /// Subscribe to a topic. Listeners fire in registration order.
    pub fn on(&self, topic: &str, cb: impl FnMut(&Payload) + 'static) -> ListenerId {
        self.bus.on(topic, cb)
    }

    /// Subscribe for at most one delivery.
    pub fn once(&self, topic: &str, cb: impl FnMut(&Payload) + 'static) -> ListenerId {
        self.bus.once(topic, cb)
    }

    /// Remove one listener.
    pub fn remove(&self, topic: &str, id: ListenerId) {
        self.bus.remove(topic, id);
    }

    /// A cloneable handle to the underlying bus, for listeners that need to
    /// subscribe or emit from inside callbacks.
    #[must_use]
    pub fn bus(&self) -> EventBus {
        self.bus.clone()
    }
}
