//! Empirical constants calibrated against the host renderer.
//!
//! Most of these are reverse-engineered from the host's internal projection
//! math and drawing sequence. They are configuration, not derivable first
//! principles: when the host changes its renderer they must be recalibrated.
//! The classifier reads them through [`crate::signature::SignatureConfig`]
//! so callers can swap in updated values without touching control flow.

// ── Projection ──────────────────────────────────────────────────

/// Correction factor for the host's internal projection scalar, applied in
/// both directions of the world/screen mapping.
pub const PROJECTION_FACTOR: f64 = 1.23456789;

/// Minimum plausible zoom level. Background isolation is skipped below this
/// to reject degenerate start-of-frame states.
pub const FOV_FLOOR: f64 = 0.005;

// ── Classification tolerances ───────────────────────────────────

/// Rectangle-match tolerance in pixels, scaled by the live UI scale.
pub const RECT_EPSILON: f64 = 0.1;

/// Tolerance for comparing a call's global alpha against an expected value.
pub const ALPHA_EPSILON: f64 = 1e-9;

// ── Host paint attributes ───────────────────────────────────────

/// Fill color the host uses for the scene background and world grid fill.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffd454";

/// Stroke color the host uses for the world grid.
pub const DEFAULT_GRID_COLOR: &str = "#000000";

/// Base opacity of the world grid; the live fov is derived from the ratio of
/// the observed stroke alpha to this value.
pub const DEFAULT_GRID_OPACITY: f64 = 0.5;

/// Fill color of the minimap viewport indicator.
pub const VIEWPORT_FILL: &str = "#000000";

/// Global alpha of the minimap viewport indicator.
pub const VIEWPORT_ALPHA: f64 = 0.1;

// ── Layout ──────────────────────────────────────────────────────

/// Reference resolution the host scales its UI against.
pub const BASE_WIDTH: f64 = 1920.0;
/// Reference resolution the host scales its UI against.
pub const BASE_HEIGHT: f64 = 1080.0;

/// Offset of the minimap background square from the canvas corner, as a
/// fraction of the UI ratio.
pub const MINIMAP_NORMAL_OFFSET: f64 = 0.180555;

/// Side length of the minimap background square, as a fraction of the UI ratio.
pub const MINIMAP_NORMAL_SIDE: f64 = 0.162037;

/// Offset and side of the extended minimap hit-region, as a fraction of the
/// UI ratio. Strictly larger than the background square; used for
/// classification tolerance and for normalizing minimap coordinates.
pub const MINIMAP_EXTENDED_SIDE: f64 = 0.2;

/// Fraction of the world extent where the minimap's coverage begins.
pub const MINIMAP_WORLD_START: f64 = 0.0972;

/// Fraction of the world extent where the minimap's coverage ends.
pub const MINIMAP_WORLD_END: f64 = 0.90745;

// ── Frame detection ─────────────────────────────────────────────

/// Substring identifying the host's main-loop frame callback. The host names
/// its loop this way; structural matching on it is fragile but is the only
/// available frame-boundary signal.
pub const FRAME_MARKER: &str = ".mainLoop.";

/// Number of path vertices buffered for polygon-arity detection.
pub const VERTEX_RING: usize = 6;
