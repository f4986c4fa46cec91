//! Errors surfaced at the public API boundary.
//!
//! Inference misses are deliberately *not* errors (a frame that fails to
//! classify just keeps the prior frame's state), so this type only covers
//! caller mistakes on the settings surface and environment-precondition
//! violations around attachment.

use thiserror::Error;

/// Error returned by the engine's public surface.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// An opacity setting was outside `[0, 1]` or not a number.
    #[error("viewport_opacity: expected range [0 - 1], got {0}")]
    OpacityOutOfRange(f64),

    /// A color setting was empty.
    #[error("viewport_color: expected a non-empty color string")]
    EmptyColor,

    /// The UI scaling multiplier was not finite and positive.
    #[error("ui_scaling: expected a finite value above 0, got {0}")]
    UiScalingOutOfRange(f64),

    /// `attach` was called a second time; the surfaces live for the whole
    /// session and are only resized in place.
    #[error("drawing surface already attached")]
    AlreadyAttached,

    /// A method requiring a live surface ran before `attach`.
    #[error("drawing surface not attached")]
    NotAttached,
}
