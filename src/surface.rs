//! The `Surface` seam to the host's drawing targets.
//!
//! The compositor needs exactly four operations from a drawing target, so
//! that is the whole trait. The host implements it over its real rendering
//! surfaces; [`RecordingSurface`] is the in-memory implementation used in
//! tests and anywhere the layer operations only need to be observed, not
//! rasterized.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use crate::calls::{Paint, Rect};

/// A same-sized 2D drawing target the compositor can layer.
pub trait Surface {
    /// Current size in device pixels.
    fn size(&self) -> (u32, u32);

    /// Resize in place. Content after a resize is unspecified.
    fn resize(&mut self, width: u32, height: u32);

    /// Reset the transform and erase every pixel. Must be safe to call on
    /// every exit path; stale content bleeding between frames is worse than
    /// a redundant clear.
    fn clear(&mut self);

    /// Draw the full contents of `src` over this surface at the origin.
    fn copy_from(&mut self, src: &Self);

    /// Fill an axis-aligned rectangle with the given paint.
    fn fill_rect(&mut self, rect: Rect, paint: &Paint);
}

/// One recorded operation on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Resize { width: u32, height: u32 },
    Clear,
    CopyFrom { from: String },
    FillRect { rect: Rect, fill_style: String, global_alpha: f64 },
}

/// In-memory surface that logs every operation applied to it.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    label: String,
    width: u32,
    height: u32,
    log: Vec<SurfaceOp>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new(label: &str) -> Self {
        Self { label: label.to_string(), ..Self::default() }
    }

    /// The label other surfaces see when copying from this one.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Every operation applied since construction or the last [`Self::take_log`].
    #[must_use]
    pub fn log(&self) -> &[SurfaceOp] {
        &self.log
    }

    /// Drain the operation log, leaving it empty.
    pub fn take_log(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.log)
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.log.push(SurfaceOp::Resize { width, height });
    }

    fn clear(&mut self) {
        self.log.push(SurfaceOp::Clear);
    }

    fn copy_from(&mut self, src: &Self) {
        self.log.push(SurfaceOp::CopyFrom { from: src.label.clone() });
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        self.log.push(SurfaceOp::FillRect {
            rect,
            fill_style: paint.fill_style.clone(),
            global_alpha: paint.global_alpha,
        });
    }
}
