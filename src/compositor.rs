//! Three-layer compositing around the minimap region.
//!
//! The host draws the whole scene onto one surface. To let consumers paint
//! between the background and the minimap, the engine peels the frame into
//! layers as it classifies it: the background fill moves the primary
//! surface's content into the background layer, the viewport match moves
//! everything drawn since (the minimap chrome and markers) into the minimap
//! layer, and the final composite re-stacks background, consumer content,
//! and minimap back onto the primary surface. The `draw.background` seam
//! between [`Compositor::capture_minimap`] and
//! [`Compositor::composite_minimap`] is where the engine lets listeners
//! draw.

#[cfg(test)]
#[path = "compositor_test.rs"]
mod compositor_test;

use crate::surface::{RecordingSurface, Surface};

/// The three same-sized layers: primary (host-visible), background
/// isolation, and minimap isolation.
#[derive(Debug)]
pub struct Compositor<S: Surface> {
    pub primary: S,
    pub background: S,
    pub minimap: S,
}

impl Default for Compositor<RecordingSurface> {
    fn default() -> Self {
        Self {
            primary: RecordingSurface::new("primary"),
            background: RecordingSurface::new("background"),
            minimap: RecordingSurface::new("minimap"),
        }
    }
}

impl<S: Surface> Compositor<S> {
    pub fn new(primary: S, background: S, minimap: S) -> Self {
        Self { primary, background, minimap }
    }

    /// Resize all three layers to identical dimensions.
    pub fn resize_all(&mut self, width: u32, height: u32) {
        self.primary.resize(width, height);
        self.background.resize(width, height);
        self.minimap.resize(width, height);
    }

    /// Move the primary surface's content (the just-drawn background) into
    /// the background layer, leaving the primary clear for the rest of the
    /// frame to draw on top.
    pub fn isolate_background(&mut self) {
        self.background.clear();
        self.background.copy_from(&self.primary);
        self.primary.clear();
    }

    /// Move everything drawn since background isolation (the minimap and
    /// its markers) into the minimap layer, then restore the background onto
    /// the primary surface. Listeners may draw on the primary after this and
    /// before [`Self::composite_minimap`].
    pub fn capture_minimap(&mut self) {
        self.minimap.clear();
        self.minimap.copy_from(&self.primary);
        self.primary.clear();
        self.primary.copy_from(&self.background);
    }

    /// Re-stack the minimap layer over whatever is on the primary surface.
    pub fn composite_minimap(&mut self) {
        self.primary.copy_from(&self.minimap);
    }
}
