use super::*;
use crate::surface::SurfaceOp;

fn copy(from: &str) -> SurfaceOp {
    SurfaceOp::CopyFrom { from: from.to_string() }
}

#[test]
fn resize_all_sizes_every_layer_identically() {
    let mut c = Compositor::default();
    c.resize_all(800, 600);
    assert_eq!(c.primary.size(), (800, 600));
    assert_eq!(c.background.size(), (800, 600));
    assert_eq!(c.minimap.size(), (800, 600));
}

#[test]
fn isolate_background_moves_primary_into_background_layer() {
    let mut c = Compositor::default();
    c.isolate_background();
    assert_eq!(c.background.log(), &[SurfaceOp::Clear, copy("primary")]);
    assert_eq!(c.primary.log(), &[SurfaceOp::Clear]);
    assert!(c.minimap.log().is_empty());
}

#[test]
fn capture_minimap_restores_background_onto_primary() {
    let mut c = Compositor::default();
    c.capture_minimap();
    assert_eq!(c.minimap.log(), &[SurfaceOp::Clear, copy("primary")]);
    // Primary is cleared and then holds the background layer again.
    assert_eq!(c.primary.log(), &[SurfaceOp::Clear, copy("background")]);
}

#[test]
fn composite_minimap_stacks_minimap_last() {
    let mut c = Compositor::default();
    c.composite_minimap();
    assert_eq!(c.primary.log(), &[copy("minimap")]);
}

#[test]
fn full_frame_sequence_on_primary() {
    let mut c = Compositor::default();
    c.isolate_background();
    c.capture_minimap();
    c.composite_minimap();
    assert_eq!(
        c.primary.log(),
        &[
            SurfaceOp::Clear,      // background moved out
            SurfaceOp::Clear,      // minimap moved out
            copy("background"),    // background restored
            copy("minimap"),       // minimap stacked on top
        ]
    );
}
