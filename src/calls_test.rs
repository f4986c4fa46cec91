#![allow(clippy::float_cmp)]

use super::*;

// --- Paint ---

#[test]
fn paint_default_is_opaque_black() {
    let p = Paint::default();
    assert_eq!(p.fill_style, "#000000");
    assert_eq!(p.stroke_style, "#000000");
    assert_eq!(p.global_alpha, 1.0);
}

#[test]
fn paint_equality() {
    let a = Paint { fill_style: "#fff".into(), stroke_style: "#000".into(), global_alpha: 0.5 };
    let b = a.clone();
    assert_eq!(a, b);
}

// --- Rect ---

#[test]
fn rect_center() {
    let r = Rect::new(10.0, 20.0, 4.0, 8.0);
    let c = r.center();
    assert_eq!(c.x, 12.0);
    assert_eq!(c.y, 24.0);
}

#[test]
fn rect_center_negative_origin() {
    let r = Rect::new(-10.0, -10.0, 20.0, 20.0);
    let c = r.center();
    assert_eq!(c.x, 0.0);
    assert_eq!(c.y, 0.0);
}

// --- Transform ---

#[test]
fn transform_default_is_identity() {
    let t = Transform::default();
    assert_eq!(t.x, 0.0);
    assert_eq!(t.y, 0.0);
    assert_eq!(t.w, 1.0);
    assert_eq!(t.h, 1.0);
}

#[test]
fn transform_apply_offsets_without_scaling() {
    let t = Transform { x: 5.0, y: -3.0, w: 2.0, h: 2.0 };
    let p = t.apply(10.0, 10.0);
    // Path points are offset only; the scale terms never touch them.
    assert_eq!(p.x, 15.0);
    assert_eq!(p.y, 7.0);
}

#[test]
fn transform_apply_rect_offsets_and_scales() {
    let t = Transform { x: 5.0, y: 5.0, w: 2.0, h: 3.0 };
    let r = t.apply_rect(Rect::new(1.0, 1.0, 10.0, 10.0));
    assert_eq!(r.x, 6.0);
    assert_eq!(r.y, 6.0);
    assert_eq!(r.w, 20.0);
    assert_eq!(r.h, 30.0);
}

#[test]
fn transform_identity_apply_rect_is_noop() {
    let t = Transform::default();
    let r = Rect::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(t.apply_rect(r), r);
}

// --- DrawOp ---

#[test]
fn draw_op_equality() {
    assert_eq!(DrawOp::Stroke, DrawOp::Stroke);
    assert_ne!(DrawOp::Stroke, DrawOp::Fill);
    assert_eq!(
        DrawOp::MoveTo { x: 1.0, y: 2.0 },
        DrawOp::MoveTo { x: 1.0, y: 2.0 }
    );
}

#[test]
fn rect_serde_round_trip() {
    let r = Rect::new(1.5, 2.5, 3.5, 4.5);
    let json = serde_json::to_string(&r).unwrap();
    let back: Rect = serde_json::from_str(&json).unwrap();
    assert_eq!(r, back);
}
