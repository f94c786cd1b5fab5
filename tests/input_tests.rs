// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;
use particle_core::interactions::ElementRect;

fn canvas_rect() -> ElementRect {
    ElementRect::new(10.0, 20.0, 400.0, 300.0)
}

#[test]
fn inside_includes_edges() {
    let r = canvas_rect();
    assert!(is_inside(r, Vec2::new(10.0, 20.0)));
    assert!(is_inside(r, Vec2::new(410.0, 320.0)));
    assert!(!is_inside(r, Vec2::new(9.9, 100.0)));
    assert!(!is_inside(r, Vec2::new(100.0, 320.1)));
}

#[test]
fn client_maps_to_canvas_local_pixels() {
    let r = canvas_rect();
    // Backing store matches CSS size
    assert_eq!(
        client_to_canvas(Vec2::new(110.0, 70.0), r, Vec2::new(400.0, 300.0)),
        Vec2::new(100.0, 50.0)
    );
    // Backing store at twice the CSS size
    assert_eq!(
        client_to_canvas(Vec2::new(110.0, 70.0), r, Vec2::new(800.0, 600.0)),
        Vec2::new(200.0, 100.0)
    );
}

#[test]
fn collapsed_rect_maps_one_to_one() {
    let r = ElementRect::new(5.0, 5.0, 0.0, 0.0);
    assert_eq!(
        client_to_canvas(Vec2::new(8.0, 9.0), r, Vec2::new(100.0, 100.0)),
        Vec2::new(3.0, 4.0)
    );
}

#[test]
fn pointer_outside_canvas_counts_as_leaving() {
    let r = canvas_rect();
    let px = Vec2::new(400.0, 300.0);
    assert_eq!(pointer_on_canvas(Vec2::new(0.0, 0.0), r, px), None);
    assert_eq!(
        pointer_on_canvas(Vec2::new(210.0, 170.0), r, px),
        Some(Vec2::new(200.0, 150.0))
    );
}
