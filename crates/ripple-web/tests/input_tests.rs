// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;
use ripple_core::{pick_index, pointer_to_ndc, Viewport};

fn hidpi_canvas() -> CanvasGeometry {
    // 400x300 CSS box at (10, 20) with a 2x backing store
    CanvasGeometry {
        left: 10.0,
        top: 20.0,
        css_width: 400.0,
        css_height: 300.0,
        backing_width: 800.0,
        backing_height: 600.0,
    }
}

#[test]
fn client_coords_scale_to_backing_store() {
    let c = hidpi_canvas();
    let p = client_to_canvas_px(10.0, 20.0, &c);
    assert_eq!((p.x, p.y), (0.0, 0.0));
    let p = client_to_canvas_px(410.0, 320.0, &c);
    assert_eq!((p.x, p.y), (800.0, 600.0));
    let p = client_to_canvas_px(210.0, 170.0, &c);
    assert_eq!((p.x, p.y), (400.0, 300.0));
}

#[test]
fn collapsed_canvas_maps_to_origin() {
    let c = CanvasGeometry {
        css_width: 0.0,
        ..hidpi_canvas()
    };
    let p = client_to_canvas_px(100.0, 100.0, &c);
    assert_eq!((p.x, p.y), (0.0, 0.0));
}

#[test]
fn canvas_center_is_ndc_origin() {
    let c = hidpi_canvas();
    let p = client_to_canvas_px(210.0, 170.0, &c);
    let ndc = pointer_to_ndc(p.x, p.y, Viewport::new(c.backing_width, c.backing_height));
    assert!(ndc.length() < 1e-12);
}

#[test]
fn picking_through_client_coords() {
    let c = hidpi_canvas();
    let vp = Viewport::new(c.backing_width, c.backing_height);
    // right of center, above center, left of center
    let right = client_to_canvas_px(400.0, 170.0, &c);
    let above = client_to_canvas_px(210.0, 25.0, &c);
    let left = client_to_canvas_px(15.0, 170.0, &c);
    assert_eq!(pick_index(right.x, right.y, vp, 360), 0);
    assert_eq!(pick_index(above.x, above.y, vp, 360), 90);
    assert_eq!(pick_index(left.x, left.y, vp, 360), 180);
}

#[test]
fn only_primary_mouse_button_drags() {
    assert!(starts_drag("mouse", 0, true));
    assert!(!starts_drag("mouse", 2, true));
    assert!(starts_drag("touch", 0, true));
    assert!(starts_drag("pen", 0, true));
}

#[test]
fn secondary_touch_never_starts_a_drag() {
    // a second finger arrives as a non-primary pointer
    assert!(!starts_drag("touch", 0, false));
    assert!(!starts_drag("pen", 0, false));
    assert!(!starts_drag("mouse", 0, false));
}
