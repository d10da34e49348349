use glam::DVec2;

/// Canvas placement in CSS pixels (from `getBoundingClientRect`) plus its backing store size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasGeometry {
    pub left: f64,
    pub top: f64,
    pub css_width: f64,
    pub css_height: f64,
    pub backing_width: f64,
    pub backing_height: f64,
}

// ---------------- Pointer helpers ----------------
/// Client (CSS) coordinates to canvas backing-store pixels.
#[inline]
pub fn client_to_canvas_px(client_x: f64, client_y: f64, canvas: &CanvasGeometry) -> DVec2 {
    let x_css = client_x - canvas.left;
    let y_css = client_y - canvas.top;
    if canvas.css_width > 0.0 && canvas.css_height > 0.0 {
        DVec2::new(
            x_css / canvas.css_width * canvas.backing_width,
            y_css / canvas.css_height * canvas.backing_height,
        )
    } else {
        DVec2::ZERO
    }
}

/// Pointers that start a drag: the primary pointer only (first finger on touch screens),
/// and for a mouse only its primary button.
#[inline]
pub fn starts_drag(pointer_type: &str, button: i16, is_primary: bool) -> bool {
    if !is_primary {
        return false;
    }
    match pointer_type {
        "mouse" => button == 0,
        _ => true,
    }
}
