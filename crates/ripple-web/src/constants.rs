// DOM wiring constants for the web frontend

// Canvas the ring is drawn into
pub const CANVAS_ID: &str = "canvas";

// Class present on the canvas while a drag is active (cursor styling lives in CSS)
pub const DRAGGING_CLASS: &str = "dragging";
