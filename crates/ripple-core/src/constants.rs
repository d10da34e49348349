// Shared ring tuning constants used by both web and native frontends.

// Ring layout
pub const SEGMENT_COUNT: usize = 360; // N; the ring holds N + 1 samples
pub const BASE_RADIUS: f64 = 0.2; // rest radius in NDC units

// Relaxation and ripple
pub const SPRING_CONSTANT: f64 = 0.15; // pull back toward BASE_RADIUS per frame
pub const DAMPING: f64 = 0.1; // velocity damping per frame
pub const SPREAD: f64 = 0.3; // neighbor diffusion per frame; explicit Laplacian needs <= 0.5

// Smoothing kernel weights (left, center, right)
pub const SMOOTH_SIDE_WEIGHT: f64 = 0.25;
pub const SMOOTH_CENTER_WEIGHT: f64 = 0.5;

// Interaction
pub const DRAG_WINDOW: usize = 8; // bump half-width in samples
pub const DRAG_MAX_RADIUS: f64 = 0.3; // cap on the radius a drag can pull the ring out to

// Frame clock
pub const CLOCK_MS_TO_SEC: f64 = 0.001;

// Background
pub const CLEAR_COLOR: [f64; 4] = [0.0, 0.0, 0.0, 1.0];

// Base color candidates, one is picked at startup
pub const COLOR_VARIANTS: [&str; 12] = [
    "#3fa9f5", // blue
    "#ff0000", // red
    "#dc143c", // crimson
    "#00ff00", // lime
    "#32cd32", // lime green
    "#ffa500", // orange
    "#ff4500", // orange red
    "#800080", // purple
    "#9932cc", // dark orchid
    "#ff69b4", // hot pink
    "#00ffff", // cyan
    "#ffff00", // yellow
];
