//! Pointer to ring mapping and drag bumps.

use crate::config::RingConfig;
use crate::ring::wrap_index;
use glam::DVec2;
use std::f64::consts::{PI, TAU};

/// Viewport size in device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Device pixel coordinates (origin top-left) to NDC in [-1, 1] with +y up.
#[inline]
pub fn pointer_to_ndc(x: f64, y: f64, viewport: Viewport) -> DVec2 {
    DVec2::new(
        x / viewport.width * 2.0 - 1.0,
        (viewport.height - y) / viewport.height * 2.0 - 1.0,
    )
}

/// Nearest ring index to the angular position of `ndc` around the ring center.
///
/// Distance from the center is ignored. The result is in `[0, N]`; angles just below 2π round
/// up to `N`, which shares a direction with index 0.
pub fn index_for_ndc(ndc: DVec2, segment_count: usize) -> usize {
    let angle = ndc.y.atan2(ndc.x);
    let angle = if angle < 0.0 { angle + TAU } else { angle };
    (angle / TAU * segment_count as f64).round() as usize
}

#[inline]
pub fn pick_index(x: f64, y: f64, viewport: Viewport, segment_count: usize) -> usize {
    index_for_ndc(pointer_to_ndc(x, y, viewport), segment_count)
}

/// Raised-cosine window: 1 at the center, 0 at `±window`.
#[inline]
pub fn falloff(offset: isize, window: usize) -> f64 {
    0.5 * (1.0 + (PI * offset as f64 / window as f64).cos())
}

/// Radius the bump peaks at for a pointer at `ndc`: its distance from the center, capped at
/// `Rmax`, and never below the baseline.
#[inline]
pub fn bump_boost(ndc: DVec2, config: &RingConfig) -> f64 {
    let target = config.drag_max_radius.min(ndc.x.hypot(ndc.y));
    config.base_radius.max(target)
}

/// Overwrite the `2W + 1` samples around `center` with a raised-cosine bump peaking at `boost`.
pub fn write_bump(radius: &mut [f64], center: usize, boost: f64, config: &RingConfig) {
    let len = radius.len();
    let w = config.drag_window as isize;
    for offset in -w..=w {
        let index = wrap_index(center, offset, len);
        radius[index] =
            config.base_radius + (boost - config.base_radius) * falloff(offset, config.drag_window);
    }
}

pub fn apply_bump(
    radius: &mut [f64],
    center: usize,
    x: f64,
    y: f64,
    viewport: Viewport,
    config: &RingConfig,
) {
    let boost = bump_boost(pointer_to_ndc(x, y, viewport), config);
    write_bump(radius, center, boost, config);
}

/// An in-progress drag. The center is picked once on pointer-down and kept for the whole
/// session; later moves only change how far the bump reaches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragSession {
    pub center: usize,
}

#[derive(Debug, Default)]
pub struct InteractionMapper {
    drag: Option<DragSession>,
}

impl InteractionMapper {
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    #[inline]
    pub fn session(&self) -> Option<DragSession> {
        self.drag
    }

    /// Start a drag. The center is picked once; a second press during a drag keeps it.
    pub fn pointer_down(&mut self, x: f64, y: f64, viewport: Viewport, config: &RingConfig) {
        if let Some(session) = self.drag {
            log::debug!("[pointer] drag already active at ring index {}", session.center);
            return;
        }
        let center = pick_index(x, y, viewport, config.segment_count);
        log::debug!("[pointer] begin drag at ring index {}", center);
        self.drag = Some(DragSession { center });
    }

    /// Reshape the bump for the current pointer position. No-op without an active drag.
    pub fn pointer_move(
        &mut self,
        radius: &mut [f64],
        x: f64,
        y: f64,
        viewport: Viewport,
        config: &RingConfig,
    ) {
        if let Some(session) = self.drag {
            apply_bump(radius, session.center, x, y, viewport, config);
        }
    }

    pub fn pointer_up(&mut self) {
        if let Some(session) = self.drag.take() {
            log::debug!("[pointer] end drag at ring index {}", session.center);
        }
    }
}
