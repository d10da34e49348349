//! Per-frame ring integration.
//!
//! One [`PhysicsIntegrator::step`] per rendered frame, with an implicit timestep of one frame:
//!
//! 1. relaxation: symplectic-Euler damped spring toward `R0`, skipped while a drag is active
//! 2. diffusion: explicit discrete Laplacian, reads pre-diffusion neighbors
//! 3. smoothing: 1-2-1 low-pass, reads post-diffusion neighbors
//! 4. clamp: no negative radius
//!
//! Diffusion and smoothing always run, so a bump keeps rippling outward while the pointer holds it.

use crate::config::RingConfig;
use crate::constants::{SMOOTH_CENTER_WEIGHT, SMOOTH_SIDE_WEIGHT};
use crate::ring::{left_of, right_of, RingState};

#[derive(Debug, Default)]
pub struct PhysicsIntegrator {
    scratch: Vec<f64>,
}

impl PhysicsIntegrator {
    pub fn new(config: &RingConfig) -> Self {
        Self {
            scratch: Vec::with_capacity(config.sample_count()),
        }
    }

    pub fn step(&mut self, state: &mut RingState, config: &RingConfig, drag_active: bool) {
        let (radius, velocity) = state.split_mut();
        if !drag_active {
            relax(radius, velocity, config);
        }
        diffuse(radius, &mut self.scratch, config.spread);
        smooth(radius, &mut self.scratch);
        clamp_non_negative(radius);
    }
}

pub fn relax(radius: &mut [f64], velocity: &mut [f64], config: &RingConfig) {
    let k = config.spring_constant;
    let d = config.damping;
    for (r, v) in radius.iter_mut().zip(velocity.iter_mut()) {
        let displacement = *r - config.base_radius;
        let acceleration = -k * displacement - d * *v;
        *v += acceleration;
        *r += *v;
    }
}

/// Spread each sample toward its neighbors by `spread` times the discrete Laplacian.
///
/// `scratch` is reused as the working copy; its previous contents are irrelevant.
pub fn diffuse(radius: &mut [f64], scratch: &mut Vec<f64>, spread: f64) {
    let len = radius.len();
    scratch.clear();
    scratch.extend_from_slice(radius);
    for i in 0..len {
        let c = scratch[i];
        let l = scratch[left_of(i, len)];
        let r = scratch[right_of(i, len)];
        radius[i] = c + spread * ((l - c) + (r - c));
    }
}

pub fn smooth(radius: &mut [f64], scratch: &mut Vec<f64>) {
    let len = radius.len();
    scratch.clear();
    scratch.extend_from_slice(radius);
    for i in 0..len {
        let c = scratch[i];
        let l = scratch[left_of(i, len)];
        let r = scratch[right_of(i, len)];
        // 0.25 l + 0.5 c + 0.25 r, grouped so a flat field maps to itself bit-for-bit
        radius[i] = SMOOTH_CENTER_WEIGHT * (c + (SMOOTH_SIDE_WEIGHT / SMOOTH_CENTER_WEIGHT) * (l + r));
    }
}

#[inline]
pub fn clamp_non_negative(radius: &mut [f64]) {
    for r in radius.iter_mut() {
        *r = r.max(0.0);
    }
}
