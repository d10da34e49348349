//! Ring sample storage.
//!
//! The ring is a closed loop of `N + 1` samples. Every neighbor lookup goes through
//! [`RingState::left`], [`RingState::right`] or [`RingState::wrap`], so no index outside
//! `[0, N]` is ever produced.

use crate::config::RingConfig;

#[derive(Clone, Debug)]
pub struct RingState {
    radius: Box<[f64]>,
    velocity: Box<[f64]>,
}

impl RingState {
    /// Allocate a ring at rest: every radius at `R0`, every velocity zero.
    pub fn new(config: &RingConfig) -> Self {
        let len = config.sample_count();
        Self {
            radius: vec![config.base_radius; len].into_boxed_slice(),
            velocity: vec![0.0; len].into_boxed_slice(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.radius.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.radius.is_empty()
    }

    #[inline]
    pub fn radius(&self) -> &[f64] {
        &self.radius
    }

    #[inline]
    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }

    /// Mutable view of the radii only. Pointer interaction writes through this so it never
    /// injects momentum.
    #[inline]
    pub fn radius_mut(&mut self) -> &mut [f64] {
        &mut self.radius
    }

    #[inline]
    pub(crate) fn split_mut(&mut self) -> (&mut [f64], &mut [f64]) {
        (&mut self.radius, &mut self.velocity)
    }

    #[inline]
    pub fn left(&self, i: usize) -> usize {
        left_of(i, self.len())
    }

    #[inline]
    pub fn right(&self, i: usize) -> usize {
        right_of(i, self.len())
    }

    /// Index `i + offset`, wrapped into the ring.
    #[inline]
    pub fn wrap(&self, i: usize, offset: isize) -> usize {
        wrap_index(i, offset, self.len())
    }
}

#[inline]
pub fn left_of(i: usize, len: usize) -> usize {
    (i + len - 1) % len
}

#[inline]
pub fn right_of(i: usize, len: usize) -> usize {
    (i + 1) % len
}

#[inline]
pub fn wrap_index(i: usize, offset: isize, len: usize) -> usize {
    (i as isize + offset).rem_euclid(len as isize) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(n: usize) -> RingState {
        RingState::new(&RingConfig {
            segment_count: n,
            ..RingConfig::default()
        })
    }

    #[test]
    fn starts_at_rest() {
        let cfg = RingConfig::default();
        let r = RingState::new(&cfg);
        assert_eq!(r.len(), cfg.segment_count + 1);
        assert_eq!(r.velocity().len(), r.radius().len());
        assert!(r.radius().iter().all(|&x| x == cfg.base_radius));
        assert!(r.velocity().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn neighbors_wrap_at_both_ends() {
        let r = ring(360);
        assert_eq!(r.left(0), 360);
        assert_eq!(r.right(360), 0);
        for i in 0..r.len() {
            assert_eq!(r.left(i), (i + 360) % 361);
            assert_eq!(r.right(i), (i + 1) % 361);
        }
    }

    #[test]
    fn signed_offsets_wrap() {
        let r = ring(360);
        assert_eq!(r.wrap(0, -8), 353);
        assert_eq!(r.wrap(355, 8), 2);
        assert_eq!(r.wrap(10, 0), 10);
        assert_eq!(r.wrap(0, -361), 0);
    }
}
