//! Ring radii to triangle-fan geometry.

use crate::ring::RingState;
use std::f64::consts::TAU;

/// Interleaved `[x0, y0, x1, y1, ...]` fan positions: the shared center first, then the rim.
#[derive(Clone, Debug, Default)]
pub struct VertexGenerator {
    vertices: Vec<f32>,
}

impl VertexGenerator {
    pub fn new(sample_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(2 * (sample_count + 1)),
        }
    }

    /// Rebuild the fan from `state` and return it.
    ///
    /// Rim vertex `i` sits at angle `2π·i/N` with radius `radius[i]`, so the last rim vertex
    /// points the same way as the first. They only coincide when the two radii agree.
    pub fn generate(&mut self, state: &RingState) -> &[f32] {
        let radius = state.radius();
        let segments = (radius.len() - 1) as f64;
        self.vertices.clear();
        self.vertices.extend_from_slice(&[0.0, 0.0]);
        for (i, &r) in radius.iter().enumerate() {
            let angle = i as f64 / segments * TAU;
            self.vertices.push((angle.cos() * r) as f32);
            self.vertices.push((angle.sin() * r) as f32);
        }
        &self.vertices
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 2
    }
}

/// Triangle-list indices that rasterize the same polygon as a fan over `vertex_count` vertices.
///
/// For APIs without a fan primitive (WebGPU): triangles `(0, i, i + 1)` for every rim edge.
pub fn fan_indices(vertex_count: usize) -> Vec<u32> {
    let rim_edges = vertex_count.saturating_sub(2);
    let mut indices = Vec::with_capacity(rim_edges * 3);
    for i in 1..=rim_edges as u32 {
        indices.extend_from_slice(&[0, i, i + 1]);
    }
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RingConfig;

    #[test]
    fn produces_center_plus_rim() {
        let cfg = RingConfig::default();
        let state = RingState::new(&cfg);
        let mut gen = VertexGenerator::new(cfg.sample_count());
        let v = gen.generate(&state);
        assert_eq!(v.len(), 2 * (cfg.segment_count + 2));
        assert_eq!(&v[..2], &[0.0, 0.0]);
        assert_eq!(gen.vertex_count(), cfg.segment_count + 2);
    }

    #[test]
    fn rim_follows_polar_layout() {
        let cfg = RingConfig {
            segment_count: 4,
            drag_window: 1,
            ..RingConfig::default()
        };
        let mut state = RingState::new(&cfg);
        state.radius_mut().copy_from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let mut gen = VertexGenerator::new(cfg.sample_count());
        let v = gen.generate(&state).to_vec();
        let expected = [
            (1.0, 0.0),
            (0.0, 2.0),
            (-3.0, 0.0),
            (0.0, -4.0),
            (5.0, 0.0),
        ];
        for (i, (x, y)) in expected.iter().enumerate() {
            assert!((v[2 + 2 * i] - x).abs() < 1e-6, "x of rim {i}");
            assert!((v[3 + 2 * i] - y).abs() < 1e-6, "y of rim {i}");
        }
    }

    #[test]
    fn regenerating_reuses_the_buffer() {
        let cfg = RingConfig::default();
        let mut state = RingState::new(&cfg);
        let mut gen = VertexGenerator::new(cfg.sample_count());
        gen.generate(&state);
        state.radius_mut()[0] = 0.5;
        let v = gen.generate(&state);
        assert_eq!(v.len(), 2 * (cfg.segment_count + 2));
        assert!((v[2] - 0.5).abs() < 1e-7);
    }

    #[test]
    fn fan_indices_cover_every_rim_edge() {
        assert_eq!(fan_indices(5), vec![0, 1, 2, 0, 2, 3, 0, 3, 4]);
        assert_eq!(fan_indices(362).len(), 360 * 3);
        assert!(fan_indices(2).is_empty());
    }
}
