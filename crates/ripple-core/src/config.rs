//! Run-wide ring configuration.
//!
//! A [`RingConfig`] is built once at startup (usually from [`RingConfig::default`], which mirrors
//! the values in `constants.rs`) and handed by reference to every stage of the frame.

use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("segment count must be at least 2, got {0}")]
    TooFewSegments(usize),
    #[error("drag window half-width must be at least 1")]
    EmptyWindow,
    #[error("drag window of {window} samples per side does not fit a ring of {samples} samples")]
    WindowTooWide { window: usize, samples: usize },
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidCoefficient { name: &'static str, value: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct RingConfig {
    /// N; the ring stores N + 1 samples.
    pub segment_count: usize,
    /// R0
    pub base_radius: f64,
    /// k
    pub spring_constant: f64,
    /// d
    pub damping: f64,
    /// s
    pub spread: f64,
    /// W
    pub drag_window: usize,
    /// Rmax
    pub drag_max_radius: f64,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            segment_count: SEGMENT_COUNT,
            base_radius: BASE_RADIUS,
            spring_constant: SPRING_CONSTANT,
            damping: DAMPING,
            spread: SPREAD,
            drag_window: DRAG_WINDOW,
            drag_max_radius: DRAG_MAX_RADIUS,
        }
    }
}

impl RingConfig {
    /// Number of samples in the ring (N + 1).
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.segment_count + 1
    }

    /// Reject values the ring cannot be built from.
    ///
    /// Coefficients are only checked for being finite and non-negative; whether `k`, `d` and `s`
    /// keep the per-frame relaxation stable is left to whoever picks them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.segment_count < 2 {
            return Err(ConfigError::TooFewSegments(self.segment_count));
        }
        if self.drag_window == 0 {
            return Err(ConfigError::EmptyWindow);
        }
        if 2 * self.drag_window + 1 > self.sample_count() {
            return Err(ConfigError::WindowTooWide {
                window: self.drag_window,
                samples: self.sample_count(),
            });
        }
        let coefficients = [
            ("base radius", self.base_radius),
            ("spring constant", self.spring_constant),
            ("damping", self.damping),
            ("spread", self.spread),
            ("drag max radius", self.drag_max_radius),
        ];
        for (name, value) in coefficients {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidCoefficient { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(RingConfig::default().validate(), Ok(()));
        assert_eq!(RingConfig::default().sample_count(), 361);
    }

    #[test]
    fn rejects_degenerate_ring() {
        let cfg = RingConfig {
            segment_count: 1,
            ..RingConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::TooFewSegments(1)));
    }

    #[test]
    fn rejects_window_that_overlaps_itself() {
        let cfg = RingConfig {
            segment_count: 10,
            drag_window: 6,
            ..RingConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::WindowTooWide { window: 6, samples: 11 })
        ));
        let cfg = RingConfig {
            drag_window: 0,
            ..RingConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyWindow));
    }

    #[test]
    fn rejects_negative_or_nan_coefficients() {
        let cfg = RingConfig {
            damping: -0.1,
            ..RingConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidCoefficient { name: "damping", .. })
        ));
        let cfg = RingConfig {
            spread: f64::NAN,
            ..RingConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
