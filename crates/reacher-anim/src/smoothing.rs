//! Smoothing parameters and the per-angle update rule.

use reacher_core::{AnimationConfig, ConfigError};

// ---------------------------------------------------------------------------
// Smoothing
// ---------------------------------------------------------------------------

/// Validated exponential-smoothing parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Smoothing {
    factor: f64,
    snap_epsilon: f64,
}

impl Default for Smoothing {
    fn default() -> Self {
        let config = AnimationConfig::default();
        Self {
            factor: config.smoothing,
            snap_epsilon: config.snap_epsilon,
        }
    }
}

impl Smoothing {
    /// `factor` must lie in (0, 1]; `snap_epsilon` must be finite and > 0.
    pub fn new(factor: f64, snap_epsilon: f64) -> Result<Self, ConfigError> {
        Self::from_config(&AnimationConfig {
            smoothing: factor,
            snap_epsilon,
        })
    }

    pub fn from_config(config: &AnimationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            factor: config.smoothing,
            snap_epsilon: config.snap_epsilon,
        })
    }

    /// Fraction of the remaining distance covered per tick.
    pub const fn factor(&self) -> f64 {
        self.factor
    }

    /// Residual below which an angle snaps onto its target.
    pub const fn snap_epsilon(&self) -> f64 {
        self.snap_epsilon
    }

    /// Advance one angle by one tick.
    ///
    /// Snaps to `target` when the residual is already, or becomes, smaller
    /// than `snap_epsilon`.
    pub fn step(&self, current: f64, target: f64) -> f64 {
        if (target - current).abs() < self.snap_epsilon {
            return target;
        }

        let next = (target - current).mul_add(self.factor, current);
        if (target - next).abs() < self.snap_epsilon {
            target
        } else {
            next
        }
    }

    /// Upper bound on the ticks needed to settle from `distance` radians.
    ///
    /// `ceil(ln(eps / distance) / ln(1 - factor)) + 1`; 1 when `factor == 1`,
    /// 0 when already within `snap_epsilon`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn max_steps_to_settle(&self, distance: f64) -> u32 {
        let distance = distance.abs();
        if !(distance >= self.snap_epsilon) {
            return 0;
        }
        if self.factor >= 1.0 {
            return 1;
        }

        let steps = (self.snap_epsilon / distance).ln() / (-self.factor).ln_1p();
        (steps.ceil() + 1.0).min(f64::from(u32::MAX)) as u32
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_matches_animation_config() {
        let smoothing = Smoothing::default();
        let config = AnimationConfig::default();
        assert_relative_eq!(smoothing.factor(), config.smoothing);
        assert_relative_eq!(smoothing.snap_epsilon(), config.snap_epsilon);
    }

    #[test]
    fn new_rejects_invalid_factor() {
        assert!(matches!(
            Smoothing::new(0.0, 1e-3),
            Err(ConfigError::InvalidSmoothing(_))
        ));
        assert!(matches!(
            Smoothing::new(1.5, 1e-3),
            Err(ConfigError::InvalidSmoothing(_))
        ));
        assert!(matches!(
            Smoothing::new(0.5, -1.0),
            Err(ConfigError::InvalidSnapEpsilon(_))
        ));
    }

    #[test]
    fn step_covers_factor_of_distance() {
        let smoothing = Smoothing::new(0.25, 1e-6).unwrap();
        assert_relative_eq!(smoothing.step(0.0, 1.0), 0.25);
        assert_relative_eq!(smoothing.step(1.0, 0.0), 0.75);
        assert_relative_eq!(smoothing.step(-2.0, 2.0), -1.0);
    }

    #[test]
    fn step_with_full_factor_lands_on_target() {
        let smoothing = Smoothing::new(1.0, 1e-6).unwrap();
        assert_relative_eq!(smoothing.step(0.3, -1.7), -1.7);
    }

    #[test]
    fn step_snaps_inside_epsilon() {
        let smoothing = Smoothing::new(0.5, 0.1).unwrap();
        // Already within epsilon.
        assert_eq!(smoothing.step(0.95, 1.0).to_bits(), 1.0f64.to_bits());
        // Lands within epsilon after the update: 0.85 -> 0.925.
        assert_eq!(smoothing.step(0.85, 1.0).to_bits(), 1.0f64.to_bits());
        // Still outside epsilon: 0.5 -> 0.75.
        assert_relative_eq!(smoothing.step(0.5, 1.0), 0.75);
    }

    #[test]
    fn max_steps_edge_cases() {
        let smoothing = Smoothing::new(0.5, 0.2).unwrap();
        assert_eq!(smoothing.max_steps_to_settle(0.0), 0);
        assert_eq!(smoothing.max_steps_to_settle(0.1), 0);
        assert_eq!(smoothing.max_steps_to_settle(f64::NAN), 0);
        // Residual 1 -> 0.5 -> 0.25 -> snap on the third tick; ln ratio 2.32.
        assert_eq!(smoothing.max_steps_to_settle(1.0), 4);
        assert_eq!(smoothing.max_steps_to_settle(-1.0), 4);

        let mut current = 0.0;
        let mut steps = 0;
        while current != 1.0 {
            current = smoothing.step(current, 1.0);
            steps += 1;
        }
        assert_eq!(steps, 3);

        let instant = Smoothing::new(1.0, 1e-6).unwrap();
        assert_eq!(instant.max_steps_to_settle(100.0), 1);
    }

    #[test]
    fn max_steps_bounds_actual_steps() {
        let smoothing = Smoothing::new(0.08, 1e-4).unwrap();
        let mut current = 0.0;
        let target = 3.0;
        let mut steps = 0;
        while current != target {
            current = smoothing.step(current, target);
            steps += 1;
        }
        assert!(steps <= smoothing.max_steps_to_settle(target));
    }

    #[test]
    fn max_steps_with_tiny_factor_is_not_zero() {
        let smoothing = Smoothing::new(1e-17, 1e-4).unwrap();
        assert_ne!(smoothing.step(0.0, 1.0), 1.0);
        assert_eq!(smoothing.max_steps_to_settle(1.0), u32::MAX);

        // ln(1e-4) / ln(1 - 1e-12) is about 9.21e12 ticks.
        let smoothing = Smoothing::new(1e-12, 1e-4).unwrap();
        assert_eq!(smoothing.max_steps_to_settle(1.0), u32::MAX);

        let smoothing = Smoothing::new(1e-6, 1e-4).unwrap();
        let bound = f64::from(smoothing.max_steps_to_settle(1.0));
        assert_relative_eq!(bound, 9_210_336.0, epsilon = 2.0);
    }
}
