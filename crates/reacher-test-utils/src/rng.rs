//! Deterministic RNG utilities for reproducible tests.

use std::f64::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use reacher_core::{ArmConfig, Point2D};

/// Create a deterministic `ChaCha8Rng` from a seed.
///
/// All test randomization should go through this to ensure reproducibility.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A target strictly inside the reachable annulus around `pivot`.
///
/// Stays 1% clear of both boundaries.
pub fn random_reachable_target(rng: &mut impl Rng, pivot: &Point2D, arm: &ArmConfig) -> Point2D {
    let span = arm.max_reach() - arm.min_reach();
    let radius = rng.gen_range(0.01_f64..0.99).mul_add(span, arm.min_reach());
    at_polar(rng, pivot, radius)
}

/// A target outside the reachable annulus: beyond the rim, or inside the
/// hole when the segments differ.
pub fn random_unreachable_target(
    rng: &mut impl Rng,
    pivot: &Point2D,
    arm: &ArmConfig,
) -> Point2D {
    let inside_hole = arm.min_reach() > 0.0 && rng.r#gen::<bool>();
    let radius = if inside_hole {
        rng.gen_range(0.0..0.99) * arm.min_reach()
    } else {
        rng.gen_range(1.01..2.0) * arm.max_reach()
    };
    at_polar(rng, pivot, radius)
}

fn at_polar(rng: &mut impl Rng, pivot: &Point2D, radius: f64) -> Point2D {
    let (sin, cos) = rng.gen_range(0.0..TAU).sin_cos();
    Point2D::new(radius.mul_add(cos, pivot.x), radius.mul_add(sin, pivot.y))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
