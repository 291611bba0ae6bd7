//! Conversions between the f64 simulation types and Bevy's f32 math.

#![allow(clippy::cast_possible_truncation)] // f64 -> f32 is intentional for Bevy

use bevy::math::Vec2;
use reacher_core::Point2D;

/// Convert a simulation point to a Bevy `Vec2`.
#[inline]
#[must_use]
pub fn vec2_from_point(p: &Point2D) -> Vec2 {
    Vec2::new(p.x as f32, p.y as f32)
}

/// Convert a Bevy `Vec2` to a simulation point.
#[inline]
#[must_use]
pub fn point_from_vec2(v: Vec2) -> Point2D {
    Point2D::new(f64::from(v.x), f64::from(v.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_vec2_roundtrip() {
        let v = Vec2::new(12.5, -3.25);
        assert_eq!(vec2_from_point(&point_from_vec2(v)), v);
    }
}
