//! Standard arm geometries.

use reacher_core::{ArmConfig, SceneConfig, SegmentConfig};

/// Two 100-unit segments: reach is the full disc of radius 200.
pub fn equal_arm() -> ArmConfig {
    ArmConfig::default()
}

/// 120 + 80: reach is the annulus `[40, 200]`.
pub fn unequal_arm() -> ArmConfig {
    ArmConfig::new(120.0, 80.0).expect("fixture lengths are valid")
}

/// Default scene with the given segment lengths.
pub fn scene_with_arm(arm: &ArmConfig) -> SceneConfig {
    SceneConfig {
        arm: SegmentConfig {
            l1: arm.l1(),
            l2: arm.l2(),
        },
        ..SceneConfig::default()
    }
}
