//! Per-frame render snapshot.

use bevy::prelude::*;
use reacher_core::{ElbowBranch, JointAngles, Point2D};

/// Everything a renderer needs to draw one frame, refreshed in
/// [`ReacherSet::Render`](reacher_core::ReacherSet::Render).
///
/// Renderers read this instead of the controller so they never observe a
/// half-applied command.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct ArmFrame {
    pub pivot: Point2D,
    pub joint2: Point2D,
    pub end_effector: Point2D,
    /// Absolute direction of the second segment (rad).
    pub end_orientation: f64,
    pub min_reach: f64,
    pub max_reach: f64,
    pub current: JointAngles,
    pub target: JointAngles,
    pub branch: ElbowBranch,
    /// Last accepted target in world units, if any.
    pub target_point: Option<Point2D>,
    pub settled: bool,
}

impl Default for ArmFrame {
    fn default() -> Self {
        Self {
            pivot: Point2D::origin(),
            joint2: Point2D::origin(),
            end_effector: Point2D::origin(),
            end_orientation: 0.0,
            min_reach: 0.0,
            max_reach: 0.0,
            current: JointAngles::ZERO,
            target: JointAngles::ZERO,
            branch: ElbowBranch::default(),
            target_point: None,
            settled: true,
        }
    }
}

impl ArmFrame {
    /// Current angles in degrees, shoulder first.
    pub fn degrees(&self) -> [f64; 2] {
        self.current.to_degrees()
    }
}
