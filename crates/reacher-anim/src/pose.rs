//! Animated arm pose and its per-joint motion state.

use reacher_core::{ElbowBranch, JointAngles};

/// Whether a joint has reached its target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MotionState {
    /// Residual below the snap threshold (or exactly zero).
    #[default]
    Settled,
    /// Still moving towards the target.
    Converging,
}

impl MotionState {
    fn from_residual(residual: f64, snap_epsilon: f64) -> Self {
        if residual.abs() < snap_epsilon {
            Self::Settled
        } else {
            Self::Converging
        }
    }
}

/// Current and target joint angles plus the branch of the target solution.
///
/// `current` changes every tick; `target` and `branch` change only when a new
/// target has been solved.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ArmPose {
    pub current: JointAngles,
    pub target: JointAngles,
    pub branch: ElbowBranch,
}

impl ArmPose {
    /// Per-joint state, shoulder first.
    pub fn motion(&self, snap_epsilon: f64) -> [MotionState; 2] {
        [
            MotionState::from_residual(self.target.angle1 - self.current.angle1, snap_epsilon),
            MotionState::from_residual(self.target.angle2 - self.current.angle2, snap_epsilon),
        ]
    }

    /// Both joints settled.
    pub fn is_settled(&self, snap_epsilon: f64) -> bool {
        self.motion(snap_epsilon) == [MotionState::Settled; 2]
    }

    /// Largest per-joint distance left to travel (rad).
    pub fn residual(&self) -> f64 {
        self.current.max_abs_diff(&self.target)
    }
}
