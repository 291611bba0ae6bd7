//! The pose animator: owns the arm pose and advances it once per frame.

use reacher_core::{ElbowBranch, JointAngles};

use crate::pose::{ArmPose, MotionState};
use crate::smoothing::Smoothing;

// ---------------------------------------------------------------------------
// PoseAnimator
// ---------------------------------------------------------------------------

/// Drives [`ArmPose::current`] towards [`ArmPose::target`].
///
/// Call [`tick`](Self::tick) exactly once per rendered frame from the single
/// owner of the animator; it is not re-entrant.
#[derive(Clone, Debug, Default)]
pub struct PoseAnimator {
    pose: ArmPose,
    smoothing: Smoothing,
}

impl PoseAnimator {
    /// New animator at the zero pose.
    pub fn new(smoothing: Smoothing) -> Self {
        Self {
            pose: ArmPose::default(),
            smoothing,
        }
    }

    /// Replace the target angles and branch.
    ///
    /// The previous target is discarded and `current` is left untouched.
    pub const fn set_target(&mut self, angles: JointAngles, branch: ElbowBranch) {
        self.pose.target = angles;
        self.pose.branch = branch;
    }

    /// Advance both current angles by one smoothing step and return them.
    pub fn tick(&mut self) -> JointAngles {
        let ArmPose {
            current, target, ..
        } = &mut self.pose;
        current.angle1 = self.smoothing.step(current.angle1, target.angle1);
        current.angle2 = self.smoothing.step(current.angle2, target.angle2);
        *current
    }

    /// Return to the zero pose with the default branch.
    pub fn reset(&mut self) {
        self.pose = ArmPose::default();
    }

    pub const fn pose(&self) -> &ArmPose {
        &self.pose
    }

    pub const fn current(&self) -> JointAngles {
        self.pose.current
    }

    pub const fn target(&self) -> JointAngles {
        self.pose.target
    }

    pub const fn branch(&self) -> ElbowBranch {
        self.pose.branch
    }

    pub const fn smoothing(&self) -> &Smoothing {
        &self.smoothing
    }

    /// Swap smoothing parameters; takes effect on the next tick.
    pub const fn set_smoothing(&mut self, smoothing: Smoothing) {
        self.smoothing = smoothing;
    }

    /// Per-joint motion state, shoulder first.
    pub fn motion(&self) -> [MotionState; 2] {
        self.pose.motion(self.smoothing.snap_epsilon())
    }

    pub fn is_settled(&self) -> bool {
        self.pose.is_settled(self.smoothing.snap_epsilon())
    }

    /// Upper bound on the ticks left before both joints settle.
    pub fn max_steps_to_settle(&self) -> u32 {
        self.smoothing.max_steps_to_settle(self.pose.residual())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
