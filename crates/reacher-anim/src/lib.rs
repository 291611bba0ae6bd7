//! Frame-by-frame joint-angle animation for the Reacher arm.
//!
//! Plain state and arithmetic: no systems, plugins or resources of its own.
//! The animator owns an [`ArmPose`] and moves its current angles towards the
//! solved target angles with first-order exponential smoothing:
//!
//! ```text
//! current ← current + (target − current) · factor      (factor in (0, 1])
//! ```
//!
//! Geometric decay never reaches zero, so each angle snaps onto its target
//! once the residual drops below `snap_epsilon`.
//!
//! # Quick Start
//!
//! ```
//! use reacher_anim::prelude::*;
//! use reacher_core::{ElbowBranch, JointAngles};
//!
//! let mut animator = PoseAnimator::new(Smoothing::new(0.5, 1e-3).unwrap());
//! animator.set_target(JointAngles::new(1.0, -0.5), ElbowBranch::Down);
//!
//! let first = animator.tick();
//! assert!((first.angle1 - 0.5).abs() < 1e-12);
//!
//! while !animator.is_settled() {
//!     animator.tick();
//! }
//! assert_eq!(animator.current(), animator.target());
//! ```

pub mod animator;
pub mod pose;
pub mod smoothing;

pub use animator::PoseAnimator;
pub use pose::{ArmPose, MotionState};
pub use smoothing::Smoothing;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::animator::PoseAnimator;
    pub use crate::pose::{ArmPose, MotionState};
    pub use crate::smoothing::Smoothing;
}
