//! Inverse kinematics for the Reacher planar two-link arm.
//!
//! Provides closed-form IK with reachability classification and elbow-branch
//! selection, plus forward kinematics for rendering and verification.
//!
//! # Architecture
//!
//! ```text
//! (pivot, target, ArmConfig, previous angle1) ──► TwoLinkSolver ──► IkSolution
//! (pivot, JointAngles, ArmConfig)             ──► forward_kinematics ──► ArmLayout
//! ```
//!
//! A reachable target admits exactly two solutions, mirror images about the
//! pivot-target line. The solver computes both and keeps the one whose
//! shoulder angle is closest to the previous shoulder angle.

pub mod kinematics;
pub mod solver;

pub use kinematics::{ArmLayout, Reachability, forward_kinematics, reachability};
pub use solver::{IkCandidates, IkSolution, SolverConfig, TwoLinkSolver};
