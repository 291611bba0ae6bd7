//! Forward kinematics and workspace classification.

use nalgebra::Vector2;

use reacher_core::{ArmConfig, JointAngles, Point2D};

/// Positions of every joint for a given set of angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmLayout {
    /// Shoulder position.
    pub pivot: Point2D,
    /// Elbow position, end of the first segment.
    pub joint2: Point2D,
    /// Tip of the second segment.
    pub end_effector: Point2D,
    /// Absolute direction of the second segment (rad).
    pub end_orientation: f64,
}

/// Compute joint positions from joint angles.
///
/// `joint2 = P + L1·(cos a1, sin a1)` and
/// `end_effector = joint2 + L2·(cos(a1+a2), sin(a1+a2))`.
pub fn forward_kinematics(pivot: &Point2D, angles: &JointAngles, arm: &ArmConfig) -> ArmLayout {
    let end_orientation = angles.end_orientation();
    let joint2 = pivot + polar(arm.l1(), angles.angle1);
    let end_effector = joint2 + polar(arm.l2(), end_orientation);

    ArmLayout {
        pivot: *pivot,
        joint2,
        end_effector,
        end_orientation,
    }
}

fn polar(radius: f64, angle: f64) -> Vector2<f64> {
    let (sin, cos) = angle.sin_cos();
    Vector2::new(radius * cos, radius * sin)
}

// ---------------------------------------------------------------------------
// Reachability
// ---------------------------------------------------------------------------

/// Where a target lies relative to the reachable annulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reachability {
    /// Inside the closed annulus `[|L1 - L2|, L1 + L2]`.
    Reachable,
    /// Beyond full extension.
    TooFar,
    /// Inside the inner hole left by unequal segment lengths.
    TooClose,
}

impl Reachability {
    pub const fn is_reachable(self) -> bool {
        matches!(self, Self::Reachable)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Reachable => "reachable",
            Self::TooFar => "too far",
            Self::TooClose => "too close",
        }
    }
}

/// Classify a target without solving.
///
/// Non-finite distances that are not `+inf` count as reachable here and
/// are left to the solver's geometry check.
pub fn reachability(pivot: &Point2D, target: &Point2D, arm: &ArmConfig) -> Reachability {
    let distance = nalgebra::distance(pivot, target);
    if distance > arm.max_reach() {
        Reachability::TooFar
    } else if distance < arm.min_reach() {
        Reachability::TooClose
    } else {
        Reachability::Reachable
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
