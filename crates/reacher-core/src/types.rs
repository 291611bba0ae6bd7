use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Planar coordinates. Used for the pivot, targets and computed joint positions.
pub type Point2D = nalgebra::Point2<f64>;

// ---------------------------------------------------------------------------
// ArmConfig
// ---------------------------------------------------------------------------

/// Segment lengths of the two-link arm.
///
/// Both lengths are finite and strictly positive. Construct through
/// [`ArmConfig::new`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArmConfig {
    l1: f64,
    l2: f64,
}

impl Default for ArmConfig {
    fn default() -> Self {
        Self {
            l1: 100.0,
            l2: 100.0,
        }
    }
}

impl ArmConfig {
    /// Validate and build a segment configuration.
    pub fn new(l1: f64, l2: f64) -> Result<Self, ConfigError> {
        validate_length(1, l1)?;
        validate_length(2, l2)?;
        Ok(Self { l1, l2 })
    }

    /// Length of the first (shoulder-to-elbow) segment.
    pub const fn l1(&self) -> f64 {
        self.l1
    }

    /// Length of the second (elbow-to-tip) segment.
    pub const fn l2(&self) -> f64 {
        self.l2
    }

    /// Inner radius of the reachable annulus, `|L1 - L2|`.
    pub fn min_reach(&self) -> f64 {
        (self.l1 - self.l2).abs()
    }

    /// Outer radius of the reachable annulus, `L1 + L2`.
    pub fn max_reach(&self) -> f64 {
        self.l1 + self.l2
    }

    /// Whether a pivot-to-target distance lies in the closed annulus
    /// `[|L1 - L2|, L1 + L2]`.
    pub fn reaches(&self, distance: f64) -> bool {
        distance >= self.min_reach() && distance <= self.max_reach()
    }
}

fn validate_length(segment: u8, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidSegmentLength { segment, value })
    }
}

// ---------------------------------------------------------------------------
// JointAngles
// ---------------------------------------------------------------------------

/// Joint angles in radians.
///
/// `angle1` is measured from the positive x-axis at the pivot; `angle2` is
/// relative to the direction of the first segment.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct JointAngles {
    pub angle1: f64,
    pub angle2: f64,
}

impl JointAngles {
    pub const ZERO: Self = Self {
        angle1: 0.0,
        angle2: 0.0,
    };

    pub const fn new(angle1: f64, angle2: f64) -> Self {
        Self { angle1, angle2 }
    }

    /// Absolute orientation of the second segment, `angle1 + angle2`.
    pub fn end_orientation(&self) -> f64 {
        self.angle1 + self.angle2
    }

    /// Largest per-joint absolute difference to `other`.
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        (self.angle1 - other.angle1)
            .abs()
            .max((self.angle2 - other.angle2).abs())
    }

    /// Both angles in degrees, for display.
    pub fn to_degrees(&self) -> [f64; 2] {
        [self.angle1.to_degrees(), self.angle2.to_degrees()]
    }
}

// ---------------------------------------------------------------------------
// ElbowBranch
// ---------------------------------------------------------------------------

/// Which of the two mirror-image IK solutions is in use.
///
/// `Up` takes the positive `acos` root for the elbow angle, `Down` the
/// negative one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElbowBranch {
    #[default]
    Up,
    Down,
}

impl ElbowBranch {
    /// Sign applied to the elbow angle magnitude.
    pub const fn sign(self) -> f64 {
        match self {
            Self::Up => 1.0,
            Self::Down => -1.0,
        }
    }

    /// The mirror branch.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Up => "elbow-up",
            Self::Down => "elbow-down",
        }
    }
}

impl fmt::Display for ElbowBranch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
