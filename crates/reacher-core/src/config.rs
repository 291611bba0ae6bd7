use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{ArmConfig, Point2D};

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_segment_length() -> f64 {
    100.0
}
const fn default_smoothing() -> f64 {
    0.08
}
const fn default_snap_epsilon() -> f64 {
    1e-4
}
const fn default_cell_size() -> f64 {
    10.0
}
const fn default_extent() -> [f64; 2] {
    [800.0, 600.0]
}

/// Most grid cells allowed across either axis of the visible extent.
pub const MAX_GRID_CELLS: u32 = 1000;

// ---------------------------------------------------------------------------
// SegmentConfig
// ---------------------------------------------------------------------------

/// Raw segment lengths as written in a scene file.
///
/// Converted into a validated [`ArmConfig`] by [`SegmentConfig::arm`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentConfig {
    #[serde(default = "default_segment_length")]
    pub l1: f64,
    #[serde(default = "default_segment_length")]
    pub l2: f64,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            l1: default_segment_length(),
            l2: default_segment_length(),
        }
    }
}

impl SegmentConfig {
    pub fn arm(&self) -> Result<ArmConfig, ConfigError> {
        ArmConfig::new(self.l1, self.l2)
    }
}

// ---------------------------------------------------------------------------
// AnimationConfig
// ---------------------------------------------------------------------------

/// Smoothing parameters for the pose animator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Fraction of the remaining angular distance covered per tick, in (0, 1].
    #[serde(default = "default_smoothing")]
    pub smoothing: f64,

    /// Residual angle (rad) below which the current angle snaps onto the target.
    #[serde(default = "default_snap_epsilon")]
    pub snap_epsilon: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            smoothing: default_smoothing(),
            snap_epsilon: default_snap_epsilon(),
        }
    }
}

impl AnimationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(ConfigError::InvalidSmoothing(self.smoothing));
        }
        if !(self.snap_epsilon.is_finite() && self.snap_epsilon > 0.0) {
            return Err(ConfigError::InvalidSnapEpsilon(self.snap_epsilon));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// GridConfig
// ---------------------------------------------------------------------------

/// Targeting grid centred on the pivot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Side length of one grid cell in world units.
    #[serde(default = "default_cell_size")]
    pub cell_size: f64,

    /// Visible extent [width, height] in world units.
    #[serde(default = "default_extent")]
    pub extent: [f64; 2],
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
            extent: default_extent(),
        }
    }
}

impl GridConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::InvalidGridSize(self.cell_size));
        }
        if self.extent.iter().any(|v| !(v.is_finite() && *v > 0.0)) {
            return Err(ConfigError::InvalidValue {
                field: "grid.extent".into(),
                message: format!("{:?} must be finite and positive", self.extent),
            });
        }
        let cells = self.extent[0].max(self.extent[1]) / self.cell_size;
        if cells > f64::from(MAX_GRID_CELLS) {
            return Err(ConfigError::InvalidValue {
                field: "grid.cell_size".into(),
                message: format!(
                    "{} gives {cells:.0} cells across the extent (max {MAX_GRID_CELLS})",
                    self.cell_size
                ),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// SceneConfig
// ---------------------------------------------------------------------------

/// Complete scene configuration: pivot, segments, animation and grid.
///
/// Every section is optional in the TOML file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Resource)]
pub struct SceneConfig {
    /// Pivot (shoulder) position in world units.
    #[serde(default)]
    pub pivot: [f64; 2],

    #[serde(default)]
    pub arm: SegmentConfig,

    #[serde(default)]
    pub animation: AnimationConfig,

    #[serde(default)]
    pub grid: GridConfig,
}

impl SceneConfig {
    /// Validate configuration. Returns Err on invalid values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pivot_point()?;
        self.arm.arm()?;
        self.animation.validate()?;
        self.grid.validate()?;
        Ok(())
    }

    /// Pivot as a point, rejecting non-finite coordinates.
    pub fn pivot_point(&self) -> Result<Point2D, ConfigError> {
        let [x, y] = self.pivot;
        if x.is_finite() && y.is_finite() {
            Ok(Point2D::new(x, y))
        } else {
            Err(ConfigError::InvalidValue {
                field: "pivot".into(),
                message: format!("{:?} must be finite", self.pivot),
            })
        }
    }

    /// Parse and validate from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from TOML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
