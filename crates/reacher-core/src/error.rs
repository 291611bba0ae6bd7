use thiserror::Error;

/// Top-level error type for Reacher.
#[derive(Debug, Error)]
pub enum ReacherError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IK error: {0}")]
    Ik(#[from] IkError),
}

/// Configuration errors.
///
/// Raised before a value can reach the solver or animator; the previously
/// active configuration stays in effect.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid length for segment {segment}: {value} (must be finite and > 0)")]
    InvalidSegmentLength { segment: u8, value: f64 },

    #[error("Invalid smoothing factor: {0} (must be in (0, 1])")]
    InvalidSmoothing(f64),

    #[error("Invalid snap epsilon: {0} (must be finite and > 0)")]
    InvalidSnapEpsilon(f64),

    #[error("Invalid grid cell size: {0} (must be finite and > 0)")]
    InvalidGridSize(f64),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// Inverse-kinematics failures.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum IkError {
    #[error("Target unreachable: distance {distance} outside [{min_reach}, {max_reach}]")]
    Unreachable {
        distance: f64,
        min_reach: f64,
        max_reach: f64,
    },

    #[error("Invalid geometry: law-of-cosines ratio {cos_angle2} outside [-1, 1]")]
    InvalidGeometry { cos_angle2: f64 },
}

impl IkError {
    /// Whether this is a workspace rejection rather than a numerical fault.
    pub const fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable { .. })
    }
}
