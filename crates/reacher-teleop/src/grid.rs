//! Grid-aligned targeting.
//!
//! [`GridFrame`] maps between world coordinates and grid cells counted from
//! an origin (normally the arm pivot).

use reacher_core::{ConfigError, GridConfig, Point2D};

/// A square grid anchored at `origin`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridFrame {
    origin: Point2D,
    cell_size: f64,
}

impl Default for GridFrame {
    fn default() -> Self {
        Self {
            origin: Point2D::origin(),
            cell_size: GridConfig::default().cell_size,
        }
    }
}

impl GridFrame {
    /// Build a frame; `cell_size` must be finite and positive.
    pub fn new(origin: Point2D, cell_size: f64) -> Result<Self, ConfigError> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(ConfigError::InvalidGridSize(cell_size));
        }
        Ok(Self { origin, cell_size })
    }

    pub fn from_config(config: &GridConfig, origin: Point2D) -> Result<Self, ConfigError> {
        Self::new(origin, config.cell_size)
    }

    pub const fn origin(&self) -> Point2D {
        self.origin
    }

    pub const fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Same grid, anchored somewhere else.
    #[must_use]
    pub const fn with_origin(mut self, origin: Point2D) -> Self {
        self.origin = origin;
        self
    }

    /// World position of grid coordinates `(gx, gy)`.
    pub fn to_world(&self, gx: f64, gy: f64) -> Point2D {
        Point2D::new(
            gx.mul_add(self.cell_size, self.origin.x),
            gy.mul_add(self.cell_size, self.origin.y),
        )
    }

    /// Fractional grid coordinates of a world position.
    pub fn to_grid(&self, p: &Point2D) -> (f64, f64) {
        (
            (p.x - self.origin.x) / self.cell_size,
            (p.y - self.origin.y) / self.cell_size,
        )
    }

    /// Nearest grid intersection to `p`.
    pub fn snap(&self, p: &Point2D) -> Point2D {
        let (gx, gy) = self.to_grid(p);
        self.to_world(gx.round(), gy.round())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
