//! Commands that input sources send to the arm.

use std::fmt;

use reacher_core::Point2D;

/// A request from an input source.
///
/// Values are raw: the controller validates them before anything changes,
/// so a rejected command leaves the arm exactly as it was.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArmCommand {
    /// Track a target given in world coordinates.
    MoveTo(Point2D),
    /// Track a target given in grid cells relative to the pivot.
    MoveToGrid { x: f64, y: f64 },
    /// Change the segment lengths.
    Resize { l1: f64, l2: f64 },
    /// Move the pivot to a new world position.
    Recentre(Point2D),
}

impl ArmCommand {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::MoveTo(_) => "move-to",
            Self::MoveToGrid { .. } => "move-to-grid",
            Self::Resize { .. } => "resize",
            Self::Recentre(_) => "recentre",
        }
    }
}

impl fmt::Display for ArmCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveTo(p) => write!(f, "move-to ({}, {})", p.x, p.y),
            Self::MoveToGrid { x, y } => write!(f, "move-to-grid ({x}, {y})"),
            Self::Resize { l1, l2 } => write!(f, "resize (l1={l1}, l2={l2})"),
            Self::Recentre(p) => write!(f, "recentre ({}, {})", p.x, p.y),
        }
    }
}
