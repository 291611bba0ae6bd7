//! Input mode state machine.
//!
//! Mouse clicks pick targets in [`VizMode::Pointer`]; typed grid coordinates
//! are collected in [`VizMode::Entry`].

use bevy::prelude::*;

/// Active input mode.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VizMode {
    /// Left click targets, right click recentres.
    #[default]
    Pointer,
    /// The coordinate box has focus; clicks on the canvas are ignored.
    Entry,
}

impl VizMode {
    /// Human-readable label for UI display.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pointer => "Pointer",
            Self::Entry => "Coordinate entry",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Pointer => Self::Entry,
            Self::Entry => Self::Pointer,
        }
    }

    pub const fn accepts_clicks(self) -> bool {
        matches!(self, Self::Pointer)
    }
}
