//! Input-source-agnostic arm commands for Reacher.
//!
//! Mouse handlers, the text entry box and scripted headless runs all speak
//! the same vocabulary:
//!
//! - [`ArmCommand`]: what the user asked for
//! - [`ArmCommander`]: per-frame command buffer (Bevy resource)
//! - [`GridFrame`]: grid-cell ↔ world conversions and snapping
//! - [`parse_grid_coords`]: `"x y"` text entry
//!
//! Nothing here touches the arm. The simulation drains the commander and
//! validates each command against the current geometry.

pub mod command;
pub mod commander;
pub mod grid;
pub mod parse;

use bevy::prelude::*;

pub use command::ArmCommand;
pub use commander::ArmCommander;
pub use grid::GridFrame;
pub use parse::{InputError, parse_grid_coords};

// ---------------------------------------------------------------------------
// ReacherTeleopPlugin
// ---------------------------------------------------------------------------

/// Registers the [`ArmCommander`] resource.
pub struct ReacherTeleopPlugin;

impl Plugin for ReacherTeleopPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ArmCommander>();
    }
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        ArmCommand, ArmCommander, GridFrame, InputError, ReacherTeleopPlugin, parse_grid_coords,
    };
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugin_builds_without_panic() {
        let mut app = App::new();
        app.add_plugins(ReacherTeleopPlugin);
        app.finish();
        app.cleanup();
        app.update();

        assert!(app.world().resource::<ArmCommander>().is_empty());
    }

    #[test]
    fn plugin_keeps_preinserted_commands() {
        let mut commander = ArmCommander::new();
        commander.push(ArmCommand::MoveToGrid { x: 1.0, y: 1.0 });

        let mut app = App::new();
        app.insert_resource(commander);
        app.add_plugins(ReacherTeleopPlugin);
        app.update();

        assert_eq!(app.world().resource::<ArmCommander>().len(), 1);
    }
}
