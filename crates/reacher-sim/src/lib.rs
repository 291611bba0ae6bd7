//! Arm controller and per-frame loop for Reacher.
//!
//! [`ReacherSimPlugin`] is a meta-plugin that adds the core and teleop
//! plugins, the [`ArmController`] resource and the systems that run each
//! frame:
//!
//! ```text
//! Input    ──► ArmCommander  (viz, text entry, headless scripts)
//! Solve    ──► apply_arm_commands   ArmController::apply
//! Animate  ──► animate_arm          PoseAnimator::tick, SimStats
//! Render   ──► publish_arm_frame    ArmFrame snapshot
//! ```
//!
//! # Example
//!
//! ```no_run
//! use bevy::prelude::*;
//! use reacher_sim::ReacherSimPlugin;
//!
//! App::new()
//!     .add_plugins(MinimalPlugins)
//!     .add_plugins(ReacherSimPlugin)
//!     .run();
//! ```

pub mod controller;
pub mod frame;
pub mod stats;
pub mod systems;

use bevy::prelude::*;
use reacher_core::ReacherSet;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use controller::{ArmController, CommandOutcome, Retarget};
pub use frame::ArmFrame;
pub use stats::SimStats;

// ---------------------------------------------------------------------------
// ReacherSimPlugin
// ---------------------------------------------------------------------------

/// Meta-plugin that adds the full Reacher simulation loop.
///
/// Includes:
/// - [`ReacherCorePlugin`](reacher_core::ReacherCorePlugin): set ordering and `SceneConfig`
/// - [`ReacherTeleopPlugin`](reacher_teleop::ReacherTeleopPlugin): the command buffer
/// - [`ArmController`], [`ArmFrame`] and [`SimStats`] resources
///
/// Insert a [`SceneConfig`](reacher_core::SceneConfig) before adding the
/// plugin to configure the arm; an invalid one falls back to defaults.
pub struct ReacherSimPlugin;

impl Plugin for ReacherSimPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(reacher_core::ReacherCorePlugin)
            .add_plugins(reacher_teleop::ReacherTeleopPlugin)
            .init_resource::<ArmController>()
            .init_resource::<ArmFrame>()
            .init_resource::<SimStats>()
            .add_systems(
                Update,
                systems::apply_arm_commands.in_set(ReacherSet::Solve),
            )
            .add_systems(Update, systems::animate_arm.in_set(ReacherSet::Animate))
            .add_systems(
                Update,
                systems::publish_arm_frame.in_set(ReacherSet::Render),
            );
    }
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

pub mod prelude {
    pub use crate::{ArmController, ArmFrame, CommandOutcome, ReacherSimPlugin, Retarget, SimStats};
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use reacher_core::{Point2D, SceneConfig};
    use reacher_teleop::{ArmCommand, ArmCommander};

    use super::*;

    #[test]
    fn plugin_builds_without_panic() {
        let mut app = App::new();
        app.add_plugins(ReacherSimPlugin);
        app.finish();
        app.cleanup();
        app.update();

        assert!(app.world().get_resource::<ArmController>().is_some());
        assert!(app.world().get_resource::<ArmCommander>().is_some());
        assert!(app.world().get_resource::<SceneConfig>().is_some());
        assert_eq!(app.world().resource::<SimStats>().frames, 1);
    }

    #[test]
    fn plugin_uses_preinserted_scene_config() {
        let mut app = App::new();
        app.insert_resource(SceneConfig {
            pivot: [400.0, 300.0],
            ..SceneConfig::default()
        });
        app.add_plugins(ReacherSimPlugin);
        app.finish();
        app.cleanup();
        app.update();

        assert_eq!(
            app.world().resource::<ArmFrame>().pivot,
            Point2D::new(400.0, 300.0)
        );
    }

    #[test]
    fn plugin_runs_move_to_settled() {
        let mut app = App::new();
        app.add_plugins(ReacherSimPlugin);
        app.finish();
        app.cleanup();

        app.world_mut()
            .resource_mut::<ArmCommander>()
            .push(ArmCommand::MoveToGrid { x: 5.0, y: 5.0 });

        for _ in 0..1000 {
            app.update();
            if app.world().resource::<ArmFrame>().settled {
                break;
            }
        }

        let frame = app.world().resource::<ArmFrame>();
        assert!(frame.settled);
        assert!((frame.end_effector.x - 50.0).abs() < 1e-6);
        assert!((frame.end_effector.y - 50.0).abs() < 1e-6);

        let stats = app.world().resource::<SimStats>();
        assert_eq!(stats.settles, 1);
        assert_eq!(stats.last_settle_frame(), Some(stats.frames));
    }
}
