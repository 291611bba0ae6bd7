//! Per-frame systems: apply commands, animate, publish the render snapshot.

use bevy::prelude::*;
use reacher_teleop::ArmCommander;
use tracing::debug;

use crate::controller::ArmController;
use crate::frame::ArmFrame;
use crate::stats::SimStats;

/// Drain the command buffer into the controller, oldest first.
///
/// Runs in [`ReacherSet::Solve`](reacher_core::ReacherSet::Solve).
pub fn apply_arm_commands(
    mut commander: ResMut<ArmCommander>,
    mut controller: ResMut<ArmController>,
    mut stats: ResMut<SimStats>,
) {
    if commander.is_empty() {
        return;
    }
    for command in commander.drain() {
        match controller.apply(command) {
            Ok(outcome) => stats.record_accepted(outcome),
            Err(err) => stats.record_rejected(err),
        }
    }
}

/// Advance the animation by one tick.
///
/// Runs in [`ReacherSet::Animate`](reacher_core::ReacherSet::Animate).
pub fn animate_arm(mut controller: ResMut<ArmController>, mut stats: ResMut<SimStats>) {
    controller.tick();
    if stats.record_frame(controller.is_settled()) {
        debug!(frame = stats.frames, "Arm settled");
    }
}

/// Refresh [`ArmFrame`] from the controller.
///
/// Runs in [`ReacherSet::Render`](reacher_core::ReacherSet::Render).
#[allow(clippy::needless_pass_by_value)]
pub fn publish_arm_frame(controller: Res<ArmController>, mut frame: ResMut<ArmFrame>) {
    *frame = controller.frame();
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use reacher_core::{Point2D, ReacherSet};
    use reacher_teleop::ArmCommand;

    use super::*;

    fn build_test_app() -> App {
        let mut app = App::new();
        app.init_resource::<ArmCommander>()
            .init_resource::<ArmController>()
            .init_resource::<ArmFrame>()
            .init_resource::<SimStats>()
            .configure_sets(
                Update,
                (ReacherSet::Solve, ReacherSet::Animate, ReacherSet::Render).chain(),
            )
            .add_systems(Update, apply_arm_commands.in_set(ReacherSet::Solve))
            .add_systems(Update, animate_arm.in_set(ReacherSet::Animate))
            .add_systems(Update, publish_arm_frame.in_set(ReacherSet::Render));
        app
    }

    #[test]
    fn commands_applied_in_order() {
        let mut app = build_test_app();
        {
            let mut commander = app.world_mut().resource_mut::<ArmCommander>();
            commander.push(ArmCommand::MoveTo(Point2D::new(100.0, 0.0)));
            commander.push(ArmCommand::MoveTo(Point2D::new(0.0, 100.0)));
        }
        app.update();

        let controller = app.world().resource::<ArmController>();
        assert_eq!(controller.target_point(), Some(Point2D::new(0.0, 100.0)));
        assert!(app.world().resource::<ArmCommander>().is_empty());
        assert_eq!(app.world().resource::<SimStats>().accepted, 2);
    }

    #[test]
    fn rejected_command_counted() {
        let mut app = build_test_app();
        app.world_mut()
            .resource_mut::<ArmCommander>()
            .push(ArmCommand::MoveTo(Point2D::new(500.0, 0.0)));
        app.update();

        let stats = app.world().resource::<SimStats>();
        assert_eq!(stats.rejected, 1);
        assert_eq!(stats.accepted, 0);
        assert!(
            stats
                .last_outcome
                .as_deref()
                .is_some_and(|msg| msg.contains("unreachable"))
        );
        assert!(
            app.world()
                .resource::<ArmController>()
                .target_point()
                .is_none()
        );
    }

    #[test]
    fn frame_published_after_tick() {
        let mut app = build_test_app();
        app.world_mut()
            .resource_mut::<ArmCommander>()
            .push(ArmCommand::MoveTo(Point2D::new(0.0, 200.0)));
        app.update();

        let frame = *app.world().resource::<ArmFrame>();
        let controller = app.world().resource::<ArmController>();
        assert_eq!(frame.current, controller.animator().current());
        assert_ne!(frame.current, reacher_core::JointAngles::ZERO);
        assert!(!frame.settled);
        assert_eq!(app.world().resource::<SimStats>().frames, 1);
    }
}
