//! Helpers for driving a simulation test app.

use bevy::prelude::*;
use reacher_sim::ArmFrame;
use reacher_teleop::{ArmCommand, ArmCommander};

/// Queue a command for the next update.
pub fn push_command(app: &mut App, command: ArmCommand) {
    app.world_mut().resource_mut::<ArmCommander>().push(command);
}

/// Run `n` frames (calls `app.update()` `n` times).
pub fn step_n(app: &mut App, n: usize) {
    for _ in 0..n {
        app.update();
    }
}

/// Run until the published frame reports a settled arm or
/// `max_frames` is reached.
///
/// Returns the number of frames run, or `None` if the arm never settled.
pub fn run_until_settled(app: &mut App, max_frames: usize) -> Option<usize> {
    for i in 1..=max_frames {
        app.update();
        if app.world().resource::<ArmFrame>().settled {
            return Some(i);
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
