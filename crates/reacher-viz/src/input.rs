//! Mouse and keyboard input.
//!
//! Left click targets the clicked point (snapped to the grid by default),
//! right click moves the pivot there, `C` toggles coordinate entry and
//! `Escape` leaves it.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use reacher_core::Point2D;
use reacher_sim::ArmController;
use reacher_teleop::{ArmCommand, ArmCommander, GridFrame};
use tracing::debug;

use crate::camera::{ReacherCamera, cursor_world_position};
use crate::config::VizConfig;
use crate::convert::{point_from_vec2, vec2_from_point};
use crate::mode::VizMode;

/// Whether egui claimed the pointer or keyboard on the last frame.
///
/// Written by the side panel; canvas input is ignored while it is set.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiFocus {
    pub pointer: bool,
    pub keyboard: bool,
}

/// World point under the cursor, updated every frame.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct Hover(pub Option<Point2D>);

/// Command for a canvas click, or `None` for buttons without a binding.
pub fn click_command(
    button: MouseButton,
    world: Vec2,
    grid: &GridFrame,
    snap: bool,
) -> Option<ArmCommand> {
    let mut point = point_from_vec2(world);
    if snap {
        point = grid.snap(&point);
    }
    match button {
        MouseButton::Left => Some(ArmCommand::MoveTo(point)),
        MouseButton::Right => Some(ArmCommand::Recentre(point)),
        _ => None,
    }
}

/// System that turns canvas clicks into [`ArmCommand`]s.
#[allow(clippy::too_many_arguments, clippy::needless_pass_by_value)]
pub fn mouse_command_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<ReacherCamera>>,
    controller: Res<ArmController>,
    config: Res<VizConfig>,
    mode: Res<VizMode>,
    focus: Res<UiFocus>,
    mut commander: ResMut<ArmCommander>,
) {
    if !mode.accepts_clicks() || focus.pointer {
        return;
    }
    for button in [MouseButton::Left, MouseButton::Right] {
        if !buttons.just_pressed(button) {
            continue;
        }
        let Some(world) = cursor_world_position(&windows, &cameras) else {
            return;
        };
        if let Some(command) = click_command(button, world, controller.grid(), config.snap_clicks) {
            debug!(%command, "Canvas click");
            commander.push(command);
        }
    }
}

/// System that records the world point under the cursor.
#[allow(clippy::needless_pass_by_value)]
pub fn hover_system(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<ReacherCamera>>,
    mut hover: ResMut<Hover>,
) {
    let point = cursor_world_position(&windows, &cameras).map(point_from_vec2);
    if hover.0 != point {
        hover.0 = point;
    }
}

/// System that switches between pointer and coordinate-entry modes.
#[allow(clippy::needless_pass_by_value)]
pub fn mode_key_system(
    keys: Res<ButtonInput<KeyCode>>,
    focus: Res<UiFocus>,
    mut mode: ResMut<VizMode>,
) {
    if keys.just_pressed(KeyCode::Escape) && *mode == VizMode::Entry {
        *mode = VizMode::Pointer;
    } else if keys.just_pressed(KeyCode::KeyC) && !focus.keyboard {
        *mode = mode.toggled();
    }
}

/// Keeps the camera centred on the pivot after a recentre.
#[allow(clippy::needless_pass_by_value)]
pub fn follow_pivot_system(
    controller: Res<ArmController>,
    mut cameras: Query<&mut Transform, With<ReacherCamera>>,
) {
    let pivot = vec2_from_point(&controller.pivot());
    for mut transform in &mut cameras {
        if transform.translation.truncate() != pivot {
            transform.translation.x = pivot.x;
            transform.translation.y = pivot.y;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
