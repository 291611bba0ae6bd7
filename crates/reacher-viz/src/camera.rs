//! 2D camera setup and cursor picking.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use reacher_sim::ArmController;

use crate::config::VizConfig;
use crate::convert::vec2_from_point;

/// Marker for the scene camera.
#[derive(Component, Debug, Default)]
pub struct ReacherCamera;

/// Spawn a 2D camera centred on the pivot and apply the gizmo line width.
#[allow(clippy::needless_pass_by_value)]
pub fn spawn_camera(
    mut commands: Commands,
    controller: Res<ArmController>,
    config: Res<VizConfig>,
    mut gizmo_store: ResMut<GizmoConfigStore>,
) {
    let centre = vec2_from_point(&controller.pivot());
    commands.spawn((
        Camera2d,
        Transform::from_xyz(centre.x, centre.y, 0.0),
        ReacherCamera,
    ));
    commands.insert_resource(ClearColor(config.colors.background));

    let (gizmos, _) = gizmo_store.config_mut::<DefaultGizmoConfigGroup>();
    gizmos.line.width = config.line_width;
}

/// World position under the cursor, if it is inside the primary window.
pub fn cursor_world_position(
    windows: &Query<&Window, With<PrimaryWindow>>,
    cameras: &Query<(&Camera, &GlobalTransform), With<ReacherCamera>>,
) -> Option<Vec2> {
    let window = windows.single().ok()?;
    let cursor = window.cursor_position()?;
    let (camera, transform) = cameras.single().ok()?;
    camera.viewport_to_world_2d(transform, cursor).ok()
}
