//! The main visualization plugin.
//!
//! [`ReacherVizPlugin`] adds the 2D camera, gizmo drawing, canvas input and
//! the egui side panel to a Bevy app.

use bevy::prelude::*;
use bevy_egui::{EguiPlugin, EguiPrimaryContextPass};
use reacher_core::{ReacherSet, SceneConfig};
use reacher_sim::systems::publish_arm_frame;

use crate::camera;
use crate::config::VizConfig;
use crate::draw;
use crate::input::{self, Hover, UiFocus};
use crate::mode::VizMode;
use crate::ui::{self, PanelState};

/// Bevy plugin for the interactive Reacher window.
///
/// Expects [`ReacherSimPlugin`](reacher_sim::ReacherSimPlugin) to be added
/// first and `DefaultPlugins` to provide the window.
pub struct ReacherVizPlugin;

impl Plugin for ReacherVizPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<VizConfig>() {
            let config = app
                .world()
                .get_resource::<SceneConfig>()
                .map(VizConfig::from_scene)
                .unwrap_or_default();
            app.insert_resource(config);
        }

        app.init_resource::<VizMode>()
            .init_resource::<UiFocus>()
            .init_resource::<Hover>()
            .init_resource::<PanelState>()
            .add_plugins(EguiPlugin::default())
            .add_systems(Startup, camera::spawn_camera)
            .add_systems(
                Update,
                (
                    input::hover_system,
                    input::mode_key_system,
                    input::mouse_command_system,
                )
                    .chain()
                    .in_set(ReacherSet::Input),
            )
            .add_systems(
                Update,
                (
                    input::follow_pivot_system,
                    draw::draw_grid,
                    draw::draw_reach,
                    draw::draw_arm,
                    draw::draw_target,
                )
                    .in_set(ReacherSet::Render)
                    .after(publish_arm_frame),
            )
            .add_systems(EguiPrimaryContextPass, ui::side_panel_system);
    }
}
