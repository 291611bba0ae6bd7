//! Visualization configuration.

use bevy::prelude::*;
use reacher_core::SceneConfig;

#[allow(clippy::cast_possible_truncation)]
fn extent_from_scene(scene: &SceneConfig) -> Vec2 {
    let [w, h] = scene.grid.extent;
    Vec2::new(w as f32, h as f32)
}

/// Runtime configuration for the windowed front end.
#[derive(Resource, Clone, Debug)]
pub struct VizConfig {
    /// Show the egui side panel.
    pub show_panel: bool,
    /// Draw the background grid.
    pub show_grid: bool,
    /// Draw the inner and outer reach circles.
    pub show_reach: bool,
    /// Snap clicked targets to the nearest grid intersection.
    pub snap_clicks: bool,
    /// Width and height of the drawn grid, centred on the pivot.
    pub grid_extent: Vec2,
    /// Gizmo line width in pixels.
    pub line_width: f32,
    /// Radius of the joint markers.
    pub joint_radius: f32,
    /// Half-size of the target cross.
    pub target_size: f32,
    pub colors: VizColors,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self::from_scene(&SceneConfig::default())
    }
}

impl VizConfig {
    /// Defaults sized to the scene's grid extent.
    pub fn from_scene(scene: &SceneConfig) -> Self {
        Self {
            show_panel: true,
            show_grid: true,
            show_reach: true,
            snap_clicks: true,
            grid_extent: extent_from_scene(scene),
            line_width: 3.0,
            joint_radius: 4.0,
            target_size: 6.0,
            colors: VizColors::default(),
        }
    }
}

/// Color scheme.
#[derive(Debug, Clone)]
pub struct VizColors {
    pub background: Color,
    pub grid: Color,
    /// Axes through the pivot.
    pub axes: Color,
    /// Shoulder-to-elbow segment.
    pub upper_arm: Color,
    /// Elbow-to-tip segment.
    pub lower_arm: Color,
    pub joint: Color,
    pub reach: Color,
    pub target: Color,
    /// Target marker while the arm is still moving.
    pub target_pending: Color,
}

impl Default for VizColors {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            grid: Color::srgb(0.78, 0.78, 0.78),
            axes: Color::srgb(0.55, 0.55, 0.55),
            upper_arm: Color::srgb(0.0, 0.0, 1.0),
            lower_arm: Color::srgb(1.0, 0.0, 0.0),
            joint: Color::srgb(0.1, 0.1, 0.1),
            reach: Color::srgb(0.4, 0.7, 0.4),
            target: Color::srgb(0.1, 0.6, 0.1),
            target_pending: Color::srgb(1.0, 0.55, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use reacher_core::GridConfig;

    use super::*;

    #[test]
    fn extent_follows_scene() {
        let scene = SceneConfig {
            grid: GridConfig {
                cell_size: 20.0,
                extent: [1024.0, 768.0],
            },
            ..SceneConfig::default()
        };
        let config = VizConfig::from_scene(&scene);
        assert_eq!(config.grid_extent, Vec2::new(1024.0, 768.0));
        assert!(config.snap_clicks);
    }
}
