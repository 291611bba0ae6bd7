//! Gizmo rendering of the grid, reach annulus, arm and target.
//!
//! Every system reads the [`ArmFrame`] snapshot and runs after it is
//! published in [`ReacherSet::Render`](reacher_core::ReacherSet::Render).

#![allow(clippy::needless_pass_by_value)] // Bevy system parameters
#![allow(clippy::cast_possible_truncation)] // f64 -> f32 is intentional for Bevy
#![allow(clippy::cast_precision_loss)] // grid line indices are small

use bevy::prelude::*;
use reacher_core::MAX_GRID_CELLS;
use reacher_sim::{ArmController, ArmFrame};

use crate::config::VizConfig;
use crate::convert::vec2_from_point;

/// Line segments of a grid through `origin`, clipped to a `extent`-sized
/// rectangle centred on it.
///
/// Empty when the grid would need more than [`MAX_GRID_CELLS`] cells across
/// either axis.
pub fn grid_lines(origin: Vec2, cell_size: f32, extent: Vec2) -> Vec<(Vec2, Vec2)> {
    if !(cell_size.is_finite() && cell_size > 0.0) {
        return Vec::new();
    }
    let half = extent / 2.0;
    let max_steps = (MAX_GRID_CELLS / 2) as f32;
    let (steps_x, steps_y) = ((half.x / cell_size).floor(), (half.y / cell_size).floor());
    if !(steps_x <= max_steps && steps_y <= max_steps) {
        return Vec::new();
    }
    let (steps_x, steps_y) = (steps_x as i32, steps_y as i32);

    let vertical = (-steps_x..=steps_x).map(|i| {
        let x = (i as f32).mul_add(cell_size, origin.x);
        (Vec2::new(x, origin.y - half.y), Vec2::new(x, origin.y + half.y))
    });
    let horizontal = (-steps_y..=steps_y).map(|j| {
        let y = (j as f32).mul_add(cell_size, origin.y);
        (Vec2::new(origin.x - half.x, y), Vec2::new(origin.x + half.x, y))
    });
    vertical.chain(horizontal).collect()
}

/// Draw the targeting grid, with the pivot axes highlighted.
pub fn draw_grid(
    mut gizmos: Gizmos,
    frame: Res<ArmFrame>,
    controller: Res<ArmController>,
    config: Res<VizConfig>,
) {
    if !config.show_grid {
        return;
    }
    let origin = vec2_from_point(&frame.pivot);
    let cell = controller.grid().cell_size() as f32;
    for (start, end) in grid_lines(origin, cell, config.grid_extent) {
        gizmos.line_2d(start, end, config.colors.grid);
    }

    let half = config.grid_extent / 2.0;
    gizmos.line_2d(
        Vec2::new(origin.x - half.x, origin.y),
        Vec2::new(origin.x + half.x, origin.y),
        config.colors.axes,
    );
    gizmos.line_2d(
        Vec2::new(origin.x, origin.y - half.y),
        Vec2::new(origin.x, origin.y + half.y),
        config.colors.axes,
    );
}

/// Draw the inner and outer reach circles.
pub fn draw_reach(mut gizmos: Gizmos, frame: Res<ArmFrame>, config: Res<VizConfig>) {
    if !config.show_reach {
        return;
    }
    let pivot = vec2_from_point(&frame.pivot);
    gizmos.circle_2d(pivot, frame.max_reach as f32, config.colors.reach);
    if frame.min_reach > 0.0 {
        gizmos.circle_2d(pivot, frame.min_reach as f32, config.colors.reach);
    }
}

/// Draw both segments and the three joints.
pub fn draw_arm(mut gizmos: Gizmos, frame: Res<ArmFrame>, config: Res<VizConfig>) {
    let pivot = vec2_from_point(&frame.pivot);
    let elbow = vec2_from_point(&frame.joint2);
    let tip = vec2_from_point(&frame.end_effector);

    gizmos.line_2d(pivot, elbow, config.colors.upper_arm);
    gizmos.line_2d(elbow, tip, config.colors.lower_arm);
    for joint in [pivot, elbow, tip] {
        gizmos.circle_2d(joint, config.joint_radius, config.colors.joint);
    }
}

/// Mark the last accepted target.
pub fn draw_target(mut gizmos: Gizmos, frame: Res<ArmFrame>, config: Res<VizConfig>) {
    let Some(target) = frame.target_point else {
        return;
    };
    let color = if frame.settled {
        config.colors.target
    } else {
        config.colors.target_pending
    };
    gizmos.cross_2d(vec2_from_point(&target), config.target_size, color);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
