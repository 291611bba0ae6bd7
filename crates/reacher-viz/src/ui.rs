//! egui side panel.
//!
//! Shows the arm state, segment length sliders, typed coordinate entry and
//! loop statistics. Everything the panel changes goes through
//! [`ArmCommander`] like any other input.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};
use reacher_ik::reachability;
use reacher_sim::{ArmController, ArmFrame, SimStats};
use reacher_teleop::{ArmCommand, ArmCommander, parse_grid_coords};

use crate::config::VizConfig;
use crate::input::{Hover, UiFocus};
use crate::mode::VizMode;

const SEGMENT_RANGE: std::ops::RangeInclusive<f64> = 10.0..=300.0;

/// Text-entry state kept between frames.
#[derive(Resource, Clone, Debug, Default)]
pub struct PanelState {
    /// Raw contents of the coordinate box.
    pub entry: String,
    /// Parse error for the last submission.
    pub entry_error: Option<String>,
}

/// Parse the coordinate box and queue a grid move.
///
/// On success the box is cleared; on failure the text is kept and the
/// error shown.
pub fn submit_entry(panel: &mut PanelState, commander: &mut ArmCommander) -> bool {
    match parse_grid_coords(&panel.entry) {
        Ok((x, y)) => {
            commander.push(ArmCommand::MoveToGrid { x, y });
            panel.entry.clear();
            panel.entry_error = None;
            true
        }
        Err(err) => {
            panel.entry_error = Some(err.to_string());
            false
        }
    }
}

/// System that renders the egui side panel each frame.
#[allow(clippy::too_many_arguments, clippy::needless_pass_by_value)]
pub fn side_panel_system(
    mut contexts: EguiContexts,
    config: Res<VizConfig>,
    mut mode: ResMut<VizMode>,
    mut focus: ResMut<UiFocus>,
    mut panel: ResMut<PanelState>,
    mut commander: ResMut<ArmCommander>,
    controller: Res<ArmController>,
    frame: Res<ArmFrame>,
    stats: Res<SimStats>,
    hover: Res<Hover>,
) {
    if !config.show_panel {
        *focus = UiFocus::default();
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::SidePanel::left("reacher_panel")
        .default_width(280.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Reacher");
            ui.separator();

            entry_section(ui, &mut mode, &mut panel, &mut commander);
            ui.separator();

            arm_section(ui, &controller, &mut commander);
            ui.separator();

            state_section(ui, &frame, &controller, hover.0);
            ui.separator();

            stats_section(ui, &stats);
        });

    *focus = UiFocus {
        pointer: ctx.wants_pointer_input() || ctx.is_pointer_over_area(),
        keyboard: ctx.wants_keyboard_input(),
    };
}

fn entry_section(
    ui: &mut egui::Ui,
    mode: &mut ResMut<VizMode>,
    panel: &mut ResMut<PanelState>,
    commander: &mut ResMut<ArmCommander>,
) {
    ui.label(format!("Mode: {}", mode.label()));
    ui.small("Left click: target  Right click: recentre  C: type coordinates");

    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut panel.entry)
                .hint_text("x y (grid cells)")
                .desired_width(140.0),
        );
        let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let clicked = ui.button("Go").clicked();

        if entered || clicked {
            if submit_entry(panel, commander) {
                **mode = VizMode::Pointer;
            }
        } else if **mode == VizMode::Entry && !response.has_focus() {
            response.request_focus();
        }
    });

    if let Some(err) = &panel.entry_error {
        ui.colored_label(egui::Color32::from_rgb(200, 50, 50), err);
    }
}

fn arm_section(ui: &mut egui::Ui, controller: &ArmController, commander: &mut ResMut<ArmCommander>) {
    ui.label("Segments");

    let mut l1 = controller.arm().l1();
    let mut l2 = controller.arm().l2();
    let l1_changed = ui
        .add(egui::Slider::new(&mut l1, SEGMENT_RANGE).text("L1"))
        .changed();
    let l2_changed = ui
        .add(egui::Slider::new(&mut l2, SEGMENT_RANGE).text("L2"))
        .changed();

    if l1_changed || l2_changed {
        commander.push(ArmCommand::Resize { l1, l2 });
    }
}

fn state_section(
    ui: &mut egui::Ui,
    frame: &ArmFrame,
    controller: &ArmController,
    hover: Option<reacher_core::Point2D>,
) {
    ui.label("Arm");

    let [current1, current2] = frame.degrees();
    let [target1, target2] = frame.target.to_degrees();

    egui::Grid::new("arm_grid")
        .num_columns(2)
        .spacing([20.0, 4.0])
        .striped(true)
        .show(ui, |ui| {
            ui.label("Shoulder:");
            ui.label(format!("{current1:.1}° → {target1:.1}°"));
            ui.end_row();

            ui.label("Elbow:");
            ui.label(format!("{current2:.1}° → {target2:.1}°"));
            ui.end_row();

            ui.label("Branch:");
            ui.label(frame.branch.label());
            ui.end_row();

            ui.label("State:");
            ui.label(if frame.settled { "Settled" } else { "Moving" });
            ui.end_row();

            ui.label("Reach:");
            ui.label(format!("[{:.1}, {:.1}]", frame.min_reach, frame.max_reach));
            ui.end_row();

            ui.label("Tip:");
            ui.label(format!(
                "({:.1}, {:.1})",
                frame.end_effector.x, frame.end_effector.y
            ));
            ui.end_row();

            if let Some(target) = frame.target_point {
                let (gx, gy) = controller.grid().to_grid(&target);
                ui.label("Target:");
                ui.label(format!("({gx:.1}, {gy:.1}) cells"));
                ui.end_row();
            }

            if let Some(point) = hover {
                let (gx, gy) = controller.grid().to_grid(&point);
                let verdict = reachability(&frame.pivot, &point, controller.arm());
                ui.label("Cursor:");
                ui.label(format!("({gx:.1}, {gy:.1}) {}", verdict.label()));
                ui.end_row();
            }
        });
}

fn stats_section(ui: &mut egui::Ui, stats: &SimStats) {
    egui::CollapsingHeader::new("Statistics")
        .default_open(false)
        .show(ui, |ui| {
            egui::Grid::new("stats_grid")
                .num_columns(2)
                .spacing([20.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Frames:");
                    ui.label(format!("{}", stats.frames));
                    ui.end_row();

                    ui.label("Accepted:");
                    ui.label(format!("{}", stats.accepted));
                    ui.end_row();

                    ui.label("Rejected:");
                    ui.label(format!("{}", stats.rejected));
                    ui.end_row();

                    ui.label("Settles:");
                    ui.label(format!("{}", stats.settles));
                    ui.end_row();

                    if let Some(frame) = stats.last_settle_frame() {
                        ui.label("Last settle:");
                        ui.label(format!("frame {frame}"));
                        ui.end_row();
                    }
                });
        });

    if let Some(outcome) = &stats.last_outcome {
        ui.label(outcome);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
