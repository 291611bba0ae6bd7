//! Scripted runs without a window.

use std::fmt;

use bevy::prelude::*;
use reacher_core::{Point2D, SceneConfig};
use reacher_ik::ArmLayout;
use reacher_sim::{ArmController, ArmFrame, ReacherSimPlugin, SimStats};
use reacher_teleop::{ArmCommand, ArmCommander};
use tracing::{info, warn};

/// How one scripted target ended.
#[derive(Debug, Clone, PartialEq)]
pub enum TargetResult {
    /// The arm came to rest after `frames` frames.
    Settled { frames: usize },
    /// The controller refused the target.
    Rejected(String),
    /// Still moving when the frame budget ran out.
    TimedOut { frames: usize },
}

/// Report line for one target.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetReport {
    pub command: ArmCommand,
    pub result: TargetResult,
}

impl fmt::Display for TargetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            TargetResult::Settled { frames } => {
                write!(f, "{}: settled after {frames} frames", self.command)
            }
            TargetResult::Rejected(reason) => write!(f, "{}: rejected: {reason}", self.command),
            TargetResult::TimedOut { frames } => {
                write!(f, "{}: still moving after {frames} frames", self.command)
            }
        }
    }
}

/// Outcome of a whole run.
#[derive(Debug, Clone)]
pub struct HeadlessRun {
    pub reports: Vec<TargetReport>,
    pub layout: ArmLayout,
    pub frame: ArmFrame,
    pub total_frames: u64,
}

impl HeadlessRun {
    /// Number of targets the arm came to rest on.
    pub fn settled_count(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| matches!(r.result, TargetResult::Settled { .. }))
            .count()
    }
}

/// Build the simulation app for `config`.
pub fn build_app(config: SceneConfig) -> App {
    let mut app = App::new();
    app.insert_resource(config);
    app.add_plugins(ReacherSimPlugin);
    app.finish();
    app.cleanup();
    app
}

/// Send each command in turn and run until the arm settles or
/// `max_frames` frames pass.
pub fn run_commands(config: SceneConfig, commands: &[ArmCommand], max_frames: usize) -> HeadlessRun {
    let mut app = build_app(config);
    info!(targets = commands.len(), max_frames, "Headless run");
    let reports = commands
        .iter()
        .map(|&command| {
            let result = run_one(&mut app, command, max_frames);
            match &result {
                TargetResult::Settled { frames } => info!(%command, frames, "Target settled"),
                TargetResult::Rejected(reason) => warn!(%command, %reason, "Target rejected"),
                TargetResult::TimedOut { frames } => warn!(%command, frames, "Target timed out"),
            }
            TargetReport { command, result }
        })
        .collect();

    let world = app.world();
    let run = HeadlessRun {
        reports,
        layout: world.resource::<ArmController>().layout(),
        frame: *world.resource::<ArmFrame>(),
        total_frames: world.resource::<SimStats>().frames,
    };
    info!(
        settled = run.settled_count(),
        total = run.reports.len(),
        frames = run.total_frames,
        "Headless run finished"
    );
    run
}

/// Commands for a list of targets, in world units or grid cells.
pub fn target_commands(targets: &[(f64, f64)], grid: bool) -> Vec<ArmCommand> {
    targets
        .iter()
        .map(|&(x, y)| {
            if grid {
                ArmCommand::MoveToGrid { x, y }
            } else {
                ArmCommand::MoveTo(Point2D::new(x, y))
            }
        })
        .collect()
}

fn run_one(app: &mut App, command: ArmCommand, max_frames: usize) -> TargetResult {
    let rejected_before = app.world().resource::<SimStats>().rejected;
    app.world_mut().resource_mut::<ArmCommander>().push(command);

    for frame in 1..=max_frames {
        app.update();

        let stats = app.world().resource::<SimStats>();
        if frame == 1 && stats.rejected > rejected_before {
            let reason = stats.last_outcome.clone().unwrap_or_default();
            return TargetResult::Rejected(reason);
        }
        if app.world().resource::<ArmFrame>().settled {
            return TargetResult::Settled { frames: frame };
        }
    }
    TargetResult::TimedOut { frames: max_frames }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
