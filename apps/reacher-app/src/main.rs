//! Reacher: a two-link planar arm that follows clicked or typed targets.
//!
//! Provides four modes of operation:
//! - `viz`: Open the interactive window (default)
//! - `headless`: Drive the arm through scripted targets and report settling
//! - `solve`: One-shot inverse kinematics for a single target
//! - `info`: Print workspace crate versions and configuration

mod headless;
mod solve;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use bevy::prelude::*;
use clap::{Parser, Subcommand};
use reacher_core::{ConfigError, Point2D, SceneConfig};
use reacher_ik::reachability;
use reacher_sim::ReacherSimPlugin;
use reacher_teleop::{InputError, parse_grid_coords};
use reacher_viz::ReacherVizPlugin;
use tracing_subscriber::EnvFilter;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Two-link planar arm with inverse kinematics and smoothed motion.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Scene configuration (TOML).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive window.
    Viz,

    /// Run scripted targets without a window and print when each settles.
    Headless {
        /// Target as "x,y" or "x y"; repeat for a sequence.
        #[arg(short, long = "target", value_parser = parse_target, allow_hyphen_values = true)]
        targets: Vec<(f64, f64)>,

        /// Interpret targets as grid cells relative to the pivot.
        #[arg(short, long)]
        grid: bool,

        /// Frame budget per target.
        #[arg(short, long, default_value_t = 5000)]
        max_frames: usize,
    },

    /// Solve inverse kinematics once and print both branches.
    #[command(allow_negative_numbers = true)]
    Solve {
        /// Target x in world units.
        x: f64,

        /// Target y in world units.
        y: f64,

        /// Shoulder angle (rad) before the solve, for branch selection.
        #[arg(short, long)]
        previous: Option<f64>,
    },

    /// Print crate information.
    Info,
}

fn parse_target(s: &str) -> Result<(f64, f64), InputError> {
    parse_grid_coords(s)
}

fn load_config(path: Option<&Path>) -> Result<SceneConfig, ConfigError> {
    path.map_or_else(|| Ok(SceneConfig::default()), SceneConfig::from_file)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

// ---------------------------------------------------------------------------
// Mode implementations
// ---------------------------------------------------------------------------

#[allow(clippy::cast_possible_truncation)]
fn run_viz(config: SceneConfig) {
    let [width, height] = config.grid.extent;
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Reacher".into(),
                resolution: (width as f32, height as f32).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(config)
        .add_plugins(ReacherSimPlugin)
        .add_plugins(ReacherVizPlugin)
        .run();
}

fn run_headless(config: SceneConfig, targets: &[(f64, f64)], grid: bool, max_frames: usize) {
    let commands = headless::target_commands(targets, grid);
    let run = headless::run_commands(config, &commands, max_frames);

    for (i, report) in run.reports.iter().enumerate() {
        println!("target {}: {report}", i + 1);
    }

    let layout = run.layout;
    let [a1, a2] = run.frame.degrees();
    println!();
    println!("frames:       {}", run.total_frames);
    println!("angles:       {a1:.3}°, {a2:.3}° ({})", run.frame.branch);
    println!(
        "elbow:        ({:.3}, {:.3})",
        layout.joint2.x, layout.joint2.y
    );
    println!(
        "end effector: ({:.3}, {:.3})",
        layout.end_effector.x, layout.end_effector.y
    );
}

fn run_solve(config: &SceneConfig, x: f64, y: f64, previous: Option<f64>) -> ExitCode {
    let (pivot, arm) = match (config.pivot_point(), config.arm.arm()) {
        (Ok(pivot), Ok(arm)) => (pivot, arm),
        (Err(err), _) | (_, Err(err)) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let target = Point2D::new(x, y);
    match solve::describe_solve(&pivot, &target, &arm, previous) {
        Ok((_, text)) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) if err.is_unreachable() => {
            let verdict = reachability(&pivot, &target, &arm);
            eprintln!("error: {err} (target is {})", verdict.label());
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_info(config: &SceneConfig) {
    println!("reacher v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("crates:");
    println!("  reacher-core     {}", env!("CARGO_PKG_VERSION"));
    println!("  reacher-ik       {}", env!("CARGO_PKG_VERSION"));
    println!("  reacher-anim     {}", env!("CARGO_PKG_VERSION"));
    println!("  reacher-teleop   {}", env!("CARGO_PKG_VERSION"));
    println!("  reacher-sim      {}", env!("CARGO_PKG_VERSION"));
    println!("  reacher-viz      {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("scene:");
    println!("  pivot      ({}, {})", config.pivot[0], config.pivot[1]);
    println!("  segments   L1={} L2={}", config.arm.l1, config.arm.l2);
    println!(
        "  animation  smoothing={} snap_epsilon={}",
        config.animation.smoothing, config.animation.snap_epsilon
    );
    println!(
        "  grid       cell={} extent={}x{}",
        config.grid.cell_size, config.grid.extent[0], config.grid.extent[1]
    );
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Some(Commands::Viz) | None => run_viz(config),
        Some(Commands::Headless {
            targets,
            grid,
            max_frames,
        }) => {
            init_logging();
            run_headless(config, &targets, grid, max_frames);
        }
        Some(Commands::Solve { x, y, previous }) => {
            init_logging();
            return run_solve(&config, x, y, previous);
        }
        Some(Commands::Info) => run_info(&config),
    }
    ExitCode::SUCCESS
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn headless_parses_repeated_targets() {
        let cli = Cli::parse_from([
            "reacher",
            "headless",
            "--target",
            "10,20",
            "--target",
            "-30 5",
            "--max-frames",
            "50",
        ]);
        let Some(Commands::Headless {
            targets,
            grid,
            max_frames,
        }) = cli.command
        else {
            panic!("expected headless");
        };
        assert_eq!(targets, vec![(10.0, 20.0), (-30.0, 5.0)]);
        assert!(!grid);
        assert_eq!(max_frames, 50);
    }

    #[test]
    fn headless_rejects_bad_target() {
        assert!(Cli::try_parse_from(["reacher", "headless", "--target", "10"]).is_err());
    }

    #[test]
    fn solve_accepts_negative_coordinates() {
        let cli = Cli::parse_from(["reacher", "solve", "-50", "25.5", "--previous", "0.3"]);
        let Some(Commands::Solve { x, y, previous }) = cli.command else {
            panic!("expected solve");
        };
        assert_eq!((x, y, previous), (-50.0, 25.5, Some(0.3)));
    }

    #[test]
    fn global_config_flag() {
        let cli = Cli::parse_from(["reacher", "info", "--config", "scene.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("scene.toml")));
    }

    #[test]
    fn load_config_defaults_without_path() {
        assert_eq!(load_config(None).unwrap(), SceneConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "pivot = [400.0, 300.0]\n\n[arm]\nl1 = 120.0\nl2 = 80.0").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.pivot, [400.0, 300.0]);
        assert!((config.arm.l1 - 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn load_config_rejects_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[arm]\nl1 = -1.0").unwrap();

        assert!(matches!(
            load_config(Some(file.path())),
            Err(ConfigError::InvalidSegmentLength { segment: 1, .. })
        ));
    }
}
