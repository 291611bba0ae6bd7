//! Shared test fixtures and utilities for Reacher crates.
//!
//! Provides standard arm geometries, deterministic target generators and
//! helpers for driving a Bevy app running [`ReacherSimPlugin`](reacher_sim::ReacherSimPlugin).

pub mod app;
pub mod fixtures;
pub mod rng;
pub mod steps;

// ---------------------------------------------------------------------------
// Re-exports for convenience
// ---------------------------------------------------------------------------

pub use app::{minimal_test_app, sim_test_app};
pub use fixtures::{equal_arm, scene_with_arm, unequal_arm};
pub use rng::{random_reachable_target, random_unreachable_target, seeded_rng};
pub use steps::{push_command, run_until_settled, step_n};
