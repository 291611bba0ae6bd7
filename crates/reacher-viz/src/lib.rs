//! Interactive 2D visualization for Reacher.
//!
//! `reacher-viz` provides a windowed Bevy application with:
//! - A 2D camera centred on the pivot
//! - Gizmo rendering of the grid, reach annulus, arm and target
//! - Mouse targeting (grid-snapped) and right-click recentring
//! - An egui side panel with typed coordinate entry and segment sliders
//!
//! # Usage
//!
//! ```no_run
//! use bevy::prelude::*;
//! use reacher_viz::ReacherVizPlugin;
//!
//! App::new()
//!     .add_plugins(DefaultPlugins)
//!     .add_plugins(reacher_sim::ReacherSimPlugin)
//!     .add_plugins(ReacherVizPlugin)
//!     .run();
//! ```

pub mod camera;
pub mod config;
pub mod convert;
pub mod draw;
pub mod input;
pub mod mode;
pub mod plugin;
pub mod ui;

pub use config::{VizColors, VizConfig};
pub use mode::VizMode;
pub use plugin::ReacherVizPlugin;
