//! Types, errors, scene configuration and frame ordering for Reacher.
//!
//! Reacher animates a planar revolute-revolute arm towards targets picked by
//! the user. This crate holds the vocabulary shared by every other crate:
//!
//! - [`types`]: [`Point2D`](types::Point2D), [`ArmConfig`], [`JointAngles`],
//!   [`ElbowBranch`]
//! - [`error`]: the error taxonomy ([`ConfigError`], [`IkError`])
//! - [`config`]: TOML-backed [`SceneConfig`]
//! - [`ReacherSet`]: the per-frame input → solve → animate → render ordering

pub mod config;
pub mod error;
pub mod types;

use bevy::prelude::*;

pub use config::{AnimationConfig, GridConfig, MAX_GRID_CELLS, SceneConfig, SegmentConfig};
pub use error::{ConfigError, IkError, ReacherError};
pub use types::{ArmConfig, ElbowBranch, JointAngles, Point2D};

// ---------------------------------------------------------------------------
// ReacherSet
// ---------------------------------------------------------------------------

/// Per-frame phases, run in declaration order inside `Update`.
///
/// The arm state is a single resource; chaining the phases keeps the
/// input → solve → tick → render loop strictly sequential.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReacherSet {
    /// Input sources push commands.
    Input,
    /// Commands are validated and targets solved.
    Solve,
    /// The animator advances current angles by one tick.
    Animate,
    /// Render snapshots are refreshed and drawn.
    Render,
}

// ---------------------------------------------------------------------------
// ReacherCorePlugin
// ---------------------------------------------------------------------------

/// Registers [`ReacherSet`] ordering and the [`SceneConfig`] resource.
pub struct ReacherCorePlugin;

impl Plugin for ReacherCorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneConfig>().configure_sets(
            Update,
            (
                ReacherSet::Input,
                ReacherSet::Solve,
                ReacherSet::Animate,
                ReacherSet::Render,
            )
                .chain(),
        );
    }
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

pub mod prelude {
    pub use crate::config::SceneConfig;
    pub use crate::error::{ConfigError, IkError, ReacherError};
    pub use crate::types::{ArmConfig, ElbowBranch, JointAngles, Point2D};
    pub use crate::{ReacherCorePlugin, ReacherSet};
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_plugin_inserts_default_config() {
        let mut app = App::new();
        app.add_plugins(ReacherCorePlugin);
        app.finish();
        app.cleanup();
        app.update();

        let config = app.world().resource::<SceneConfig>();
        assert_eq!(*config, SceneConfig::default());
    }

    #[test]
    fn core_plugin_keeps_preinserted_config() {
        let custom = SceneConfig {
            pivot: [5.0, 5.0],
            ..SceneConfig::default()
        };
        let mut app = App::new();
        app.insert_resource(custom.clone());
        app.add_plugins(ReacherCorePlugin);
        app.update();

        assert_eq!(*app.world().resource::<SceneConfig>(), custom);
    }
}
