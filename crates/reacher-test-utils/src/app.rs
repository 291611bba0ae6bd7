//! Bevy test app builders with various plugin combinations.

use bevy::prelude::*;
use reacher_core::SceneConfig;

/// Create a minimal test app with only the core plugin.
///
/// Provides `ReacherSet` ordering and the default `SceneConfig` but no
/// controller or per-frame systems.
pub fn minimal_test_app() -> App {
    let mut app = App::new();
    app.add_plugins(reacher_core::ReacherCorePlugin);
    app.finish();
    app.cleanup();
    app
}

/// Create a test app running the full simulation loop for `config`.
pub fn sim_test_app(config: SceneConfig) -> App {
    let mut app = App::new();
    app.insert_resource(config);
    app.add_plugins(reacher_sim::ReacherSimPlugin);
    app.finish();
    app.cleanup();
    app
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use reacher_core::Point2D;
    use reacher_sim::{ArmController, ArmFrame};

    use super::*;

    #[test]
    fn minimal_app_builds() {
        let mut app = minimal_test_app();
        app.update();
        assert!(app.world().get_resource::<SceneConfig>().is_some());
        assert!(app.world().get_resource::<ArmController>().is_none());
    }

    #[test]
    fn sim_app_uses_config() {
        let mut app = sim_test_app(SceneConfig {
            pivot: [-20.0, 15.0],
            ..SceneConfig::default()
        });
        app.update();
        assert_eq!(
            app.world().resource::<ArmFrame>().pivot,
            Point2D::new(-20.0, 15.0)
        );
    }
}
