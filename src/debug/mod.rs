//! Debug module: feature gated stats overlay, physics wireframe toggle and periodic logging.
//! Built only when compiled with `--features debug`.

#[cfg(feature = "debug")]
pub mod keys; // pub for testing
#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
mod modes;
#[cfg(feature = "debug")]
mod overlay;
#[cfg(feature = "debug")]
mod stats;

#[cfg(feature = "debug")]
pub use modes::*;

#[cfg(feature = "debug")]
use crate::core::system::system_order::PostPhysicsAdjustSet;
#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct DebugPreRenderSet;

#[cfg(feature = "debug")]
pub struct DebugPlugin;
#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use bevy_rapier2d::render::DebugRenderContext;
        use keys::debug_key_input_system;
        use logging::debug_logging_system;
        use overlay::{debug_overlay_spawn, debug_overlay_update};
        use stats::debug_stats_collect_system;

        // Context only exists when the rapier debug render plugin was added.
        fn sync_rapier_wireframe(
            state: Res<modes::DebugState>,
            ctx: Option<ResMut<DebugRenderContext>>,
        ) {
            if let Some(mut c) = ctx {
                if c.enabled != state.rapier_wireframe {
                    c.enabled = state.rapier_wireframe;
                }
            }
        }

        let wireframe = app
            .world()
            .get_resource::<crate::core::config::GameConfig>()
            .is_some_and(|cfg| cfg.rapier_debug);
        app.insert_resource(modes::DebugState {
            rapier_wireframe: wireframe,
            ..Default::default()
        })
        .init_resource::<modes::DebugStats>()
        .configure_sets(Update, DebugPreRenderSet.after(PostPhysicsAdjustSet))
        .add_systems(Startup, debug_overlay_spawn)
        .add_systems(
            Update,
            (
                debug_key_input_system,
                debug_stats_collect_system,
                sync_rapier_wireframe,
                debug_logging_system,
                debug_overlay_update,
            )
                .chain()
                .in_set(DebugPreRenderSet),
        );
    }
}

#[cfg(not(feature = "debug"))]
pub struct DebugPlugin;
#[cfg(not(feature = "debug"))]
impl bevy::prelude::Plugin for DebugPlugin {
    fn build(&self, _app: &mut bevy::prelude::App) {}
}
