use bevy::prelude::*;

use crate::app::game_over::GameOverPlugin;
use crate::app::state::RunStatePlugin;
use crate::debug::DebugPlugin;
use crate::gameplay::GameplayPlugin;
#[cfg(feature = "debug")]
use crate::interaction::inputmap::hot_reload::InputMapHotReloadPlugin;
use crate::interaction::inputmap::plugin::InputActionsPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::interaction::session::config_hot_reload::ConfigHotReloadPlugin;
use crate::physics::rapier_physics::PhysicsSetupPlugin;
use crate::rendering::RenderingPlugin;

/// Everything the game adds on top of `DefaultPlugins`. `GameConfig` must be inserted first.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        // States must exist before any plugin registers OnEnter/OnExit systems.
        app.add_plugins(RunStatePlugin).add_plugins((
            InputActionsPlugin,
            PhysicsSetupPlugin,
            GameplayPlugin,
            RenderingPlugin,
            GameOverPlugin,
            DebugPlugin,
            ConfigHotReloadPlugin,
            AutoClosePlugin,
            #[cfg(feature = "debug")]
            InputMapHotReloadPlugin,
        ));
    }
}
