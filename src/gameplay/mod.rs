pub mod death_line;
pub mod drop;
pub mod fruits;
pub mod merge;
pub mod score;
pub mod spawn;
pub mod well;

use bevy::prelude::*;

use crate::app::state::RunState;
use crate::core::config::GameConfig;
use crate::core::system::system_order::{PostPhysicsAdjustSet, PrePhysicsSet};
use death_line::DeathLinePlugin;
use drop::DropPlugin;
use fruits::FruitTable;
use merge::MergePlugin;
use score::ScorePlugin;
use well::WellPlugin;

/// All rules of the game without rendering or physics stepping; usable headless.
/// Expects `GameConfig` to be inserted and `RunState` to be initialised beforehand.
pub struct GameplayPlugin;

impl Plugin for GameplayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FruitTable>()
            .add_systems(OnEnter(RunState::Playing), refresh_fruit_table)
            .configure_sets(
                Update,
                (PrePhysicsSet, PostPhysicsAdjustSet.after(PrePhysicsSet)),
            )
            .add_plugins((
                WellPlugin,
                ScorePlugin,
                DropPlugin,
                MergePlugin,
                DeathLinePlugin,
            ));
    }
}

/// Picks up a theme changed by config reload; only between runs so live fruits keep their table.
fn refresh_fruit_table(cfg: Res<GameConfig>, mut table: ResMut<FruitTable>) {
    if table.theme != cfg.theme {
        info!(target: "fruits", "Theme {:?} -> {:?}", table.theme, cfg.theme);
        *table = FruitTable::for_theme(cfg.theme);
    }
}
