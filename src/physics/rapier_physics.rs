use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::config::GameConfig;

pub const PIXELS_PER_METER: f32 = 100.0;

pub struct PhysicsSetupPlugin; // our wrapper to configure Rapier

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(
            PIXELS_PER_METER,
        ))
        .add_systems(Update, sync_gravity);
    }
}

/// Keeps Rapier's gravity equal to `GameConfig.gravity` (also picks up hot reloads).
fn sync_gravity(mut rapier_cfg: Query<&mut RapierConfiguration>, game_cfg: Res<GameConfig>) {
    let target = Vect::new(0.0, game_cfg.gravity.y);
    for mut cfg in &mut rapier_cfg {
        if cfg.gravity != target {
            info!(target: "physics", "Gravity set to {:?}", target);
            cfg.gravity = target;
        }
    }
}
