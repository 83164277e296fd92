use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::{Fruit, FruitRadius, FruitTier, HeldFruit, WorldEntity};
use crate::core::config::GameConfig;
use crate::gameplay::fruits::FruitKind;

/// Physics state a fruit is spawned in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FruitSpawnMode {
    /// Waiting at the spawn point; collider disabled and body fixed.
    Held,
    /// Product of a merge; dynamic immediately.
    Merged,
}

/// Spawns a fruit body. Visuals are attached separately by the rendering plugin.
pub fn spawn_fruit_entity(
    commands: &mut Commands,
    kind: &FruitKind,
    tier: usize,
    pos: Vec2,
    mode: FruitSpawnMode,
    cfg: &GameConfig,
) -> Entity {
    let restitution = match mode {
        FruitSpawnMode::Held => cfg.fruit.restitution,
        FruitSpawnMode::Merged => cfg.fruit.merged_restitution,
    };
    let mut entity = commands.spawn((
        Transform::from_xyz(pos.x, pos.y, 0.0),
        Collider::ball(kind.radius),
        Velocity::zero(),
        Restitution::coefficient(restitution),
        Friction::coefficient(cfg.fruit.friction),
        ActiveEvents::COLLISION_EVENTS,
        Fruit,
        FruitTier(tier),
        FruitRadius(kind.radius),
        WorldEntity,
        Name::new(kind.name),
    ));
    match mode {
        FruitSpawnMode::Held => {
            entity.insert((RigidBody::Fixed, ColliderDisabled, HeldFruit));
        }
        FruitSpawnMode::Merged => {
            entity.insert(RigidBody::Dynamic);
        }
    }
    entity.id()
}

/// Turns the held fruit into a falling body.
pub fn release_fruit(commands: &mut Commands, entity: Entity) {
    commands
        .entity(entity)
        .remove::<(HeldFruit, ColliderDisabled)>()
        .insert(RigidBody::Dynamic);
}
