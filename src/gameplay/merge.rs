use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use std::collections::HashSet;

use crate::app::state::RunState;
use crate::core::components::{Fruit, FruitTier, HeldFruit};
use crate::core::config::GameConfig;
use crate::core::system::system_order::PostPhysicsAdjustSet;
use crate::gameplay::fruits::FruitTable;
use crate::gameplay::score::Score;
use crate::gameplay::spawn::{spawn_fruit_entity, FruitSpawnMode};

/// Emitted once per merge after the two source fruits were consumed.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct FruitMerged {
    pub from_tier: usize,
    pub to_tier: usize,
    pub position: Vec2,
    pub points: u64,
    pub merged: Entity,
}

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct MergeSet;

pub struct MergePlugin;

impl Plugin for MergePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<CollisionEvent>()
            .add_event::<FruitMerged>()
            .configure_sets(Update, MergeSet.in_set(PostPhysicsAdjustSet))
            .add_systems(
                Update,
                merge_on_contact
                    .in_set(MergeSet)
                    .run_if(in_state(RunState::Playing)),
            );
    }
}

/// Resolves same-tier contacts reported by the physics engine into next-tier fruits.
/// Each fruit is consumed at most once per frame even if it appears in several pairs.
pub fn merge_on_contact(
    mut commands: Commands,
    mut collisions: EventReader<CollisionEvent>,
    cfg: Res<GameConfig>,
    table: Res<FruitTable>,
    mut score: ResMut<Score>,
    mut merged_writer: EventWriter<FruitMerged>,
    q_fruits: Query<(&FruitTier, &Transform), (With<Fruit>, Without<HeldFruit>)>,
) {
    let mut consumed: HashSet<Entity> = HashSet::new();
    for ev in collisions.read() {
        let CollisionEvent::Started(a, b, _flags) = ev else {
            continue;
        };
        if a == b || consumed.contains(a) || consumed.contains(b) {
            continue;
        }
        let Ok((tier_a, tf_a)) = q_fruits.get(*a) else { continue; };
        let Ok((tier_b, tf_b)) = q_fruits.get(*b) else { continue; };
        let Some(outcome) = table.merge(tier_a.0, tier_b.0) else {
            continue;
        };
        let Some(kind) = table.get(outcome.tier) else {
            continue;
        };
        // Equal radii: the contact point is the midpoint between the centres.
        let position = (tf_a.translation.truncate() + tf_b.translation.truncate()) * 0.5;

        consumed.insert(*a);
        consumed.insert(*b);
        commands.entity(*a).try_despawn();
        commands.entity(*b).try_despawn();
        let merged = spawn_fruit_entity(
            &mut commands,
            kind,
            outcome.tier,
            position,
            FruitSpawnMode::Merged,
            &cfg,
        );
        score.award(outcome.points);
        info!(
            target: "merge",
            "tier {} + tier {} -> '{}' at ({:.0}, {:.0}) +{} (score {})",
            tier_a.0,
            tier_b.0,
            kind.name,
            position.x,
            position.y,
            outcome.points,
            score.current
        );
        merged_writer.write(FruitMerged {
            from_tier: tier_a.0,
            to_tier: outcome.tier,
            position,
            points: outcome.points,
            merged,
        });
    }
}
