use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use std::collections::HashMap;

use crate::app::state::RunState;
use crate::core::components::{DeathLine, Fruit, FruitTier, HeldFruit, LineContact};
use crate::core::config::GameConfig;
use crate::core::system::system_order::PostPhysicsAdjustSet;
use crate::gameplay::merge::MergeSet;

pub struct DeathLinePlugin;

impl Plugin for DeathLinePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<CollisionEvent>().add_systems(
            Update,
            (track_line_contacts, check_death_line)
                .chain()
                .in_set(PostPhysicsAdjustSet)
                .after(MergeSet)
                .run_if(in_state(RunState::Playing)),
        );
    }
}

/// Mirrors sensor start/stop events onto the fruit as a `LineContact` timer.
/// Events are folded in order so only the last one per fruit in a batch counts.
pub fn track_line_contacts(
    mut commands: Commands,
    mut collisions: EventReader<CollisionEvent>,
    q_line: Query<(), With<DeathLine>>,
    q_fruits: Query<Option<&LineContact>, (With<Fruit>, Without<HeldFruit>)>,
) {
    let mut touching: HashMap<Entity, bool> = HashMap::new();
    for ev in collisions.read() {
        let (a, b, started) = match ev {
            CollisionEvent::Started(a, b, _) => (*a, *b, true),
            CollisionEvent::Stopped(a, b, _) => (*a, *b, false),
        };
        let fruit = if q_line.contains(a) {
            b
        } else if q_line.contains(b) {
            a
        } else {
            continue;
        };
        touching.insert(fruit, started);
    }
    for (fruit, on_line) in touching {
        let Ok(contact) = q_fruits.get(fruit) else {
            continue;
        };
        match (on_line, contact.is_some()) {
            (true, false) => {
                commands.entity(fruit).try_insert(LineContact::default());
            }
            (false, true) => {
                commands.entity(fruit).try_remove::<LineContact>();
            }
            _ => {}
        }
    }
}

/// Ends the run once a fruit has rested on the line for the grace period.
pub fn check_death_line(
    time: Res<Time>,
    cfg: Res<GameConfig>,
    mut q_contacts: Query<(Entity, &FruitTier, &mut LineContact)>,
    mut next_state: ResMut<NextState<RunState>>,
) {
    let dt = time.delta_secs();
    let grace = cfg.game_over.grace_secs.max(0.0);
    for (entity, tier, mut contact) in &mut q_contacts {
        contact.elapsed += dt;
        if contact.elapsed >= grace {
            warn!(
                target: "game_over",
                "Fruit {:?} (tier {}) rested on the death line for {:.2}s",
                entity,
                tier.0,
                contact.elapsed
            );
            next_state.set(RunState::GameOver);
            return;
        }
    }
}
