//! Drop/control state machine for the held fruit.
//!
//! Aiming: a held fruit sits at the spawn height and can be nudged sideways.
//! Drop: the fruit becomes dynamic and the controller enters Cooldown.
//! Cooldown: input is ignored until the timer ends, then the next fruit is presented.

use bevy::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use crate::app::state::RunState;
use crate::core::components::{FruitRadius, HeldFruit};
use crate::core::config::GameConfig;
use crate::core::system::system_order::PrePhysicsSet;
use crate::gameplay::fruits::FruitTable;
use crate::gameplay::spawn::{release_fruit, spawn_fruit_entity, FruitSpawnMode};
use crate::gameplay::well::ActiveWell;
use crate::interaction::inputmap::types::{actions, InputMap};

#[derive(Debug, Clone)]
pub enum DropPhase {
    Aiming,
    Cooldown(Timer),
}

#[derive(Resource, Debug, Clone)]
pub struct DropController {
    pub phase: DropPhase,
    /// Tier of the held fruit, if one is presented.
    pub current: Option<usize>,
    /// Tier shown in the preview; becomes `current` on the next presentation.
    pub next: Option<usize>,
    pub drops: u32,
}

impl Default for DropController {
    fn default() -> Self {
        Self {
            phase: DropPhase::Aiming,
            current: None,
            next: None,
            drops: 0,
        }
    }
}

impl DropController {
    pub fn is_aiming(&self) -> bool {
        matches!(self.phase, DropPhase::Aiming)
    }

    /// Promotes `next` to `current` (rolling when absent) and rolls a fresh `next`.
    pub fn present(&mut self, mut roll: impl FnMut() -> usize) -> usize {
        let current = self.next.take().unwrap_or_else(&mut roll);
        self.current = Some(current);
        self.next = Some(roll());
        current
    }

    /// Aiming -> Cooldown. Returns false when not aiming or nothing is held.
    pub fn release(&mut self, cooldown_secs: f32) -> bool {
        if !self.is_aiming() || self.current.is_none() {
            return false;
        }
        self.current = None;
        self.drops += 1;
        self.phase = DropPhase::Cooldown(Timer::from_seconds(
            cooldown_secs.max(0.0),
            TimerMode::Once,
        ));
        true
    }

    /// Advances the cooldown; returns true on the frame it ends.
    pub fn tick(&mut self, delta: std::time::Duration) -> bool {
        let DropPhase::Cooldown(timer) = &mut self.phase else {
            return false;
        };
        if timer.tick(delta).finished() {
            self.phase = DropPhase::Aiming;
            return true;
        }
        false
    }
}

/// Source of fruit rolls; seeded from config for reproducible runs.
#[derive(Resource, Debug)]
pub struct FruitRng(pub StdRng);

impl FromWorld for FruitRng {
    fn from_world(world: &mut World) -> Self {
        let seed = world.get_resource::<GameConfig>().and_then(|cfg| cfg.seed);
        match seed {
            Some(s) => Self(StdRng::seed_from_u64(s)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

/// Keeps a circle of `radius` between the inner wall faces.
pub fn clamp_to_well(x: f32, radius: f32, inner_left: f32, inner_right: f32) -> f32 {
    let lo = inner_left + radius;
    let hi = inner_right - radius;
    if lo > hi {
        return (inner_left + inner_right) * 0.5;
    }
    x.clamp(lo, hi)
}

pub struct DropPlugin;

impl Plugin for DropPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DropController>()
            .init_resource::<FruitRng>()
            .add_systems(OnEnter(RunState::Playing), reset_controller)
            .add_systems(
                Update,
                (
                    tick_drop_cooldown,
                    present_next_fruit,
                    nudge_held_fruit,
                    release_held_fruit,
                )
                    .chain()
                    .in_set(PrePhysicsSet)
                    .run_if(in_state(RunState::Playing)),
            );
    }
}

fn reset_controller(mut controller: ResMut<DropController>) {
    *controller = DropController::default();
}

fn tick_drop_cooldown(time: Res<Time>, mut controller: ResMut<DropController>) {
    if controller.tick(time.delta()) {
        debug!(target: "drop", "Cooldown finished");
    }
}

fn present_next_fruit(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    well: Res<ActiveWell>,
    table: Res<FruitTable>,
    mut rng: ResMut<FruitRng>,
    mut controller: ResMut<DropController>,
    q_held: Query<(), With<HeldFruit>>,
) {
    if !controller.is_aiming() || !q_held.is_empty() {
        return;
    }
    let pool = cfg.drop.spawn_pool;
    let tier = controller.present(|| table.roll_droppable(&mut rng.0, pool));
    let Some(kind) = table.get(tier) else {
        error!(target: "drop", "Rolled tier {tier} outside table of {}", table.len());
        return;
    };
    let x = clamp_to_well(
        cfg.drop.spawn_x,
        kind.radius,
        well.inner_left(),
        well.inner_right(),
    );
    spawn_fruit_entity(
        &mut commands,
        kind,
        tier,
        Vec2::new(x, cfg.drop.spawn_y),
        FruitSpawnMode::Held,
        &cfg,
    );
    info!(target: "drop", "Presenting '{}' (tier {tier}), next tier {:?}", kind.name, controller.next);
}

fn nudge_held_fruit(
    time: Res<Time>,
    cfg: Res<GameConfig>,
    well: Res<ActiveWell>,
    input: Res<InputMap>,
    controller: Res<DropController>,
    mut q_held: Query<(&mut Transform, &FruitRadius), With<HeldFruit>>,
) {
    if !controller.is_aiming() {
        return;
    }
    let dir = input.axis(actions::MOVE_LEFT, actions::MOVE_RIGHT);
    if dir == 0.0 {
        return;
    }
    let dx = dir * cfg.drop.nudge_speed * time.delta_secs();
    for (mut tf, radius) in &mut q_held {
        tf.translation.x = clamp_to_well(
            tf.translation.x + dx,
            radius.0,
            well.inner_left(),
            well.inner_right(),
        );
    }
}

fn release_held_fruit(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    input: Res<InputMap>,
    mut controller: ResMut<DropController>,
    q_held: Query<(Entity, &Transform), With<HeldFruit>>,
) {
    if !input.just_pressed(actions::DROP) {
        return;
    }
    let Ok((entity, tf)) = q_held.single() else {
        return;
    };
    if controller.release(cfg.drop.cooldown_secs) {
        release_fruit(&mut commands, entity);
        info!(target: "drop", "Dropped at x={:.1} (drop #{})", tf.translation.x, controller.drops);
    }
}
