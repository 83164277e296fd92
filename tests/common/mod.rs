#![allow(dead_code)]
use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

use fruit_merge::app::game_over::GameOverPlugin;
use fruit_merge::app::state::{RunState, RunStatePlugin};
use fruit_merge::core::components::{Fruit, FruitTier, HeldFruit};
use fruit_merge::core::config::GameConfig;
use fruit_merge::gameplay::GameplayPlugin;
use fruit_merge::interaction::inputmap::plugin::InputActionsPlugin;

/// Seconds advanced per `app.update()`.
pub const STEP: f32 = 0.1;

/// Headless game: rules and input only, no window, renderer or physics stepping.
pub fn headless_app() -> App {
    headless_app_with(GameConfig {
        seed: Some(7),
        ..Default::default()
    })
}

pub fn headless_app_with(cfg: GameConfig) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(
            STEP,
        )))
        .insert_resource(cfg)
        .insert_resource(ButtonInput::<KeyCode>::default())
        .insert_resource(ButtonInput::<MouseButton>::default())
        .add_plugins(RunStatePlugin)
        .add_plugins((InputActionsPlugin, GameplayPlugin, GameOverPlugin));
    // Startup + initial OnEnter(Playing); the second frame presents the first fruit.
    app.update();
    app.update();
    app
}

pub fn run_frames(app: &mut App, n: usize) {
    for _ in 0..n {
        app.update();
    }
}

pub fn press(app: &mut App, key: KeyCode) {
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(key);
}

pub fn release(app: &mut App, key: KeyCode) {
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().release(key);
}

pub fn run_state(app: &App) -> RunState {
    *app.world().resource::<State<RunState>>().get()
}

/// Released (non-held) fruits as (entity, tier, position).
pub fn loose_fruits(app: &mut App) -> Vec<(Entity, usize, Vec2)> {
    let mut q = app
        .world_mut()
        .query_filtered::<(Entity, &FruitTier, &Transform), (With<Fruit>, Without<HeldFruit>)>();
    let mut out: Vec<_> = q
        .iter(app.world())
        .map(|(e, t, tf)| (e, t.0, tf.translation.truncate()))
        .collect();
    out.sort_by_key(|(_, tier, _)| *tier);
    out
}

pub fn held_fruits(app: &mut App) -> Vec<(Entity, usize, Vec2)> {
    let mut q = app
        .world_mut()
        .query_filtered::<(Entity, &FruitTier, &Transform), With<HeldFruit>>();
    q.iter(app.world())
        .map(|(e, t, tf)| (e, t.0, tf.translation.truncate()))
        .collect()
}

/// Places a released fruit of `tier` directly into the world.
pub fn place_fruit(app: &mut App, tier: usize, pos: Vec2) -> Entity {
    use fruit_merge::gameplay::fruits::FruitTable;
    let radius = app
        .world()
        .resource::<FruitTable>()
        .get(tier)
        .map_or(10.0, |k| k.radius);
    app.world_mut()
        .spawn((
            Fruit,
            FruitTier(tier),
            fruit_merge::core::components::FruitRadius(radius),
            Transform::from_xyz(pos.x, pos.y, 0.0),
            fruit_merge::core::components::WorldEntity,
        ))
        .id()
}
