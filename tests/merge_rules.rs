mod common;

use bevy::prelude::*;
use bevy_rapier2d::prelude::CollisionEvent;
use bevy_rapier2d::rapier::geometry::CollisionEventFlags;

use common::*;
use fruit_merge::app::state::RunState;
use fruit_merge::gameplay::merge::FruitMerged;
use fruit_merge::gameplay::score::Score;

fn contact(app: &mut App, a: Entity, b: Entity) {
    app.world_mut()
        .send_event(CollisionEvent::Started(a, b, CollisionEventFlags::empty()));
}

fn merged_events(app: &mut App) -> Vec<FruitMerged> {
    let events = app.world().resource::<Events<FruitMerged>>();
    let mut cursor = events.get_cursor();
    cursor.read(events).copied().collect()
}

#[test]
fn equal_tiers_merge_at_midpoint() {
    let mut app = headless_app();
    let a = place_fruit(&mut app, 0, Vec2::new(-20.0, -300.0));
    let b = place_fruit(&mut app, 0, Vec2::new(40.0, -280.0));
    contact(&mut app, a, b);
    app.update();

    let fruits = loose_fruits(&mut app);
    assert_eq!(fruits.len(), 1, "{fruits:?}");
    let (merged, tier, pos) = fruits[0];
    assert_eq!(tier, 1);
    assert_eq!(pos, Vec2::new(10.0, -290.0));
    assert!(app.world().get_entity(a).is_err());
    assert!(app.world().get_entity(b).is_err());
    assert_eq!(app.world().resource::<Score>().current, 1);

    let events = merged_events(&mut app);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].to_tier, 1);
    assert_eq!(events[0].merged, merged);
}

#[test]
fn merge_points_double_per_tier() {
    let mut app = headless_app();
    let a = place_fruit(&mut app, 4, Vec2::new(-100.0, -200.0));
    let b = place_fruit(&mut app, 4, Vec2::new(100.0, -200.0));
    contact(&mut app, a, b);
    app.update();
    assert_eq!(app.world().resource::<Score>().current, 16);
    assert_eq!(loose_fruits(&mut app)[0].1, 5);
}

#[test]
fn different_tiers_bounce_off() {
    let mut app = headless_app();
    let a = place_fruit(&mut app, 0, Vec2::new(-20.0, -300.0));
    let b = place_fruit(&mut app, 1, Vec2::new(40.0, -300.0));
    contact(&mut app, a, b);
    app.update();
    assert_eq!(loose_fruits(&mut app).len(), 2);
    assert_eq!(app.world().resource::<Score>().current, 0);
}

#[test]
fn largest_tier_never_merges() {
    let mut app = headless_app();
    let a = place_fruit(&mut app, 10, Vec2::new(-20.0, -100.0));
    let b = place_fruit(&mut app, 10, Vec2::new(40.0, -100.0));
    contact(&mut app, a, b);
    app.update();
    let tiers: Vec<usize> = loose_fruits(&mut app).iter().map(|f| f.1).collect();
    assert_eq!(tiers, vec![10, 10]);
    assert_eq!(app.world().resource::<Score>().current, 0);
}

#[test]
fn shared_fruit_merges_once_per_frame() {
    let mut app = headless_app();
    let a = place_fruit(&mut app, 2, Vec2::new(-60.0, -300.0));
    let b = place_fruit(&mut app, 2, Vec2::new(0.0, -300.0));
    let c = place_fruit(&mut app, 2, Vec2::new(60.0, -300.0));
    contact(&mut app, a, b);
    contact(&mut app, b, c);
    app.update();

    let fruits = loose_fruits(&mut app);
    let tiers: Vec<usize> = fruits.iter().map(|f| f.1).collect();
    assert_eq!(tiers, vec![2, 3]);
    assert_eq!(fruits[0].0, c, "third fruit is left untouched");
    assert_eq!(app.world().resource::<Score>().current, 4);
}

#[test]
fn held_fruit_is_ignored() {
    let mut app = headless_app();
    let held = held_fruits(&mut app);
    assert_eq!(held.len(), 1);
    let (held_entity, held_tier, _) = held[0];
    let loose = place_fruit(&mut app, held_tier, Vec2::new(0.0, 300.0));
    contact(&mut app, held_entity, loose);
    app.update();
    assert_eq!(held_fruits(&mut app).len(), 1);
    assert_eq!(loose_fruits(&mut app).len(), 1);
    assert_eq!(app.world().resource::<Score>().current, 0);
}

#[test]
fn no_merges_after_game_over() {
    let mut app = headless_app();
    app.world_mut()
        .resource_mut::<NextState<RunState>>()
        .set(RunState::GameOver);
    app.update();
    assert_eq!(run_state(&app), RunState::GameOver);

    let a = place_fruit(&mut app, 0, Vec2::new(-20.0, -300.0));
    let b = place_fruit(&mut app, 0, Vec2::new(20.0, -300.0));
    contact(&mut app, a, b);
    app.update();
    assert_eq!(loose_fruits(&mut app).len(), 2);
    assert_eq!(app.world().resource::<Score>().current, 0);
}
