mod common;

use bevy::prelude::*;
use bevy_rapier2d::prelude::RigidBody;

use common::*;
use fruit_merge::core::components::FruitRadius;
use fruit_merge::core::config::GameConfig;
use fruit_merge::gameplay::drop::DropController;

#[test]
fn first_fruit_waits_at_spawn_point() {
    let mut app = headless_app();
    let held = held_fruits(&mut app);
    assert_eq!(held.len(), 1);
    let (_, tier, pos) = held[0];
    assert!(tier < 5, "only the five smallest tiers are dropped, got {tier}");
    assert_eq!(pos, Vec2::new(0.0, 375.0));

    let controller = app.world().resource::<DropController>();
    assert!(controller.is_aiming());
    assert_eq!(controller.current, Some(tier));
    assert!(controller.next.is_some_and(|t| t < 5));
}

#[test]
fn nudge_moves_and_stops_at_wall() {
    let mut app = headless_app();
    let (entity, _, start) = held_fruits(&mut app)[0];
    let radius = app.world().get::<FruitRadius>(entity).map_or(0.0, |r| r.0);

    press(&mut app, KeyCode::ArrowRight);
    run_frames(&mut app, 2);
    let x = held_fruits(&mut app)[0].2.x;
    assert!(x > start.x, "fruit should move right ({x})");

    run_frames(&mut app, 40);
    let x = held_fruits(&mut app)[0].2.x;
    assert_eq!(x, 280.0 - radius);

    release(&mut app, KeyCode::ArrowRight);
    press(&mut app, KeyCode::KeyA);
    run_frames(&mut app, 60);
    let x = held_fruits(&mut app)[0].2.x;
    assert_eq!(x, -280.0 + radius);
}

#[test]
fn drop_then_cooldown_then_next_fruit() {
    let mut app = headless_app();
    let (dropped, _, _) = held_fruits(&mut app)[0];
    let promised = app.world().resource::<DropController>().next;

    press(&mut app, KeyCode::Space);
    app.update();
    assert!(held_fruits(&mut app).is_empty());
    assert_eq!(app.world().get::<RigidBody>(dropped), Some(&RigidBody::Dynamic));
    let controller = app.world().resource::<DropController>();
    assert!(!controller.is_aiming());
    assert_eq!(controller.drops, 1);

    // Holding the key does not queue another drop.
    run_frames(&mut app, 4);
    release(&mut app, KeyCode::Space);
    assert!(held_fruits(&mut app).is_empty(), "still cooling down");

    run_frames(&mut app, 8);
    let held = held_fruits(&mut app);
    assert_eq!(held.len(), 1);
    assert_eq!(Some(held[0].1), promised, "preview fruit becomes the held one");
    assert_eq!(app.world().resource::<DropController>().drops, 1);
}

#[test]
fn same_seed_same_sequence() {
    fn sequence(seed: u64) -> Vec<usize> {
        let mut app = headless_app_with(GameConfig {
            seed: Some(seed),
            drop: fruit_merge::core::config::DropConfig {
                cooldown_secs: 0.0,
                ..Default::default()
            },
            ..Default::default()
        });
        let mut tiers = Vec::new();
        for _ in 0..6 {
            tiers.push(held_fruits(&mut app)[0].1);
            press(&mut app, KeyCode::Space);
            app.update();
            release(&mut app, KeyCode::Space);
            run_frames(&mut app, 2);
        }
        tiers
    }
    assert_eq!(sequence(42), sequence(42));
}

#[test]
fn well_edits_wait_for_next_run() {
    use fruit_merge::app::state::RunState;
    use fruit_merge::gameplay::well::ActiveWell;

    let mut app = headless_app();
    let (entity, _, _) = held_fruits(&mut app)[0];
    let radius = app.world().get::<FruitRadius>(entity).map_or(0.0, |r| r.0);
    app.world_mut().resource_mut::<GameConfig>().well.width = 300.0;

    press(&mut app, KeyCode::ArrowRight);
    run_frames(&mut app, 40);
    release(&mut app, KeyCode::ArrowRight);
    assert_eq!(held_fruits(&mut app)[0].2.x, 280.0 - radius);
    assert_eq!(app.world().resource::<ActiveWell>().width, 620.0);

    app.world_mut()
        .resource_mut::<NextState<RunState>>()
        .set(RunState::GameOver);
    app.update();
    app.world_mut()
        .resource_mut::<NextState<RunState>>()
        .set(RunState::Playing);
    run_frames(&mut app, 2);
    assert_eq!(run_state(&app), RunState::Playing);
    assert_eq!(app.world().resource::<ActiveWell>().width, 300.0);
    let (held, _, _) = held_fruits(&mut app)[0];
    let held_radius = app.world().get::<FruitRadius>(held).map_or(0.0, |r| r.0);
    press(&mut app, KeyCode::ArrowRight);
    run_frames(&mut app, 40);
    assert_eq!(held_fruits(&mut app)[0].2.x, 120.0 - held_radius);
}
