#![cfg(feature = "debug")]
use bevy::prelude::*;
use fruit_merge::debug::keys::debug_key_input_system;
use fruit_merge::debug::DebugState;
use fruit_merge::interaction::inputmap::plugin::InputActionsPlugin;

fn tap(app: &mut App, key: KeyCode) {
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(key);
    app.update();
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().release(key);
    app.update();
}

#[test]
fn function_keys_toggle_debug_views() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    // Insert only the resources we need.
    app.insert_resource(ButtonInput::<KeyCode>::default());
    app.insert_resource(ButtonInput::<MouseButton>::default());
    app.add_plugins(InputActionsPlugin);
    app.init_resource::<DebugState>();
    app.add_systems(Update, debug_key_input_system);
    app.update();

    assert!(app.world().resource::<DebugState>().overlay_visible);
    tap(&mut app, KeyCode::F1);
    assert!(!app.world().resource::<DebugState>().overlay_visible);
    tap(&mut app, KeyCode::F1);
    assert!(app.world().resource::<DebugState>().overlay_visible);

    assert!(!app.world().resource::<DebugState>().rapier_wireframe);
    tap(&mut app, KeyCode::F2);
    assert!(app.world().resource::<DebugState>().rapier_wireframe);
}
