#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use super::modes::DebugState;
#[cfg(feature = "debug")]
use crate::interaction::inputmap::types::{actions, InputMap};

#[cfg(feature = "debug")]
pub fn debug_key_input_system(input: Res<InputMap>, mut state: ResMut<DebugState>) {
    if input.just_pressed(actions::TOGGLE_OVERLAY) {
        state.overlay_visible = !state.overlay_visible;
        info!("Debug overlay {}", if state.overlay_visible { "shown" } else { "hidden" });
    }
    if input.just_pressed(actions::TOGGLE_RAPIER_DEBUG) {
        state.rapier_wireframe = !state.rapier_wireframe;
        info!("Rapier wireframe {}", if state.rapier_wireframe { "on" } else { "off" });
    }
}
