//! Systems for input action evaluation.
use super::types::*;
use bevy::prelude::*;

pub fn system_collect_inputs(mut input_map: ResMut<InputMap>) {
    input_map.frame_counter += 1;
    for st in &mut input_map.states {
        st.clear_transitions();
    }
}

pub fn system_evaluate_bindings(
    time: Res<Time>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut input_map: ResMut<InputMap>,
) {
    let dt = time.delta_secs();
    let InputMap {
        bindings,
        bindings_runtime,
        bindings_index,
        states,
        ..
    } = &mut *input_map;
    if bindings_runtime.len() < bindings.len() {
        bindings_runtime.resize(bindings.len(), BindingRuntime::default());
    }

    for binding in bindings.iter() {
        let all_active = binding.tokens.iter().all(|token| match token {
            RawBindingToken::Key(k) => keyboard.pressed(*k),
            RawBindingToken::MouseBtn(b) => mouse_buttons.pressed(*b),
        });
        let rt = &mut bindings_runtime[binding.id as usize];
        rt.just_pressed = false;
        rt.just_released = false;
        if all_active {
            if !rt.active {
                rt.active = true;
                rt.just_pressed = true;
                rt.hold_elapsed = 0.0;
            } else {
                rt.hold_elapsed += dt;
            }
        } else if rt.active {
            rt.active = false;
            rt.just_released = true;
        }
    }

    for (aid, bids) in bindings_index.iter() {
        let Some(state) = states.get_mut(aid.0 as usize) else {
            continue;
        };
        let was_pressed = state.pressed;
        let mut pressed = false;
        for &bid in bids {
            let rt = &bindings_runtime[bid as usize];
            let binding = &bindings[bid as usize];
            if rt.active && rt.hold_elapsed >= binding.hold_secs {
                pressed = true;
            }
        }
        state.pressed = pressed;
        if pressed && !was_pressed {
            state.just_pressed = true;
        }
        if !pressed && was_pressed {
            state.just_released = true;
        }
    }
}
