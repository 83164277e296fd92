use bevy::prelude::*;
use smallvec::SmallVec;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionId(pub u16); // internal index (array position)

#[derive(Debug, Clone)]
pub struct ActionMeta {
    pub id: ActionId,
    pub name: String,
    pub description: String,
}

#[derive(Default, Debug, Clone, Copy)]
pub struct ActionStateBinary {
    pub pressed: bool,
    pub just_pressed: bool,
    pub just_released: bool,
}
impl ActionStateBinary {
    pub fn clear_transitions(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawBindingToken {
    Key(KeyCode),
    MouseBtn(MouseButton),
}

#[derive(Debug, Clone)]
pub struct Binding {
    pub id: u32,
    pub tokens: SmallVec<[RawBindingToken; 2]>,
    pub hold_secs: f32,
}

#[derive(Debug, Default, Clone)]
pub struct BindingRuntime {
    pub active: bool,
    pub just_pressed: bool,
    pub just_released: bool,
    pub hold_elapsed: f32,
}

/// Named actions resolved from raw keyboard/mouse input once per frame.
#[derive(Resource, Debug, Default)]
pub struct InputMap {
    pub actions: Vec<ActionMeta>,
    pub name_to_id: HashMap<String, ActionId>,
    pub bindings_index: HashMap<ActionId, Vec<u32>>, // mapping to binding ids
    pub bindings: Vec<Binding>,
    pub bindings_runtime: Vec<BindingRuntime>,
    pub states: Vec<ActionStateBinary>,
    pub frame_counter: u64,
}

impl InputMap {
    pub fn state(&self, name: &str) -> Option<&ActionStateBinary> {
        let id = self.name_to_id.get(name)?;
        self.states.get(id.0 as usize)
    }

    pub fn pressed(&self, name: &str) -> bool {
        self.state(name).is_some_and(|s| s.pressed)
    }

    pub fn just_pressed(&self, name: &str) -> bool {
        self.state(name).is_some_and(|s| s.just_pressed)
    }

    /// -1.0 / 0.0 / +1.0 from a pair of opposing actions.
    pub fn axis(&self, neg: &str, pos: &str) -> f32 {
        let mut v = 0.0;
        if self.pressed(pos) {
            v += 1.0;
        }
        if self.pressed(neg) {
            v -= 1.0;
        }
        v
    }
}

/// Action names used by gameplay systems.
pub mod actions {
    pub const MOVE_LEFT: &str = "MoveLeft";
    pub const MOVE_RIGHT: &str = "MoveRight";
    pub const DROP: &str = "Drop";
    pub const RESTART: &str = "Restart";
    pub const TOGGLE_OVERLAY: &str = "ToggleOverlay";
    pub const TOGGLE_RAPIER_DEBUG: &str = "ToggleRapierDebug";
}
