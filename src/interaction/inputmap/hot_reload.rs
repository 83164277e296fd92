#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use std::{path::PathBuf, time::SystemTime};

#[cfg(feature = "debug")]
use super::parse::parse_input_toml;
#[cfg(feature = "debug")]
use super::plugin::input_config_path;
#[cfg(feature = "debug")]
use super::types::InputMap;

#[cfg(feature = "debug")]
#[derive(Resource, Debug)]
struct InputReloadState {
    last_modified: Option<SystemTime>,
    timer: Timer,
    path: PathBuf,
}
#[cfg(feature = "debug")]
impl FromWorld for InputReloadState {
    fn from_world(_: &mut World) -> Self {
        Self {
            last_modified: None,
            timer: Timer::from_seconds(0.5, TimerMode::Repeating),
            path: PathBuf::from(input_config_path()),
        }
    }
}

#[cfg(feature = "debug")]
pub struct InputMapHotReloadPlugin;
#[cfg(feature = "debug")]
impl Plugin for InputMapHotReloadPlugin {
    fn build(&self, app: &mut App) {
        #[cfg(not(target_arch = "wasm32"))]
        app.init_resource::<InputReloadState>()
            .add_systems(Update, poll_input_map_reload);
    }
}

#[cfg(feature = "debug")]
fn poll_input_map_reload(
    time: Res<Time>,
    mut state: ResMut<InputReloadState>,
    mut input_map: ResMut<InputMap>,
) {
    if !state.timer.tick(time.delta()).finished() {
        return;
    }
    let Ok(mod_time) = std::fs::metadata(&state.path).and_then(|m| m.modified()) else {
        return;
    };
    let need_reload = match state.last_modified {
        Some(prev) => mod_time > prev,
        None => false,
    };
    state.last_modified = Some(mod_time);
    if !need_reload {
        return;
    }
    let Ok(raw) = std::fs::read_to_string(&state.path) else {
        return;
    };
    let parsed = parse_input_toml(&raw, true);
    if !parsed.errors.is_empty() {
        for e in parsed.errors {
            warn!(target: "input", "INPUT HOT-RELOAD parse error: {e}");
        }
    } else {
        *input_map = parsed.input_map;
        info!(target: "input", "Input map hot-reloaded");
    }
}
