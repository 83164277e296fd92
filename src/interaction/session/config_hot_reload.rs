use bevy::prelude::*;
use std::{collections::HashMap, path::PathBuf, time::SystemTime};

use crate::core::config::{is_missing_local_layer, ConfigOverrides, GameConfig, LOCAL_LAYER_FILE};

#[derive(Resource, Debug, Clone)]
pub struct ConfigReloadSettings {
    pub paths: Vec<PathBuf>,
    pub interval_secs: f32,
}
impl Default for ConfigReloadSettings {
    fn default() -> Self {
        Self {
            paths: vec![
                PathBuf::from("assets/config/game.ron"),
                PathBuf::from(format!("assets/config/{LOCAL_LAYER_FILE}")),
            ],
            interval_secs: 0.5,
        }
    }
}

#[derive(Resource, Debug)]
struct ConfigReloadState {
    last_mod: HashMap<PathBuf, SystemTime>,
    timer: Timer,
}
impl FromWorld for ConfigReloadState {
    fn from_world(world: &mut World) -> Self {
        let interval = world
            .get_resource::<ConfigReloadSettings>()
            .map(|s| s.interval_secs)
            .unwrap_or(0.5)
            .max(0.05);
        Self {
            last_mod: HashMap::new(),
            timer: Timer::from_seconds(interval, TimerMode::Repeating),
        }
    }
}

pub struct ConfigHotReloadPlugin;
impl Plugin for ConfigHotReloadPlugin {
    fn build(&self, app: &mut App) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            if !app.world().contains_resource::<ConfigReloadSettings>() {
                app.init_resource::<ConfigReloadSettings>();
            }
            app.init_resource::<ConfigReloadState>()
                .add_systems(Update, poll_and_reload_config);
        }
    }
}

/// Applies changed config files. Window and gravity follow immediately; well geometry and
/// theme take effect on the next restart.
fn poll_and_reload_config(
    time: Res<Time>,
    settings: Res<ConfigReloadSettings>,
    mut state: ResMut<ConfigReloadState>,
    mut cfg_res: ResMut<GameConfig>,
    overrides: Option<Res<ConfigOverrides>>,
    mut windows: Query<&mut Window>,
) {
    if !state.timer.tick(time.delta()).finished() {
        return;
    }
    let mut dirty = false;
    for path in &settings.paths {
        let Ok(mod_time) = std::fs::metadata(path).and_then(|m| m.modified()) else {
            continue;
        };
        match state.last_mod.insert(path.clone(), mod_time) {
            Some(prev) if mod_time > prev => dirty = true,
            _ => {}
        }
    }
    if !dirty {
        return;
    }
    let (mut new_cfg, _used, errors) = GameConfig::load_layered(settings.paths.iter());
    if let Some(o) = overrides {
        o.apply(&mut new_cfg);
    }
    for e in errors.iter().filter(|e| !is_missing_local_layer(e)) {
        warn!(target: "config", "CONFIG HOT-RELOAD issue: {e}");
    }
    if *cfg_res == new_cfg {
        return;
    }
    for w in new_cfg.validate() {
        warn!(target: "config", "CONFIG WARNING: {w}");
    }
    info!(target: "config", "Config hot-reload applied");
    if let Ok(mut window) = windows.single_mut() {
        if window.width() != new_cfg.window.width || window.height() != new_cfg.window.height {
            window.resolution.set(new_cfg.window.width, new_cfg.window.height);
        }
        if window.title != new_cfg.window.title {
            window.title = new_cfg.window.title.clone();
        }
    }
    *cfg_res = new_cfg;
}
