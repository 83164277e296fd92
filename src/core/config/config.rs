use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

use crate::gameplay::fruits::Theme;

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 620.0,
            height: 850.0,
            title: "Fruit Merge".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GravityConfig {
    pub y: f32,
}
impl Default for GravityConfig {
    fn default() -> Self {
        Self { y: -980.0 }
    }
}

/// Play field geometry in world units (pixels, origin at the field centre, Y up).
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WellConfig {
    pub width: f32,
    pub height: f32,
    pub wall_thickness: f32,
    pub floor_thickness: f32,
    pub death_line_y: f32,
    pub death_line_thickness: f32,
}
impl Default for WellConfig {
    fn default() -> Self {
        Self {
            width: 620.0,
            height: 850.0,
            wall_thickness: 30.0,
            floor_thickness: 60.0,
            death_line_y: 275.0,
            death_line_thickness: 2.0,
        }
    }
}
impl WellConfig {
    pub fn top(&self) -> f32 {
        self.height * 0.5
    }
    pub fn floor_top(&self) -> f32 {
        -self.height * 0.5 + self.floor_thickness
    }
    /// X of the left wall's inner face.
    pub fn inner_left(&self) -> f32 {
        -self.width * 0.5 + self.wall_thickness
    }
    /// X of the right wall's inner face.
    pub fn inner_right(&self) -> f32 {
        self.width * 0.5 - self.wall_thickness
    }
    pub fn inner_width(&self) -> f32 {
        self.inner_right() - self.inner_left()
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DropConfig {
    pub spawn_x: f32,
    pub spawn_y: f32,
    /// Horizontal speed of the held fruit in px/s.
    pub nudge_speed: f32,
    pub cooldown_secs: f32,
    /// Number of lowest tiers that can be dropped.
    pub spawn_pool: usize,
}
impl Default for DropConfig {
    fn default() -> Self {
        Self {
            spawn_x: 0.0,
            spawn_y: 375.0,
            nudge_speed: 200.0,
            cooldown_secs: 1.0,
            spawn_pool: 5,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FruitPhysicsConfig {
    pub restitution: f32,
    pub merged_restitution: f32,
    pub friction: f32,
}
impl Default for FruitPhysicsConfig {
    fn default() -> Self {
        Self {
            restitution: 0.2,
            merged_restitution: 0.0,
            friction: 0.1,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GameOverConfig {
    /// Seconds a fruit must stay on the death line before the run ends.
    pub grace_secs: f32,
}
impl Default for GameOverConfig {
    fn default() -> Self {
        Self { grace_secs: 1.0 }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub gravity: GravityConfig,
    pub well: WellConfig,
    pub drop: DropConfig,
    pub fruit: FruitPhysicsConfig,
    pub game_over: GameOverConfig,
    pub theme: Theme,
    pub seed: Option<u64>,
    pub sprites: bool,
    pub rapier_debug: bool,
}
impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: Default::default(),
            gravity: Default::default(),
            well: Default::default(),
            drop: Default::default(),
            fruit: Default::default(),
            game_over: Default::default(),
            theme: Theme::Base,
            seed: None,
            sprites: false,
            rapier_debug: false,
        }
    }
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    /// Deep-merges every readable RON file in order (later wins) and deserializes the result.
    /// Never fails: unreadable layers are reported in the error list and defaults fill the gaps.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.as_os_str().to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        let Some(val) = merged else {
            return (GameConfig::default(), used, errors);
        };
        match val.into_rust::<GameConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!(
                    "failed to deserialize merged config; using defaults: {e}"
                ));
                (GameConfig::default(), used, errors)
            }
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        } else if self.window.auto_close > 0.0 && self.window.auto_close < 0.01 {
            w.push(format!(
                "window.autoClose {} very small; closes almost immediately",
                self.window.auto_close
            ));
        }
        if self.gravity.y.abs() < 1e-4 {
            w.push("gravity.y magnitude near zero; fruits will float".into());
        }
        if self.gravity.y > 0.0 {
            w.push(format!(
                "gravity.y is positive ({}); fruits fall upwards out of the well",
                self.gravity.y
            ));
        }
        let well = &self.well;
        if well.wall_thickness <= 0.0 || well.floor_thickness <= 0.0 {
            w.push("well.wall_thickness and well.floor_thickness must be > 0".into());
        }
        if well.inner_width() <= 0.0 {
            w.push(format!(
                "well.width {} leaves no room between walls of thickness {}",
                well.width, well.wall_thickness
            ));
        }
        if well.death_line_y <= well.floor_top() || well.death_line_y >= well.top() {
            w.push(format!(
                "well.death_line_y {} outside the well ({}..{})",
                well.death_line_y,
                well.floor_top(),
                well.top()
            ));
        }
        if self.drop.spawn_y <= well.death_line_y {
            w.push(format!(
                "drop.spawn_y {} at or below the death line {}; held fruits start in contact",
                self.drop.spawn_y, well.death_line_y
            ));
        }
        if self.drop.spawn_x < well.inner_left() || self.drop.spawn_x > well.inner_right() {
            w.push(format!(
                "drop.spawn_x {} outside the inner walls",
                self.drop.spawn_x
            ));
        }
        if self.drop.nudge_speed <= 0.0 {
            w.push("drop.nudge_speed must be > 0".into());
        }
        if self.drop.cooldown_secs < 0.0 {
            w.push("drop.cooldown_secs negative -> treated as 0".into());
        }
        if self.drop.spawn_pool == 0 {
            w.push("drop.spawn_pool is 0 -> only the first tier is dropped".into());
        }
        let tiers = self.theme.tiers();
        if self.drop.spawn_pool > tiers.len() {
            w.push(format!(
                "drop.spawn_pool {} exceeds tier count {}; clamped",
                self.drop.spawn_pool,
                tiers.len()
            ));
        }
        if let Some(largest) = tiers.last() {
            if largest.radius * 2.0 > well.inner_width() {
                w.push(format!(
                    "largest fruit '{}' (diameter {}) wider than the well ({})",
                    largest.name,
                    largest.radius * 2.0,
                    well.inner_width()
                ));
            }
        }
        if !(0.0..=1.0).contains(&self.fruit.restitution) {
            w.push(format!(
                "fruit.restitution {} outside 0..1",
                self.fruit.restitution
            ));
        }
        if self.fruit.friction < 0.0 {
            w.push("fruit.friction negative".into());
        }
        if self.game_over.grace_secs < 0.0 {
            w.push("game_over.grace_secs negative -> treated as 0 (instant game over)".into());
        }
        w
    }
}

/// Optional per-machine layer applied over `game.ron`.
pub const LOCAL_LAYER_FILE: &str = "game.local.ron";

/// True for the read error of an absent local layer, which is expected and not worth a warning.
pub fn is_missing_local_layer(error: &str) -> bool {
    error.contains(LOCAL_LAYER_FILE) && error.contains("read error")
}

/// Values pinned from the command line; re-applied after every (re)load.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub theme: Option<Theme>,
    pub seed: Option<u64>,
    pub auto_close: Option<f32>,
    pub rapier_debug: bool,
}

impl ConfigOverrides {
    pub fn apply(&self, cfg: &mut GameConfig) {
        if let Some(theme) = self.theme {
            cfg.theme = theme;
        }
        if self.seed.is_some() {
            cfg.seed = self.seed;
        }
        if let Some(secs) = self.auto_close {
            cfg.window.auto_close = secs;
        }
        cfg.rapier_debug |= self.rapier_debug;
    }
}

fn merge_value(base: &mut ron::value::Value, overlay: ron::value::Value) {
    use ron::value::Value;
    match (base, overlay) {
        (Value::Map(bm), Value::Map(om)) => {
            for (k, v) in om.into_iter() {
                let existing = bm.iter_mut().find(|(ek, _)| **ek == k).map(|(_, ev)| ev);
                if let Some(ev) = existing {
                    merge_value(ev, v);
                } else {
                    bm.insert(k, v);
                }
            }
        }
        (b, o) => *b = o,
    }
}
