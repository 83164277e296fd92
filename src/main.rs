use bevy::prelude::*;
use bevy_rapier2d::prelude::RapierDebugRenderPlugin;

use fruit_merge::core::config::ConfigOverrides;
#[cfg(not(target_arch = "wasm32"))]
use fruit_merge::core::config::{is_missing_local_layer, LOCAL_LAYER_FILE};
#[cfg(not(target_arch = "wasm32"))]
use fruit_merge::interaction::session::config_hot_reload::ConfigReloadSettings;
#[cfg(not(target_arch = "wasm32"))]
use fruit_merge::Theme;
use fruit_merge::{GameConfig, GamePlugin};

#[cfg(not(target_arch = "wasm32"))]
#[derive(clap::Parser, Debug)]
#[command(name = "fruit_merge", version, about = "Drop fruits, merge pairs, keep the pile below the line")]
struct Cli {
    /// Extra RON layer applied after assets/config/game.ron and game.local.ron
    #[arg(long)]
    config: Option<std::path::PathBuf>,
    /// Fruit set to play with
    #[arg(long, value_enum)]
    theme: Option<Theme>,
    /// Seed for the fruit sequence (reproducible runs)
    #[arg(long)]
    seed: Option<u64>,
    /// Exit after this many seconds
    #[arg(long)]
    auto_close: Option<f32>,
    /// Start with the physics wireframe visible
    #[arg(long)]
    rapier_debug: bool,
}

/// Result of config loading; messages are logged once the log plugin is up.
struct LoadedConfig {
    cfg: GameConfig,
    overrides: ConfigOverrides,
    layers: Vec<std::path::PathBuf>,
    notes: Vec<String>,
    issues: Vec<String>,
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> anyhow::Result<LoadedConfig> {
    // Embedded base config only; no layered overrides on wasm.
    const RAW: &str = include_str!("../assets/config/game.ron");
    let mut issues = Vec::new();
    let cfg = ron::from_str(RAW).unwrap_or_else(|e| {
        issues.push(format!("CONFIG (wasm) parse failure: {e}; using defaults"));
        GameConfig::default()
    });
    Ok(LoadedConfig {
        cfg,
        overrides: ConfigOverrides::default(),
        layers: Vec::new(),
        notes: vec!["Config embedded in the wasm build".into()],
        issues,
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> anyhow::Result<LoadedConfig> {
    use anyhow::Context;
    use clap::Parser;

    let cli = Cli::parse();
    let mut layers = vec![
        std::path::PathBuf::from("assets/config/game.ron"),
        std::path::PathBuf::from(format!("assets/config/{LOCAL_LAYER_FILE}")),
    ];
    if let Some(extra) = &cli.config {
        // A layer named on the command line must exist, unlike the optional local one.
        std::fs::metadata(extra).with_context(|| format!("config layer {}", extra.display()))?;
        layers.push(extra.clone());
    }
    let (mut cfg, used, errors) = GameConfig::load_layered(&layers);
    let issues = errors
        .into_iter()
        .filter(|e| !is_missing_local_layer(e))
        .map(|e| format!("CONFIG LOAD ISSUE: {e}"))
        .collect();
    let notes = if used.is_empty() {
        vec!["No config layers found; using defaults".to_string()]
    } else {
        vec![format!("Config layers loaded: {used:?}")]
    };

    let overrides = ConfigOverrides {
        theme: cli.theme,
        seed: cli.seed,
        auto_close: cli.auto_close,
        rapier_debug: cli.rapier_debug,
    };
    overrides.apply(&mut cfg);
    Ok(LoadedConfig {
        cfg,
        overrides,
        layers,
        notes,
        issues,
    })
}

fn main() -> anyhow::Result<()> {
    #[cfg(target_arch = "wasm32")]
    {
        // Better panic messages on wasm
        console_error_panic_hook::set_once();
    }

    let LoadedConfig {
        cfg,
        overrides,
        layers,
        notes,
        mut issues,
    } = load_config()?;
    issues.extend(cfg.validate().into_iter().map(|w| format!("CONFIG WARNING: {w}")));

    let mut app = App::new();
    app.insert_resource(cfg.clone())
        .insert_resource(overrides)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: false,
                #[cfg(target_arch = "wasm32")]
                canvas: Some("#bevy".into()),
                ..default()
            }),
            ..default()
        }))
        .add_systems(Startup, move || {
            for n in &notes {
                info!(target: "config", "{n}");
            }
            for w in &issues {
                warn!(target: "config", "{w}");
            }
        });

    #[cfg(not(target_arch = "wasm32"))]
    app.insert_resource(ConfigReloadSettings {
        paths: layers,
        ..default()
    });
    #[cfg(target_arch = "wasm32")]
    let _ = layers;

    // With the debug feature the plugin is always present so F2 can toggle it.
    if cfg!(feature = "debug") || cfg.rapier_debug {
        app.add_plugins(RapierDebugRenderPlugin {
            enabled: cfg.rapier_debug,
            ..default()
        });
    }

    app.add_plugins(GamePlugin).run();
    Ok(())
}
