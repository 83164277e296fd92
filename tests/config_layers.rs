use std::fs;

use fruit_merge::core::config::config::GameConfig;
use fruit_merge::gameplay::fruits::Theme;

#[test]
fn shipped_config_matches_defaults() {
    let cfg = GameConfig::load_from_file("assets/config/game.ron").expect("shipped game.ron parses");
    assert_eq!(cfg, GameConfig::default());
    assert!(cfg.validate().is_empty());
}

#[test]
fn later_layer_overrides_fields_it_names() {
    let dir = tempfile::tempdir().expect("temp dir");
    let base = dir.path().join("game.ron");
    let local = dir.path().join("game.local.ron");
    fs::write(
        &base,
        "(drop: (nudge_speed: 150.0, cooldown_secs: 0.75), game_over: (grace_secs: 2.0))",
    )
    .expect("write base");
    fs::write(&local, r#"(drop: (cooldown_secs: 0.25), theme: "halloween", seed: Some(9))"#)
        .expect("write local");

    let (cfg, used, errors) = GameConfig::load_layered([&base, &local]);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(used.len(), 2);
    assert_eq!(cfg.drop.nudge_speed, 150.0);
    assert_eq!(cfg.drop.cooldown_secs, 0.25);
    assert_eq!(cfg.game_over.grace_secs, 2.0);
    assert_eq!(cfg.theme, Theme::Halloween);
    assert_eq!(cfg.seed, Some(9));
    assert_eq!(cfg.well, GameConfig::default().well);
}

#[test]
fn missing_and_broken_layers_are_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let base = dir.path().join("game.ron");
    let broken = dir.path().join("broken.ron");
    let missing = dir.path().join("nope.ron");
    fs::write(&base, "(gravity: (y: -500.0))").expect("write base");
    fs::write(&broken, "(gravity: (y: ").expect("write broken");

    let (cfg, used, errors) = GameConfig::load_layered([&base, &broken, &missing]);
    assert_eq!(used.len(), 1);
    assert_eq!(errors.len(), 2, "{errors:?}");
    assert!(errors.iter().any(|e| e.contains("parse error")));
    assert!(errors.iter().any(|e| e.contains("read error")));
    assert_eq!(cfg.gravity.y, -500.0);
}

#[test]
fn no_layers_gives_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let (cfg, used, errors) = GameConfig::load_layered([dir.path().join("absent.ron")]);
    assert!(used.is_empty());
    assert_eq!(errors.len(), 1);
    assert_eq!(cfg, GameConfig::default());
}
