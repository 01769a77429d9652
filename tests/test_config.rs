use std::fs;

use arcade_shooter::{GameConfig, GameError};

#[test]
fn defaults_are_valid() {
    let c = GameConfig::default();
    assert!(c.validate().is_ok());
    assert_eq!(c.playfield_width, 500.0);
    assert_eq!(c.player_start_y(), 440.0);
    assert_eq!(c.kill_score, 10);
    assert_eq!(c.powerup_duration_ms, 5000.0);
    assert!(c.enforce_enemy_cap);
}

#[test]
fn empty_json_gives_defaults() {
    assert_eq!(GameConfig::from_json("{}").unwrap(), GameConfig::default());
}

#[test]
fn partial_json_overrides_only_named_keys() {
    let c = GameConfig::from_json(r#"{ "enemy_speed": 3.5, "enforce_enemy_cap": false }"#).unwrap();
    assert_eq!(c.enemy_speed, 3.5);
    assert!(!c.enforce_enemy_cap);
    assert_eq!(c.bullet_speed, 7.0);
}

#[test]
fn malformed_json_is_parse_error() {
    let err = GameConfig::from_json("{ enemy_speed: ").unwrap_err();
    assert!(matches!(err, GameError::Config(_)));
}

#[test]
fn wrong_type_is_parse_error() {
    let err = GameConfig::from_json(r#"{ "kill_score": "ten" }"#).unwrap_err();
    assert!(matches!(err, GameError::Config(_)));
}

fn assert_invalid(c: GameConfig) {
    match c.validate() {
        Err(GameError::InvalidConfig(_)) => {}
        other => panic!("expected InvalidConfig, got {other:?}"),
    }
}

#[test]
fn rejects_non_positive_sizes_and_speeds() {
    assert_invalid(GameConfig { playfield_width: 0.0, ..GameConfig::default() });
    assert_invalid(GameConfig { enemy_speed: -1.0, ..GameConfig::default() });
    assert_invalid(GameConfig { bullet_height: f32::NAN, ..GameConfig::default() });
}

#[test]
fn rejects_entities_wider_than_playfield() {
    assert_invalid(GameConfig { enemy_width: 501.0, ..GameConfig::default() });
    assert_invalid(GameConfig { powerup_width: 600.0, ..GameConfig::default() });
}

#[test]
fn rejects_margin_outside_playfield() {
    assert_invalid(GameConfig { player_bottom_margin: -1.0, ..GameConfig::default() });
    assert_invalid(GameConfig { player_bottom_margin: 501.0, ..GameConfig::default() });
}

#[test]
fn powerup_speed_may_be_zero_but_not_negative() {
    assert!(GameConfig { powerup_speed: 0.0, ..GameConfig::default() }.validate().is_ok());
    assert_invalid(GameConfig { powerup_speed: -2.0, ..GameConfig::default() });
}

#[test]
fn rejects_bad_chance_and_timings() {
    assert_invalid(GameConfig { powerup_chance: 1.5, ..GameConfig::default() });
    assert_invalid(GameConfig { powerup_chance: -0.1, ..GameConfig::default() });
    assert_invalid(GameConfig { enemy_spawn_interval_ms: 0.0, ..GameConfig::default() });
    assert_invalid(GameConfig { powerup_duration_ms: -1.0, ..GameConfig::default() });
    assert_invalid(GameConfig { target_fps: 0, ..GameConfig::default() });
}

#[test]
fn rejects_zero_level_step() {
    assert_invalid(GameConfig { level_score_step: 0, ..GameConfig::default() });
    let err = GameConfig::from_json(r#"{ "level_score_step": 0 }"#).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(_)));
}

#[test]
fn huge_per_level_growth_is_accepted() {
    let c = GameConfig::from_json(r#"{ "max_enemies_per_level": 4294967295 }"#).unwrap();
    assert_eq!(c.max_enemies_per_level, u32::MAX);
}

#[test]
fn from_json_validates() {
    let err = GameConfig::from_json(r#"{ "target_fps": 0 }"#).unwrap_err();
    assert!(matches!(err, GameError::InvalidConfig(_)));
}

#[test]
fn load_reads_file() {
    let path = std::env::temp_dir().join(format!("arcade_shooter_cfg_{}.json", std::process::id()));
    fs::write(&path, r#"{ "playfield_width": 800, "target_fps": 30 }"#).unwrap();
    let c = GameConfig::load(&path);
    let _ = fs::remove_file(&path);

    let c = c.unwrap();
    assert_eq!(c.playfield_width, 800.0);
    assert_eq!(c.target_fps, 30);
}

#[test]
fn load_missing_file_is_io_error() {
    let path = std::env::temp_dir().join("arcade_shooter_no_such_config.json");
    let err = GameConfig::load(&path).unwrap_err();
    assert!(matches!(err, GameError::Io(_)));
}

#[test]
fn serializes_back_to_json() {
    let text = serde_json::to_string(&GameConfig::default()).unwrap();
    assert!(text.contains("\"enemy_spawn_interval_ms\""));
    assert_eq!(GameConfig::from_json(&text).unwrap(), GameConfig::default());
}
