//! Game tuning values.
//!
//! Every field has a default, so a JSON config file only needs the keys it
//! wants to override.

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

// ── Defaults ──────────────────────────────────────────────────────────────────

pub const PLAYFIELD_WIDTH: f32 = 500.0;
pub const PLAYFIELD_HEIGHT: f32 = 500.0;

pub const PLAYER_WIDTH: f32 = 50.0;
pub const PLAYER_HEIGHT: f32 = 50.0;
/// Distance from the bottom edge to the player's top edge.
pub const PLAYER_BOTTOM_MARGIN: f32 = 60.0;
pub const PLAYER_BASE_SPEED: f32 = 5.0;
pub const PLAYER_BOOSTED_SPEED: f32 = 8.0;

pub const ENEMY_WIDTH: f32 = 40.0;
pub const ENEMY_HEIGHT: f32 = 40.0;
pub const ENEMY_SPEED: f32 = 2.0;
pub const ENEMY_SPAWN_INTERVAL_MS: f64 = 1000.0;

pub const BULLET_WIDTH: f32 = 5.0;
pub const BULLET_HEIGHT: f32 = 10.0;
pub const BULLET_SPEED: f32 = 7.0;

pub const POWERUP_WIDTH: f32 = 100.0;
pub const POWERUP_HEIGHT: f32 = 10.0;
pub const POWERUP_Y: f32 = 10.0;
/// Fall speed per step; without it a pickup never reaches the ship's row.
pub const POWERUP_SPEED: f32 = 2.0;
/// Spawn probability per reference frame.
pub const POWERUP_CHANCE: f64 = 0.01;
pub const POWERUP_REFERENCE_FRAME_MS: f64 = 1000.0 / 60.0;
pub const POWERUP_DURATION_MS: f64 = 5000.0;

pub const KILL_SCORE: u32 = 10;
pub const LEVEL_SCORE_STEP: u32 = 100;
pub const INITIAL_MAX_ENEMIES: u32 = 5;
pub const MAX_ENEMIES_PER_LEVEL: u32 = 2;

pub const TARGET_FPS: u32 = 60;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub playfield_width: f32,
    pub playfield_height: f32,

    pub player_width: f32,
    pub player_height: f32,
    pub player_bottom_margin: f32,
    pub player_base_speed: f32,
    pub player_boosted_speed: f32,

    pub enemy_width: f32,
    pub enemy_height: f32,
    pub enemy_speed: f32,
    pub enemy_spawn_interval_ms: f64,
    /// Refuse to spawn while `max_enemies` are already on screen.
    pub enforce_enemy_cap: bool,

    pub bullet_width: f32,
    pub bullet_height: f32,
    pub bullet_speed: f32,

    pub powerup_width: f32,
    pub powerup_height: f32,
    pub powerup_y: f32,
    /// Zero keeps pickups parked on their spawn row.
    pub powerup_speed: f32,
    pub powerup_chance: f64,
    pub powerup_reference_frame_ms: f64,
    pub powerup_duration_ms: f64,

    pub kill_score: u32,
    pub level_score_step: u32,
    pub initial_max_enemies: u32,
    pub max_enemies_per_level: u32,

    pub target_fps: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_bottom_margin: PLAYER_BOTTOM_MARGIN,
            player_base_speed: PLAYER_BASE_SPEED,
            player_boosted_speed: PLAYER_BOOSTED_SPEED,

            enemy_width: ENEMY_WIDTH,
            enemy_height: ENEMY_HEIGHT,
            enemy_speed: ENEMY_SPEED,
            enemy_spawn_interval_ms: ENEMY_SPAWN_INTERVAL_MS,
            enforce_enemy_cap: true,

            bullet_width: BULLET_WIDTH,
            bullet_height: BULLET_HEIGHT,
            bullet_speed: BULLET_SPEED,

            powerup_width: POWERUP_WIDTH,
            powerup_height: POWERUP_HEIGHT,
            powerup_y: POWERUP_Y,
            powerup_speed: POWERUP_SPEED,
            powerup_chance: POWERUP_CHANCE,
            powerup_reference_frame_ms: POWERUP_REFERENCE_FRAME_MS,
            powerup_duration_ms: POWERUP_DURATION_MS,

            kill_score: KILL_SCORE,
            level_score_step: LEVEL_SCORE_STEP,
            initial_max_enemies: INITIAL_MAX_ENEMIES,
            max_enemies_per_level: MAX_ENEMIES_PER_LEVEL,

            target_fps: TARGET_FPS,
        }
    }
}

impl GameConfig {
    /// Read a JSON config file and validate it.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs that cannot produce a playable session.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("playfield_width", self.playfield_width),
            ("playfield_height", self.playfield_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("player_base_speed", self.player_base_speed),
            ("player_boosted_speed", self.player_boosted_speed),
            ("enemy_width", self.enemy_width),
            ("enemy_height", self.enemy_height),
            ("enemy_speed", self.enemy_speed),
            ("bullet_width", self.bullet_width),
            ("bullet_height", self.bullet_height),
            ("bullet_speed", self.bullet_speed),
            ("powerup_width", self.powerup_width),
            ("powerup_height", self.powerup_height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("{name} must be positive, got {value}")));
            }
        }

        for (name, width) in [
            ("player_width", self.player_width),
            ("enemy_width", self.enemy_width),
            ("powerup_width", self.powerup_width),
        ] {
            if width > self.playfield_width {
                return Err(invalid(format!(
                    "{name} ({width}) exceeds playfield_width ({})",
                    self.playfield_width
                )));
            }
        }

        if self.player_bottom_margin < 0.0 || self.player_bottom_margin > self.playfield_height {
            return Err(invalid(format!(
                "player_bottom_margin must lie within the playfield, got {}",
                self.player_bottom_margin
            )));
        }

        if !(self.powerup_speed.is_finite() && self.powerup_speed >= 0.0) {
            return Err(invalid(format!(
                "powerup_speed must not be negative, got {}",
                self.powerup_speed
            )));
        }

        if !(0.0..=1.0).contains(&self.powerup_chance) {
            return Err(invalid(format!(
                "powerup_chance must be in [0, 1], got {}",
                self.powerup_chance
            )));
        }

        for (name, ms) in [
            ("enemy_spawn_interval_ms", self.enemy_spawn_interval_ms),
            ("powerup_reference_frame_ms", self.powerup_reference_frame_ms),
            ("powerup_duration_ms", self.powerup_duration_ms),
        ] {
            if !(ms.is_finite() && ms > 0.0) {
                return Err(invalid(format!("{name} must be positive, got {ms}")));
            }
        }

        if self.level_score_step == 0 {
            return Err(invalid("level_score_step must be at least 1".to_string()));
        }

        if self.target_fps == 0 {
            return Err(invalid("target_fps must be at least 1".to_string()));
        }

        Ok(())
    }

    /// Player's starting y: its top edge sits `player_bottom_margin` above the floor.
    pub fn player_start_y(&self) -> f32 {
        self.playfield_height - self.player_bottom_margin
    }
}

fn invalid(msg: String) -> GameError {
    GameError::InvalidConfig(msg)
}
