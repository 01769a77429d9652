//! Enemy and power-up creation.
//!
//! Both gates are driven by the elapsed time of the current step, so a
//! session advanced with fixed deltas and a seeded RNG is fully reproducible.

use log::debug;
use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{Enemy, GameState, PowerUp};

/// Append an enemy at a random x along the top edge.
pub fn spawn_enemy(state: &mut GameState, rng: &mut impl Rng) {
    let cfg = &state.config;
    let x = rng.gen_range(0.0..=(state.width - cfg.enemy_width));
    state.enemies.push(Enemy {
        x,
        y: 0.0,
        width: cfg.enemy_width,
        height: cfg.enemy_height,
    });
    debug!("Enemy spawned at x: {:.1} ({} on screen)", x, state.enemies.len());
}

/// Append a power-up at a random x on its fixed row.
pub fn spawn_powerup(state: &mut GameState, rng: &mut impl Rng) {
    let cfg = &state.config;
    let x = rng.gen_range(0.0..=(state.width - cfg.powerup_width));
    state.powerups.push(PowerUp {
        x,
        y: cfg.powerup_y,
        width: cfg.powerup_width,
        height: cfg.powerup_height,
    });
    debug!("Power-up spawned at x: {:.1}", x);
}

/// Whether another enemy may enter the playfield.
pub fn below_enemy_cap(state: &GameState) -> bool {
    !state.config.enforce_enemy_cap || (state.enemies.len() as u32) < state.max_enemies
}

/// Starting value for the spawn timer: already past the interval, so the
/// first step of a session spawns an enemy.
pub fn primed_spawn_timer(config: &GameConfig) -> f64 {
    config.enemy_spawn_interval_ms + 1.0
}

/// Advance the spawn timer and spawn once it has run past the interval.
///
/// While the cap is reached the timer keeps running, so the next enemy
/// appears on the first step with room for it.
pub fn enemy_spawn_gate(state: &mut GameState, delta_ms: f64, rng: &mut impl Rng) {
    state.spawn_elapsed_ms += delta_ms;
    if state.spawn_elapsed_ms > state.config.enemy_spawn_interval_ms && below_enemy_cap(state) {
        spawn_enemy(state, rng);
        state.spawn_elapsed_ms = 0.0;
    }
}

/// Probability of a power-up appearing during a step of `delta_ms`.
///
/// `powerup_chance` is the per-frame chance at the reference frame length;
/// longer steps compound it so the rate per second does not depend on FPS.
pub fn powerup_probability(chance: f64, reference_frame_ms: f64, delta_ms: f64) -> f64 {
    if delta_ms <= 0.0 || chance <= 0.0 {
        return 0.0;
    }
    let frames = delta_ms / reference_frame_ms;
    (1.0 - (1.0 - chance).powf(frames)).clamp(0.0, 1.0)
}

/// One Bernoulli trial per step.
pub fn powerup_spawn_trial(state: &mut GameState, delta_ms: f64, rng: &mut impl Rng) {
    let p = powerup_probability(
        state.config.powerup_chance,
        state.config.powerup_reference_frame_ms,
        delta_ms,
    );
    if p > 0.0 && rng.gen_bool(p) {
        spawn_powerup(state, rng);
    }
}
