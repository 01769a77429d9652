//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle) and returns a brand-new
//! `GameState`.  Side effects are limited to the injected RNG and logging.

use log::info;
use rand::Rng;

use crate::collision::{claim_pairs, overlaps, without_indices};
use crate::config::GameConfig;
use crate::entities::{
    Bullet, Enemy, GameState, GameStatus, Player, PowerUp, PowerUpTimer,
};
use crate::scoring::{advance_level, award_kills};
use crate::spawner::{enemy_spawn_gate, powerup_spawn_trial, primed_spawn_timer};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial session for a validated config.
pub fn init_state(config: &GameConfig) -> GameState {
    GameState {
        player: Player {
            x: (config.playfield_width - config.player_width) / 2.0,
            y: config.player_start_y(),
            width: config.player_width,
            height: config.player_height,
            speed: config.player_base_speed,
        },
        enemies: Vec::new(),
        bullets: Vec::new(),
        powerups: Vec::new(),
        score: 0,
        level: 1,
        max_enemies: config.initial_max_enemies,
        status: GameStatus::Playing,
        power_up: PowerUpTimer::default(),
        spawn_elapsed_ms: primed_spawn_timer(config),
        frame: 0,
        width: config.playfield_width,
        height: config.playfield_height,
        config: config.clone(),
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// The three key signals the game understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Fire,
}

pub fn apply_command(state: &GameState, command: Command) -> GameState {
    match command {
        Command::MoveLeft => move_player_left(state),
        Command::MoveRight => move_player_right(state),
        Command::Fire => player_shoot(state),
    }
}

/// Shift the ship left by its current speed. Ignored once the game is over.
pub fn move_player_left(state: &GameState) -> GameState {
    if state.is_game_over() {
        return state.clone();
    }
    GameState {
        player: Player {
            x: state.player.x - state.player.speed,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

pub fn move_player_right(state: &GameState) -> GameState {
    if state.is_game_over() {
        return state.clone();
    }
    GameState {
        player: Player {
            x: state.player.x + state.player.speed,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

/// Fire a bullet from the top-centre of the ship.
pub fn player_shoot(state: &GameState) -> GameState {
    if state.is_game_over() {
        return state.clone();
    }
    let new_bullet = Bullet {
        x: state.player.x + state.player.width / 2.0,
        y: state.player.y,
        width: state.config.bullet_width,
        height: state.config.bullet_height,
    };
    let mut bullets = state.bullets.clone();
    bullets.push(new_bullet);
    GameState {
        bullets,
        ..state.clone()
    }
}

// ── Power-up effect ──────────────────────────────────────────────────────────

fn activate_powerup(state: &mut GameState) {
    state.power_up = PowerUpTimer {
        active: true,
        elapsed_ms: 0.0,
    };
    state.player.speed = state.config.player_boosted_speed;
    info!("Power-up collected. Speed: {}", state.player.speed);
}

/// Run the effect clock; expiry restores base speed in the same step.
fn update_powerup_timer(state: &mut GameState, delta_ms: f64) {
    if !state.power_up.active {
        return;
    }
    state.power_up.elapsed_ms += delta_ms;
    if state.power_up.elapsed_ms >= state.config.powerup_duration_ms {
        state.power_up = PowerUpTimer::default();
        state.player.speed = state.config.player_base_speed;
        info!("Power-up expired. Speed: {}", state.player.speed);
    }
}

/// Remaining share of the active effect in `[0, 1]`, zero when inactive.
pub fn powerup_remaining_fraction(state: &GameState) -> f64 {
    if !state.power_up.active {
        return 0.0;
    }
    let left = 1.0 - state.power_up.elapsed_ms / state.config.powerup_duration_ms;
    left.clamp(0.0, 1.0)
}

// ── Per-frame tick (nearly pure: RNG is injected) ───────────────────────────

/// Advance the simulation by one step of `delta_ms` milliseconds.  All
/// randomness comes through `rng` so callers control determinism (useful for
/// tests with a seeded RNG).  A finished game is returned unchanged.
pub fn tick(state: &GameState, delta_ms: f64, rng: &mut impl Rng) -> GameState {
    if state.is_game_over() {
        return state.clone();
    }

    let cfg = &state.config;
    let mut next = state.clone();
    next.frame += 1;

    // ── 1. Move bullets up, drop those past the top ─────────────────────────
    next.bullets = state
        .bullets
        .iter()
        .map(|b| Bullet {
            y: b.y - cfg.bullet_speed,
            ..b.clone()
        })
        .filter(|b| b.y >= 0.0)
        .collect();

    // ── 2. Move enemies down, check contact, drop those past the bottom ─────
    let moved: Vec<Enemy> = state
        .enemies
        .iter()
        .map(|e| Enemy {
            y: e.y + cfg.enemy_speed,
            ..e.clone()
        })
        .collect();

    if moved.iter().any(|e| overlaps(&state.player, e)) {
        next.status = GameStatus::GameOver;
        info!("Ship hit by enemy. Game over. Score: {}", state.score);
    }

    next.enemies = moved.into_iter().filter(|e| e.y <= state.height).collect();

    // ── 3. Collision: bullets ↔ enemies ──────────────────────────────────────
    let pairs = claim_pairs(&next.bullets, &next.enemies);
    if !pairs.is_empty() {
        let used_bullets: Vec<usize> = pairs.iter().map(|&(b, _)| b).collect();
        let killed_enemies: Vec<usize> = pairs.iter().map(|&(_, e)| e).collect();
        next.bullets = without_indices(&next.bullets, &used_bullets);
        next.enemies = without_indices(&next.enemies, &killed_enemies);
        award_kills(&mut next, pairs.len());
    }

    // ── 4. Power-ups fall; collision: player ↔ power-ups ─────────────────────
    let (collected, remaining): (Vec<PowerUp>, Vec<PowerUp>) = state
        .powerups
        .iter()
        .map(|p| PowerUp {
            y: p.y + cfg.powerup_speed,
            ..p.clone()
        })
        .filter(|p| p.y <= state.height)
        .partition(|p| overlaps(&next.player, p));
    next.powerups = remaining;
    if !collected.is_empty() {
        activate_powerup(&mut next);
    }

    // ── 5. Power-up duration ─────────────────────────────────────────────────
    update_powerup_timer(&mut next, delta_ms);

    // ── 6. Level progression ─────────────────────────────────────────────────
    advance_level(&mut next);

    // ── 7. Spawning ──────────────────────────────────────────────────────────
    enemy_spawn_gate(&mut next, delta_ms, rng);
    powerup_spawn_trial(&mut next, delta_ms, rng);

    next
}
