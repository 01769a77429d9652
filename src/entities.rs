//! All game entity types. Pure data, no logic.
//!
//! Positions and sizes are in playfield pixels, origin top-left, y grows down.

use crate::config::GameConfig;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Anything that occupies a box on the playfield.
pub trait Bounded {
    fn bounds(&self) -> Rect;
}

impl Bounded for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}

macro_rules! impl_bounded {
    ($($ty:ty),*) => {
        $(
            impl Bounded for $ty {
                fn bounds(&self) -> Rect {
                    Rect::new(self.x, self.y, self.width, self.height)
                }
            }
        )*
    };
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Pixels per movement key press; raised while a power-up is active.
    pub speed: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

// ── Projectiles & pickups ─────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PowerUp {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl_bounded!(Player, Enemy, Bullet, PowerUp);

// ── Session ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Speed-boost effect. `elapsed_ms` only advances while `active`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PowerUpTimer {
    pub active: bool,
    pub elapsed_ms: f64,
}

/// The entire game state.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    pub powerups: Vec<PowerUp>,
    pub score: u32,
    pub level: u32,
    /// Enemy cap; grows with each level.
    pub max_enemies: u32,
    pub status: GameStatus,
    pub power_up: PowerUpTimer,
    /// Milliseconds accumulated since the last enemy spawn.
    pub spawn_elapsed_ms: f64,
    /// Number of simulated (non-frozen) steps.
    pub frame: u64,
    pub width: f32,
    pub height: f32,
    pub config: GameConfig,
}

impl GameState {
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}
