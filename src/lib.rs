//! Single-screen arcade shooter.
//!
//! - `entities`: plain data for the ship, enemies, bullets and power-ups
//! - `compute`: input transitions and the per-frame simulation step
//! - `collision`, `spawner`, `scoring`: pieces of the step
//! - `display`: state → draw calls on a `Surface`
//! - `terminal`: crossterm-backed `Surface`
//! - `driver`: clock-driven frame loop

pub mod clock;
pub mod collision;
pub mod compute;
pub mod config;
pub mod display;
pub mod driver;
pub mod entities;
pub mod error;
pub mod scoring;
pub mod spawner;
pub mod terminal;

pub use config::GameConfig;
pub use error::{GameError, Result};
