//! Error types for startup and I/O failures.
//!
//! Collisions and game over are state transitions, never errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// Terminal or file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid JSON for `GameConfig`
    #[error("Config parse failed: {0}")]
    Config(#[from] serde_json::Error),

    /// Config parsed but describes an unplayable game
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Drawing surface has no usable area
    #[error("Invalid surface: {width}x{height}")]
    InvalidSurface { width: f32, height: f32 },
}

pub type Result<T> = std::result::Result<T, GameError>;
