//! Rendering layer.
//!
//! `render` receives a drawing surface and an immutable view of the game
//! state.  No game logic is performed; this module only translates state
//! into draw calls.  Coordinates passed to a surface are playfield pixels.

use std::io;

use crate::compute::powerup_remaining_fraction;
use crate::entities::{Bounded, GameState, Rect};
use crate::error::{GameError, Result};

// ── Colour palette ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const C_PLAYER: Rgb = Rgb(0x00, 0x00, 0xff);
pub const C_ENEMY: Rgb = Rgb(0xff, 0x00, 0x00);
pub const C_BULLET: Rgb = Rgb(0xff, 0xff, 0xff);
pub const C_POWERUP: Rgb = Rgb(0x00, 0xff, 0x00);
pub const C_TEXT: Rgb = Rgb(0xff, 0xff, 0xff);

// ── Text ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Font {
    pub size_px: u16,
    pub bold: bool,
}

pub const SCORE_FONT: Font = Font { size_px: 24, bold: false };
pub const BANNER_FONT: Font = Font { size_px: 48, bold: true };

/// Score text baseline, top-left.
pub const SCORE_POS: (f32, f32) = (10.0, 30.0);
/// Half the banner's rendered width at 48px.
pub const BANNER_HALF_WIDTH: f32 = 120.0;
pub const GAME_OVER_TEXT: &str = "Game Over";

/// Power-up progress bar under the score.
pub const POWERUP_BAR: Rect = Rect {
    x: 10.0,
    y: 40.0,
    width: 100.0,
    height: 5.0,
};

// ── Surface ───────────────────────────────────────────────────────────────────

/// A 2D drawing target with fixed logical dimensions.
pub trait Surface {
    /// Logical (width, height) in playfield pixels.
    fn size(&self) -> (f32, f32);
    fn clear(&mut self) -> io::Result<()>;
    fn fill_rect(&mut self, rect: Rect, color: Rgb) -> io::Result<()>;
    /// `y` is the text baseline.
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: Font, color: Rgb) -> io::Result<()>;
    /// Make everything drawn since `clear` visible.
    fn present(&mut self) -> io::Result<()>;
}

/// Startup precondition: the surface must have a positive area.
pub fn check_surface<S: Surface + ?Sized>(surface: &S) -> Result<()> {
    let (width, height) = surface.size();
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(GameError::InvalidSurface { width, height })
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<S: Surface + ?Sized>(surface: &mut S, state: &GameState) -> io::Result<()> {
    surface.clear()?;

    surface.fill_rect(state.player.bounds(), C_PLAYER)?;
    for enemy in &state.enemies {
        surface.fill_rect(enemy.bounds(), C_ENEMY)?;
    }
    for bullet in &state.bullets {
        surface.fill_rect(bullet.bounds(), C_BULLET)?;
    }
    for powerup in &state.powerups {
        surface.fill_rect(powerup.bounds(), C_POWERUP)?;
    }

    draw_hud(surface, state)?;

    if state.is_game_over() {
        draw_game_over(surface)?;
    }

    surface.present()
}

fn draw_hud<S: Surface + ?Sized>(surface: &mut S, state: &GameState) -> io::Result<()> {
    let (x, y) = SCORE_POS;
    surface.fill_text(&format!("Score: {}", state.score), x, y, SCORE_FONT, C_TEXT)?;

    let remaining = powerup_remaining_fraction(state) as f32;
    if remaining > 0.0 {
        let bar = Rect {
            width: POWERUP_BAR.width * remaining,
            ..POWERUP_BAR
        };
        surface.fill_rect(bar, C_POWERUP)?;
    }
    Ok(())
}

fn draw_game_over<S: Surface + ?Sized>(surface: &mut S) -> io::Result<()> {
    let (width, height) = surface.size();
    surface.fill_text(
        GAME_OVER_TEXT,
        width / 2.0 - BANNER_HALF_WIDTH,
        height / 2.0,
        BANNER_FONT,
        C_TEXT,
    )
}

// ── Recording surface ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Rect { rect: Rect, color: Rgb },
    Text { text: String, x: f32, y: f32, font: Font, color: Rgb },
}

/// Headless surface that keeps the draw calls of the current frame.
#[derive(Clone, Debug)]
pub struct DrawList {
    width: f32,
    height: f32,
    commands: Vec<DrawCommand>,
    frames_presented: u64,
}

impl DrawList {
    pub fn new(width: f32, height: f32) -> Self {
        DrawList {
            width,
            height,
            commands: Vec::new(),
            frames_presented: 0,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Rectangles drawn in `color`, in draw order.
    pub fn rects(&self, color: Rgb) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Rect { rect, color: c } if *c == color => Some(*rect),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for DrawList {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self) -> io::Result<()> {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) -> io::Result<()> {
        self.commands.push(DrawCommand::Rect { rect, color });
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: Font, color: Rgb) -> io::Result<()> {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            font,
            color,
        });
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        self.frames_presented += 1;
        Ok(())
    }
}
