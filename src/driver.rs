//! Frame-paced orchestration: clock → input → step → render.
//!
//! The host owns the actual frame scheduling (a sleep loop in the binary, or
//! a plain `for` loop when headless) and calls `GameLoop::run_frame` once per
//! frame until it reports `FrameOutcome::Finished`.

use std::io;
use std::time::Duration;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::clock::{Clock, ManualClock};
use crate::compute::{apply_command, init_state, tick, Command};
use crate::config::GameConfig;
use crate::display::{check_surface, render, DrawList, Surface};
use crate::entities::GameState;
use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Schedule another frame.
    Continue,
    /// The game ended; the loop must not be rescheduled.
    Finished,
}

pub struct GameLoop<C: Clock, R: Rng> {
    state: GameState,
    clock: C,
    rng: R,
    last_frame_ms: f64,
    finished: bool,
}

impl<C: Clock, R: Rng> GameLoop<C, R> {
    /// Validate the config and start a session.  The first frame's elapsed
    /// time is measured from this call.
    pub fn new(config: &GameConfig, clock: C, rng: R) -> Result<Self> {
        config.validate()?;
        let last_frame_ms = clock.now_ms();
        info!(
            "New session on a {}x{} playfield",
            config.playfield_width, config.playfield_height
        );
        Ok(GameLoop {
            state: init_state(config),
            clock,
            rng,
            last_frame_ms,
            finished: false,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Run one tick: apply the input received since the last frame, step the
    /// simulation by the measured elapsed time, then draw.
    pub fn run_frame<S: Surface + ?Sized>(
        &mut self,
        commands: &[Command],
        surface: &mut S,
    ) -> io::Result<FrameOutcome> {
        if self.finished {
            return Ok(FrameOutcome::Finished);
        }

        let now = self.clock.now_ms();
        let delta_ms = (now - self.last_frame_ms).max(0.0);
        self.last_frame_ms = now;

        for &command in commands {
            self.state = apply_command(&self.state, command);
        }
        self.state = tick(&self.state, delta_ms, &mut self.rng);

        render(surface, &self.state)?;

        if self.state.is_game_over() {
            self.finished = true;
            info!(
                "Game loop finished after {} frames. Score: {}, level: {}",
                self.state.frame, self.state.score, self.state.level
            );
            return Ok(FrameOutcome::Finished);
        }
        Ok(FrameOutcome::Continue)
    }
}

/// Wall-clock length of one frame slot.
pub fn frame_interval(config: &GameConfig) -> Duration {
    Duration::from_secs_f64(1.0 / config.target_fps.max(1) as f64)
}

/// Play a session without a terminal: fixed frame length, seeded RNG, no
/// input.  Stops at game over or after `max_frames`.
pub fn run_headless(config: &GameConfig, seed: u64, max_frames: u64) -> Result<GameState> {
    let clock = ManualClock::new();
    let mut game = GameLoop::new(config, clock.clone(), StdRng::seed_from_u64(seed))?;
    let mut surface = DrawList::new(config.playfield_width, config.playfield_height);
    check_surface(&surface)?;

    let frame_ms = frame_interval(config).as_secs_f64() * 1000.0;
    for _ in 0..max_frames {
        clock.advance(frame_ms);
        let outcome = game.run_frame(&[], &mut surface)?;
        let s = game.state();
        debug!(
            "frame {}: enemies {}, bullets {}, power-ups {}, score {}",
            s.frame,
            s.enemies.len(),
            s.bullets.len(),
            s.powerups.len(),
            s.score
        );
        if outcome == FrameOutcome::Finished {
            break;
        }
    }

    Ok(game.state().clone())
}
