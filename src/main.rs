use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal,
};
use log::{error, info, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;

use arcade_shooter::clock::SystemClock;
use arcade_shooter::compute::Command;
use arcade_shooter::display::check_surface;
use arcade_shooter::driver::{frame_interval, run_headless, FrameOutcome, GameLoop};
use arcade_shooter::terminal::{wait_for_fresh_key, ScreenGuard, TerminalSurface};
use arcade_shooter::{GameConfig, GameError, Result};

/// Dodge the falling enemies, shoot them down, grab the green bars for speed.
#[derive(Parser, Debug)]
#[command(name = "arcade_shooter")]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON file overriding the default tuning values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed; random when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Run without a terminal and print the final score
    #[arg(long)]
    headless: bool,

    /// Frame limit for headless runs
    #[arg(long, default_value = "3600")]
    frames: u64,

    /// Log file (the terminal is used for the game itself)
    #[arg(long, default_value = "arcade_shooter.log")]
    log_file: PathBuf,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

// ── Input ─────────────────────────────────────────────────────────────────────

enum InputAction {
    Game(Command),
    Quit,
    Resize(u16, u16),
}

/// Map a terminal event to what the game loop should do with it.
fn classify(ev: Event) -> Option<InputAction> {
    match ev {
        Event::Key(KeyEvent {
            code,
            kind,
            modifiers,
            ..
        }) if kind != KeyEventKind::Release => match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(InputAction::Quit),
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                Some(InputAction::Quit)
            }
            KeyCode::Left => Some(InputAction::Game(Command::MoveLeft)),
            KeyCode::Right => Some(InputAction::Game(Command::MoveRight)),
            KeyCode::Char(' ') => Some(InputAction::Game(Command::Fire)),
            _ => None,
        },
        Event::Resize(cols, rows) => Some(InputAction::Resize(cols, rows)),
        _ => None,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Drive frames until game over or quit.  Input that arrived during the
/// previous frame is drained before the step, never applied mid-step.
fn game_loop<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: &GameConfig,
    seed: u64,
) -> Result<()> {
    let (cols, rows) = terminal::size()?;
    if cols == 0 || rows == 0 {
        return Err(GameError::InvalidSurface {
            width: cols as f32,
            height: rows as f32,
        });
    }
    let mut surface = TerminalSurface::new(
        out,
        cols,
        rows,
        config.playfield_width,
        config.playfield_height,
    );
    check_surface(&surface)?;
    info!("Terminal size: {}x{}", cols, rows);

    let mut game = GameLoop::new(config, SystemClock::new(), StdRng::seed_from_u64(seed))?;
    let frame = frame_interval(config);

    loop {
        let frame_start = Instant::now();

        let mut commands = Vec::new();
        while let Ok(ev) = rx.try_recv() {
            match classify(ev) {
                Some(InputAction::Game(command)) => commands.push(command),
                Some(InputAction::Quit) => {
                    info!("Quit requested. Exiting game loop.");
                    return Ok(());
                }
                Some(InputAction::Resize(c, r)) => {
                    info!("Terminal resized to {}x{}", c, r);
                    surface.resize(c, r);
                }
                None => {}
            }
        }

        if game.run_frame(&commands, &mut surface)? == FrameOutcome::Finished {
            break;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }

    // The final frame (with the banner) stays up until a new key press.
    info!("Game over screen displayed. Waiting for key press.");
    wait_for_fresh_key(rx);
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    simple_logging::log_to_file(&cli.log_file, level)?;
    info!("Starting arcade_shooter.");

    let config = match &cli.config {
        Some(path) => GameConfig::load(path).map_err(|e| {
            error!("Failed to load config {}: {}", path.display(), e);
            e
        })?,
        None => GameConfig::default(),
    };
    config.validate()?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("Seed: {}", seed);

    if cli.headless {
        let state = run_headless(&config, seed, cli.frames)?;
        println!(
            "Score: {}  Level: {}  Frames: {}{}",
            state.score,
            state.level,
            state.frame,
            if state.is_game_over() { "  (game over)" } else { "" }
        );
        return Ok(());
    }

    let mut screen = ScreenGuard::enter(BufWriter::new(stdout()), true).map_err(|e| {
        error!("Failed to set up the terminal: {}", e);
        e
    })?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = game_loop(screen.writer(), &rx, &config, seed);
    if let Err(e) = &result {
        error!("Game loop failed: {}", e);
    }

    drop(screen);
    info!("Exiting application.");

    result
}
