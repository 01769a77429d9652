use arcade_shooter::compute::init_state;
use arcade_shooter::display::*;
use arcade_shooter::entities::*;
use arcade_shooter::terminal::TerminalSurface;
use arcade_shooter::{GameConfig, GameError};

fn make_state() -> GameState {
    init_state(&GameConfig::default())
}

fn draw(state: &GameState) -> DrawList {
    let mut list = DrawList::new(state.width, state.height);
    render(&mut list, state).unwrap();
    list
}

// ── render → DrawList ─────────────────────────────────────────────────────────

#[test]
fn fresh_game_draws_player_and_score() {
    let list = draw(&make_state());
    assert_eq!(
        list.commands(),
        &[
            DrawCommand::Clear,
            DrawCommand::Rect {
                rect: Rect::new(225.0, 440.0, 50.0, 50.0),
                color: C_PLAYER,
            },
            DrawCommand::Text {
                text: "Score: 0".to_string(),
                x: 10.0,
                y: 30.0,
                font: SCORE_FONT,
                color: C_TEXT,
            },
        ]
    );
    assert_eq!(list.frames_presented(), 1);
}

#[test]
fn entities_drawn_in_layer_order() {
    let mut s = make_state();
    s.enemies.push(Enemy { x: 10.0, y: 20.0, width: 40.0, height: 40.0 });
    s.bullets.push(Bullet { x: 100.0, y: 200.0, width: 5.0, height: 10.0 });
    s.powerups.push(PowerUp { x: 300.0, y: 10.0, width: 100.0, height: 10.0 });
    let list = draw(&s);

    let colors: Vec<Rgb> = list
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Rect { color, .. } => Some(*color),
            _ => None,
        })
        .collect();
    assert_eq!(colors, vec![C_PLAYER, C_ENEMY, C_BULLET, C_POWERUP]);

    assert_eq!(list.rects(C_ENEMY), vec![Rect::new(10.0, 20.0, 40.0, 40.0)]);
    assert_eq!(list.rects(C_BULLET), vec![Rect::new(100.0, 200.0, 5.0, 10.0)]);
    // Text comes after every entity.
    assert!(matches!(list.commands().last(), Some(DrawCommand::Text { .. })));
}

#[test]
fn score_text_tracks_score() {
    let mut s = make_state();
    s.score = 130;
    assert_eq!(draw(&s).texts(), vec!["Score: 130"]);
}

#[test]
fn banner_only_when_game_over() {
    let mut s = make_state();
    assert!(!draw(&s).texts().contains(&GAME_OVER_TEXT));

    s.status = GameStatus::GameOver;
    let list = draw(&s);
    assert_eq!(list.texts(), vec!["Score: 0", "Game Over"]);
    assert_eq!(
        list.commands().last(),
        Some(&DrawCommand::Text {
            text: "Game Over".to_string(),
            x: 130.0,
            y: 250.0,
            font: BANNER_FONT,
            color: C_TEXT,
        })
    );
}

#[test]
fn banner_centres_on_surface() {
    let mut s = make_state();
    s.status = GameStatus::GameOver;
    let mut list = DrawList::new(800.0, 600.0);
    render(&mut list, &s).unwrap();
    let banner = list
        .commands()
        .iter()
        .find_map(|c| match c {
            DrawCommand::Text { text, x, y, .. } if text == GAME_OVER_TEXT => Some((*x, *y)),
            _ => None,
        });
    assert_eq!(banner, Some((280.0, 300.0)));
}

#[test]
fn powerup_bar_shrinks_with_time() {
    let mut s = make_state();
    assert!(draw(&s).rects(C_POWERUP).is_empty());

    s.power_up = PowerUpTimer { active: true, elapsed_ms: 2500.0 };
    let bars = draw(&s).rects(C_POWERUP);
    assert_eq!(bars, vec![Rect { width: 50.0, ..POWERUP_BAR }]);
}

#[test]
fn each_render_replaces_previous_frame() {
    let mut s = make_state();
    s.enemies.push(Enemy { x: 0.0, y: 0.0, width: 40.0, height: 40.0 });
    let mut list = DrawList::new(500.0, 500.0);
    render(&mut list, &s).unwrap();
    s.enemies.clear();
    render(&mut list, &s).unwrap();

    assert!(list.rects(C_ENEMY).is_empty());
    assert_eq!(list.frames_presented(), 2);
    assert_eq!(list.commands()[0], DrawCommand::Clear);
}

#[test]
fn check_surface_needs_area() {
    assert!(check_surface(&DrawList::new(500.0, 500.0)).is_ok());
    assert!(matches!(
        check_surface(&DrawList::new(0.0, 500.0)),
        Err(GameError::InvalidSurface { .. })
    ));
    assert!(check_surface(&DrawList::new(500.0, -1.0)).is_err());
}

// ── TerminalSurface ───────────────────────────────────────────────────────────

/// 50x25 cells over a 500x500 playfield: one cell is 10px wide, 20px tall.
fn terminal() -> TerminalSurface<Vec<u8>> {
    TerminalSurface::new(Vec::new(), 50, 25, 500.0, 500.0)
}

const BLOCK: char = '█';

#[test]
fn terminal_rect_covers_scaled_cells() {
    let mut t = terminal();
    t.fill_rect(Rect::new(0.0, 0.0, 40.0, 40.0), C_ENEMY).unwrap();
    assert_eq!(t.char_at(0, 0), Some(BLOCK));
    assert_eq!(t.char_at(3, 1), Some(BLOCK));
    assert_eq!(t.char_at(4, 0), Some(' '));
    assert_eq!(t.char_at(0, 2), Some(' '));
}

#[test]
fn thin_rect_still_visible() {
    let mut t = terminal();
    t.fill_rect(Rect::new(250.0, 440.0, 5.0, 10.0), C_BULLET).unwrap();
    assert_eq!(t.char_at(25, 22), Some(BLOCK));
    assert_eq!(t.char_at(26, 22), Some(' '));
}

#[test]
fn terminal_clips_offscreen_draws() {
    let mut t = terminal();
    t.fill_rect(Rect::new(480.0, 490.0, 40.0, 40.0), C_ENEMY).unwrap();
    t.fill_rect(Rect::new(-100.0, -100.0, 50.0, 50.0), C_ENEMY).unwrap();
    assert_eq!(t.char_at(49, 24), Some(BLOCK));
    assert_eq!(t.char_at(50, 0), None);
    assert_eq!(t.char_at(0, 0), Some(' '));
}

#[test]
fn terminal_text_and_clear() {
    let mut t = terminal();
    t.fill_text("Score: 0", 10.0, 30.0, SCORE_FONT, C_TEXT).unwrap();
    assert_eq!(t.char_at(1, 0), Some('S'));
    assert_eq!(t.char_at(8, 0), Some('0'));

    t.clear().unwrap();
    assert_eq!(t.char_at(1, 0), Some(' '));
}

#[test]
fn terminal_present_writes_frame() {
    let mut t = terminal();
    render(&mut t, &make_state()).unwrap();
    let bytes = t.into_inner();
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("Score: 0"));
    assert!(text.contains(BLOCK));
}

#[test]
fn terminal_resize_resets_grid() {
    let mut t = terminal();
    t.fill_rect(Rect::new(0.0, 0.0, 500.0, 500.0), C_ENEMY).unwrap();
    t.resize(80, 40);
    assert_eq!(t.grid_size(), (80, 40));
    assert_eq!(t.size(), (500.0, 500.0));
    assert_eq!(t.char_at(0, 0), Some(' '));
    assert_eq!(t.char_at(79, 39), Some(' '));
}
