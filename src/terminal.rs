//! Terminal drawing surface.
//!
//! The playfield is scaled onto the terminal's cell grid.  Draw calls land in
//! an off-screen cell buffer; `present` writes the whole buffer in one flush
//! so a frame is never shown half-drawn.

use std::io::{self, Write};
use std::sync::mpsc::Receiver;

use crossterm::{
    cursor,
    event::{Event, KeyEvent, KeyEventKind},
    style::{self, Attribute, Color, Print},
    terminal, ExecutableCommand, QueueableCommand,
};

use crate::display::{Font, Rgb, Surface};
use crate::entities::Rect;

const BLOCK: char = '█';

#[derive(Clone, Copy, Debug, PartialEq)]
struct Cell {
    ch: char,
    fg: Option<Color>,
    bold: bool,
}

impl Cell {
    const BLANK: Cell = Cell {
        ch: ' ',
        fg: None,
        bold: false,
    };
}

pub struct TerminalSurface<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
    /// Logical playfield size mapped onto `cols` x `rows`.
    width: f32,
    height: f32,
    cells: Vec<Cell>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, cols: u16, rows: u16, width: f32, height: f32) -> Self {
        TerminalSurface {
            out,
            cols,
            rows,
            width,
            height,
            cells: vec![Cell::BLANK; cols as usize * rows as usize],
        }
    }

    /// Follow a terminal resize; the next frame redraws everything.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.cells = vec![Cell::BLANK; cols as usize * rows as usize];
    }

    pub fn grid_size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    /// Character at a cell, for inspection.
    pub fn char_at(&self, col: u16, row: u16) -> Option<char> {
        self.index(col as i32, row as i32).map(|i| self.cells[i].ch)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn col_of(&self, x: f32) -> f32 {
        x * self.cols as f32 / self.width
    }

    fn row_of(&self, y: f32) -> f32 {
        y * self.rows as f32 / self.height
    }

    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            None
        } else {
            Some(row as usize * self.cols as usize + col as usize)
        }
    }

    fn put(&mut self, col: i32, row: i32, cell: Cell) {
        if let Some(i) = self.index(col, row) {
            self.cells[i] = cell;
        }
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.0,
        g: rgb.1,
        b: rgb.2,
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self) -> io::Result<()> {
        self.cells.fill(Cell::BLANK);
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) -> io::Result<()> {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return Ok(());
        }
        // Anything with area covers at least one cell, so thin bullets stay visible.
        let c0 = self.col_of(rect.x).floor() as i32;
        let c1 = (self.col_of(rect.right()).ceil() as i32).max(c0 + 1);
        let r0 = self.row_of(rect.y).floor() as i32;
        let r1 = (self.row_of(rect.bottom()).ceil() as i32).max(r0 + 1);

        let cell = Cell {
            ch: BLOCK,
            fg: Some(to_color(color)),
            bold: false,
        };
        for row in r0..r1 {
            for col in c0..c1 {
                self.put(col, row, cell);
            }
        }
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: Font, color: Rgb) -> io::Result<()> {
        // Baseline to the row holding the glyphs' middle.
        let row = self.row_of(y - font.size_px as f32 / 2.0).floor() as i32;
        let col0 = self.col_of(x).floor() as i32;
        for (i, ch) in text.chars().enumerate() {
            let cell = Cell {
                ch,
                fg: Some(to_color(color)),
                bold: font.bold,
            };
            self.put(col0 + i as i32, row, cell);
        }
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        let cols = self.cols as usize;
        for (row, line) in self.cells.chunks(cols.max(1)).enumerate() {
            self.out.queue(cursor::MoveTo(0, row as u16))?;

            let mut run = String::new();
            let mut style_of_run: Option<(Option<Color>, bool)> = None;
            for cell in line {
                let cell_style = (cell.fg, cell.bold);
                if style_of_run != Some(cell_style) {
                    if !run.is_empty() {
                        self.out.queue(Print(&run))?;
                        run.clear();
                    }
                    self.out.queue(style::SetAttribute(Attribute::Reset))?;
                    if let Some(fg) = cell.fg {
                        self.out.queue(style::SetForegroundColor(fg))?;
                    }
                    if cell.bold {
                        self.out.queue(style::SetAttribute(Attribute::Bold))?;
                    }
                    style_of_run = Some(cell_style);
                }
                run.push(cell.ch);
            }
            if !run.is_empty() {
                self.out.queue(Print(&run))?;
            }
        }

        self.out.queue(style::ResetColor)?;
        self.out.queue(style::SetAttribute(Attribute::Reset))?;
        self.out.flush()
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

/// Alternate screen, hidden cursor and (optionally) raw mode for as long as
/// the guard lives.  Dropping it restores the terminal, including when setup
/// fails halfway or the game panics.
pub struct ScreenGuard<W: Write> {
    out: W,
    raw_mode: bool,
}

impl<W: Write> ScreenGuard<W> {
    pub fn enter(out: W, raw_mode: bool) -> io::Result<Self> {
        if raw_mode {
            terminal::enable_raw_mode()?;
        }
        let mut guard = ScreenGuard { out, raw_mode };
        guard.out.execute(terminal::EnterAlternateScreen)?;
        guard.out.execute(cursor::Hide)?;
        Ok(guard)
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Drop for ScreenGuard<W> {
    fn drop(&mut self) {
        let _ = self.out.execute(cursor::Show);
        let _ = self.out.execute(terminal::LeaveAlternateScreen);
        if self.raw_mode {
            let _ = terminal::disable_raw_mode();
        }
    }
}

/// Block until a key is pressed after this call.  Events already queued are
/// discarded first.  Returns `None` once the sender is gone.
pub fn wait_for_fresh_key(rx: &Receiver<Event>) -> Option<KeyEvent> {
    while rx.try_recv().is_ok() {}
    while let Ok(ev) = rx.recv() {
        if let Event::Key(key) = ev {
            if key.kind != KeyEventKind::Release {
                return Some(key);
            }
        }
    }
    None
}
