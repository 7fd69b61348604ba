//! Terminal presentation.
//!
//! [`compose`] turns a [`GameState`] into a [`Frame`] without touching the
//! terminal; [`Renderer`] then writes only the cells that changed since the
//! previous frame.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use unicode_width::UnicodeWidthStr;

use crate::components::{Dir, Pos};
use crate::game::GameState;
use crate::ghost::GhostState;
use crate::level::Tile;

/// Terminal columns per maze cell.
pub const CELL_W: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Glyph {
    Wall,
    Empty,
    Pellet,
    Bonus,
    /// Mouth faces the heading; right when standing still.
    Player(Option<Dir>),
    Ghost { caged: bool },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub glyph: Glyph,
    pub color: Color,
}

const BLANK: Cell = Cell {
    glyph: Glyph::Empty,
    color: Color::Reset,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<Cell>,
    pub hud: String,
}

impl Frame {
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x).copied()
    }
}

pub fn compose(state: &GameState) -> Frame {
    let width = state.grid.width();
    let height = state.grid.height();
    let mut cells = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            cells.push(cell_for(state, Pos::new(x as i32, y as i32)));
        }
    }
    Frame {
        width,
        height,
        cells,
        hud: format!("Score: {}  (q to quit)", state.score),
    }
}

// Ghosts draw over the player, the player over bonuses, bonuses over tiles.
fn cell_for(state: &GameState, pos: Pos) -> Cell {
    if let Some(ghost) = state.ghosts.iter().find(|g| g.pos == pos) {
        let caged = ghost.state == GhostState::Caged;
        return Cell {
            glyph: Glyph::Ghost { caged },
            color: if caged { Color::Magenta } else { Color::Red },
        };
    }
    if state.player.pos == pos {
        return Cell {
            glyph: Glyph::Player(state.player.direction),
            color: Color::Yellow,
        };
    }
    if state.bonuses.iter().any(|b| !b.collected && b.pos == pos) {
        return Cell {
            glyph: Glyph::Bonus,
            color: Color::Red,
        };
    }
    match state.grid.tile(pos) {
        Some(Tile::Wall) => Cell {
            glyph: Glyph::Wall,
            color: Color::Blue,
        },
        Some(Tile::Pellet) => Cell {
            glyph: Glyph::Pellet,
            color: Color::White,
        },
        Some(Tile::Empty) | None => BLANK,
    }
}

pub fn glyph_text(glyph: Glyph) -> &'static str {
    match glyph {
        Glyph::Wall => "██",
        Glyph::Empty => "  ",
        Glyph::Pellet => "· ",
        Glyph::Bonus => "🍒",
        Glyph::Player(Some(Dir::Left)) => "ᗤ",
        Glyph::Player(Some(Dir::Up)) => "ᗢ",
        Glyph::Player(Some(Dir::Down)) => "ᗣ",
        Glyph::Player(Some(Dir::Right) | None) => "ᗧ",
        Glyph::Ghost { .. } => "👻",
    }
}

pub struct Renderer {
    last: Vec<Cell>,
    last_hud: String,
    needs_full: bool,
    origin_x: u16,
    origin_y: u16,
}

impl Renderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            last: vec![BLANK; width * height],
            last_hud: String::new(),
            needs_full: true,
            origin_x: 0,
            origin_y: 1,
        }
    }

    /// Forces the next draw to repaint everything.
    pub fn invalidate(&mut self) {
        self.needs_full = true;
    }

    /// Draws `frame` centered in a terminal of `term_size` (columns, rows).
    pub fn draw(
        &mut self,
        out: &mut impl Write,
        frame: &Frame,
        term_size: (u16, u16),
    ) -> io::Result<()> {
        let (term_w, term_h) = term_size;
        let needed_w = (frame.width * CELL_W) as u16;
        let needed_h = (frame.height + 2) as u16;

        out.queue(MoveTo(0, 0))?;
        if term_w < needed_w || term_h < needed_h {
            out.queue(Clear(ClearType::All))?;
            out.queue(Print(format!(
                "Terminal too small. Need at least {}x{} (cols x rows). Current: {}x{}.",
                needed_w, needed_h, term_w, term_h
            )))?;
            out.flush()?;
            self.needs_full = true;
            return Ok(());
        }

        let origin_x = (term_w - needed_w) / 2;
        let origin_y = (term_h - needed_h) / 2 + 1;
        if origin_x != self.origin_x || origin_y != self.origin_y {
            self.origin_x = origin_x;
            self.origin_y = origin_y;
            self.needs_full = true;
        }
        if self.last.len() != frame.cells.len() {
            self.last = vec![BLANK; frame.cells.len()];
            self.needs_full = true;
        }
        if self.needs_full {
            out.queue(Clear(ClearType::All))?;
        }

        if self.needs_full || frame.hud != self.last_hud {
            out.queue(MoveTo(self.origin_x, self.origin_y - 1))?;
            out.queue(SetForegroundColor(Color::White))?;
            out.queue(Clear(ClearType::CurrentLine))?;
            out.queue(Print(&frame.hud))?;
            out.queue(ResetColor)?;
            self.last_hud.clone_from(&frame.hud);
        }

        for (idx, &cell) in frame.cells.iter().enumerate() {
            if self.needs_full || cell != self.last[idx] {
                self.last[idx] = cell;
                let x = idx % frame.width;
                let y = idx / frame.width;
                self.draw_cell(out, x, y, cell)?;
            }
        }
        self.needs_full = false;

        out.flush()
    }

    fn draw_cell(&self, out: &mut impl Write, x: usize, y: usize, cell: Cell) -> io::Result<()> {
        let text = glyph_text(cell.glyph);
        out.queue(MoveTo(
            self.origin_x + (x * CELL_W) as u16,
            self.origin_y + y as u16,
        ))?;
        out.queue(SetForegroundColor(cell.color))?;
        out.queue(Print(text))?;
        let w = UnicodeWidthStr::width(text);
        for _ in w..CELL_W {
            out.queue(Print(' '))?;
        }
        out.queue(ResetColor)?;
        Ok(())
    }
}
