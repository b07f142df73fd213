//! Terminal renderer. Reads a session after each step and never mutates it.

use std::io::{Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;
use rand::Rng;
use unicode_width::UnicodeWidthStr;

use crate::constants::{HIGH_SCORE, SYMBOL_COUNT};
use crate::entity::{Direction, Ghost, Player};
use crate::error::GameResult;
use crate::session::Session;
use crate::tile_map::{Cell, TileKind};

const CELL_W: usize = 2;
const SYMBOLS: [&str; SYMBOL_COUNT] = ["A", "B", "C", "D", "E", "F"];
const GHOST_COLORS: [Color; 4] = [Color::Red, Color::Magenta, Color::Cyan, Color::DarkYellow];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GhostLook {
    Vulnerable,
    Flattened,
    Normal(usize),
}

impl GhostLook {
    /// Vulnerable shows over flattened.
    pub fn of(ghost: &Ghost) -> Self {
        if ghost.vulnerable {
            GhostLook::Vulnerable
        } else if ghost.flattened {
            GhostLook::Flattened
        } else {
            GhostLook::Normal(ghost.variant)
        }
    }
}

/// Half-opening of the player's mouth in degrees at `elapsed` seconds.
pub fn mouth_angle(elapsed: f32) -> f32 {
    45.0 * (elapsed * 10.0).sin()
}

/// The mouth's angular span `(start, end)` in degrees, aimed along the
/// player's facing. Screen space, so +90 points down.
pub fn mouth_span(player: &Player, elapsed: f32) -> (f32, f32) {
    let facing = player.direction.y.atan2(player.direction.x).to_degrees();
    let angle = mouth_angle(elapsed);
    (facing - angle, facing + angle)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Player {
        facing: Direction,
        open: bool,
        powered: bool,
    },
    Ghost(GhostLook),
    Tile(TileKind),
}

impl Glyph {
    /// Snaps the mouth span to the nearest axis; a mouth wider than half its
    /// swing draws open.
    pub fn player(player: &Player, elapsed: f32) -> Self {
        let (start, end) = mouth_span(player, elapsed);
        let quarter = (((start + end) / 2.0).rem_euclid(360.0) / 90.0).round() as usize % 4;
        let facing = match quarter {
            0 => Direction::Right,
            1 => Direction::Down,
            2 => Direction::Left,
            _ => Direction::Up,
        };
        Glyph::Player {
            facing,
            open: (end - start).abs() / 2.0 > 22.5,
            powered: player.powered_up,
        }
    }
}

/// Text and color for one glyph; text is at most one cell wide.
pub fn look(glyph: Glyph) -> (&'static str, Color) {
    match glyph {
        Glyph::Player { open, facing, powered } => {
            let text = match (open, facing) {
                (false, _) => "O",
                (true, Direction::Right) => "C",
                (true, Direction::Left) => "Ɔ",
                (true, Direction::Up) => "U",
                (true, Direction::Down) => "∩",
            };
            (text, if powered { Color::DarkYellow } else { Color::Yellow })
        }
        Glyph::Ghost(GhostLook::Vulnerable) => ("😱", Color::Blue),
        Glyph::Ghost(GhostLook::Flattened) => ("__", Color::Grey),
        Glyph::Ghost(GhostLook::Normal(variant)) => {
            ("👻", GHOST_COLORS[variant % GHOST_COLORS.len()])
        }
        Glyph::Tile(TileKind::Wall) => ("██", Color::DarkMagenta),
        Glyph::Tile(TileKind::Door) => ("==", Color::Magenta),
        Glyph::Tile(TileKind::Key) => ("🔑", Color::Yellow),
        Glyph::Tile(TileKind::Maize) => ("·", Color::DarkYellow),
        Glyph::Tile(TileKind::PowerPellet) => ("●", Color::Cyan),
        Glyph::Tile(TileKind::Star) => ("⭐", Color::Yellow),
        Glyph::Tile(TileKind::SuperPellet) => ("◉", Color::DarkRed),
        Glyph::Tile(TileKind::Fruit) => ("🍒", Color::Red),
        Glyph::Tile(TileKind::Empty) => ("", Color::Reset),
    }
}

/// Row-major glyphs for the whole grid. The player draws over ghosts, and
/// the first ghost in a cell draws over later ones.
pub fn frame<R: Rng>(session: &Session<R>, elapsed: f32) -> Vec<Glyph> {
    let map = &session.map;
    let mut glyphs: Vec<Glyph> = map.cells().map(|(_, tile)| Glyph::Tile(tile)).collect();
    let mut put = |cell: Option<Cell>, glyph: Glyph| {
        if let Some(cell) = cell {
            glyphs[cell.y * map.width() + cell.x] = glyph;
        }
    };
    for ghost in session.ghosts.iter().rev() {
        put(map.cell_at(ghost.position), Glyph::Ghost(GhostLook::of(ghost)));
    }
    put(
        map.cell_at(session.player.position),
        Glyph::player(&session.player, elapsed),
    );
    glyphs
}

pub struct Renderer {
    width: usize,
    height: usize,
    last: Vec<Glyph>,
    last_hud: String,
    needs_full: bool,
    origin_x: u16,
    origin_y: u16,
}

impl Renderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            last: vec![Glyph::Tile(TileKind::Empty); width * height],
            last_hud: String::new(),
            needs_full: true,
            origin_x: 0,
            origin_y: 1,
        }
    }

    fn needed(&self) -> (u16, u16) {
        ((self.width * CELL_W) as u16, (self.height + 2) as u16)
    }

    /// Top-left of the grid centered in a terminal of `cols` x `rows`, with
    /// the HUD on the row above. `None` when the grid does not fit.
    fn origin_in(&self, cols: u16, rows: u16) -> Option<(u16, u16)> {
        let (need_w, need_h) = self.needed();
        (cols >= need_w && rows >= need_h).then(|| ((cols - need_w) / 2, (rows - need_h) / 2 + 1))
    }

    pub fn render<R: Rng>(
        &mut self,
        stdout: &mut Stdout,
        session: &Session<R>,
        elapsed: f32,
    ) -> GameResult<()> {
        stdout.queue(MoveTo(0, 0))?;
        let (cols, rows) = terminal::size()?;
        let Some(origin) = self.origin_in(cols, rows) else {
            let (need_w, need_h) = self.needed();
            stdout.queue(Clear(ClearType::All))?;
            stdout.queue(Print(format!(
                "Terminal too small. Need at least {need_w}x{need_h} (cols x rows). Current: {cols}x{rows}."
            )))?;
            stdout.flush()?;
            self.needs_full = true;
            return Ok(());
        };
        if origin != (self.origin_x, self.origin_y) {
            (self.origin_x, self.origin_y) = origin;
            self.needs_full = true;
        }
        if self.needs_full {
            stdout.queue(Clear(ClearType::All))?;
        }

        let hud = hud_line(session);
        if self.needs_full || hud != self.last_hud {
            stdout.queue(MoveTo(self.origin_x, self.origin_y - 1))?;
            stdout.queue(Clear(ClearType::CurrentLine))?;
            self.paint(stdout, &hud, Color::White)?;
            self.last_hud = hud;
        }

        let glyphs = frame(session, elapsed);
        for (idx, glyph) in glyphs.into_iter().enumerate() {
            if !self.needs_full && self.last.get(idx) == Some(&glyph) {
                continue;
            }
            let (x, y) = (idx % self.width, idx / self.width);
            stdout.queue(MoveTo(
                self.origin_x + (x * CELL_W) as u16,
                self.origin_y + y as u16,
            ))?;
            let (text, color) = look(glyph);
            let pad = CELL_W.saturating_sub(UnicodeWidthStr::width(text));
            self.paint(stdout, &format!("{text}{:pad$}", ""), color)?;
            if let Some(slot) = self.last.get_mut(idx) {
                *slot = glyph;
            }
        }
        self.needs_full = false;

        stdout.flush()?;
        Ok(())
    }

    fn paint(&self, stdout: &mut Stdout, text: &str, color: Color) -> GameResult<()> {
        stdout.queue(SetForegroundColor(color))?;
        stdout.queue(Print(text))?;
        stdout.queue(ResetColor)?;
        Ok(())
    }
}

fn hud_line<R: Rng>(session: &Session<R>) -> String {
    let symbol = |idx: usize| SYMBOLS.get(idx).copied().unwrap_or("?");
    format!(
        "Score: {}  High: {}  Lives: {}  [{}|{}]  (q to quit)",
        session.score,
        HIGH_SCORE,
        "● ".repeat(session.lives as usize).trim_end(),
        symbol(session.symbols[0]),
        symbol(session.symbols[1]),
    )
}
