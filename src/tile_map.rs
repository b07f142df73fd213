//! The maze grid: what occupies each cell and how it is loaded.

use std::fs;
use std::path::{Path, PathBuf};

use glam::Vec2;
use tracing::{debug, warn};

use crate::constants::{MAP_HEIGHT, MAP_WIDTH, TILE_SIZE};
use crate::error::{GameError, GameResult};

/// What a single grid cell holds.
///
/// The discriminant order is observable: the star bonus reads a center-box
/// symbol index as a `TileKind` (see [`TileKind::from_symbol`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TileKind {
    #[default]
    Empty,
    Wall,
    Door,
    Key,
    Maize,
    PowerPellet,
    Star,
    SuperPellet,
    Fruit,
}

impl TileKind {
    pub fn from_char(c: char) -> Self {
        match c {
            '#' => TileKind::Wall,
            'K' => TileKind::Key,
            'M' => TileKind::Maize,
            'P' => TileKind::PowerPellet,
            'S' => TileKind::Star,
            'U' => TileKind::SuperPellet,
            'F' => TileKind::Fruit,
            'D' => TileKind::Door,
            _ => TileKind::Empty,
        }
    }

    /// Reinterprets a symbol-alphabet index as a tile kind by enumerant order.
    pub fn from_symbol(index: usize) -> Option<Self> {
        const ORDER: [TileKind; 9] = [
            TileKind::Empty,
            TileKind::Wall,
            TileKind::Door,
            TileKind::Key,
            TileKind::Maize,
            TileKind::PowerPellet,
            TileKind::Star,
            TileKind::SuperPellet,
            TileKind::Fruit,
        ];
        ORDER.get(index).copied()
    }

    /// Cells the player clears on entry. Doors count: they are only
    /// enterable while powered up, and entering one opens it for good.
    pub fn is_consumable(self) -> bool {
        !matches!(self, TileKind::Empty | TileKind::Wall)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileMap {
    width: usize,
    height: usize,
    tiles: Vec<TileKind>,
}

impl Default for TileMap {
    fn default() -> Self {
        Self::new(MAP_WIDTH, MAP_HEIGHT)
    }
}

impl TileMap {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![TileKind::Empty; width * height],
        }
    }

    /// Parses a description into a grid of the default size.
    pub fn parse(description: &str) -> Self {
        Self::parse_sized(description, MAP_WIDTH, MAP_HEIGHT)
    }

    /// Rows and columns past the grid are dropped; cells the description
    /// does not reach stay `Empty`.
    pub fn parse_sized(description: &str, width: usize, height: usize) -> Self {
        let mut map = Self::new(width, height);
        for (y, line) in description.lines().take(height).enumerate() {
            for (x, c) in line.chars().take(width).enumerate() {
                map.tiles[y * width + x] = TileKind::from_char(c);
            }
        }
        map
    }

    pub fn load(path: &Path) -> GameResult<Self> {
        let description = fs::read_to_string(path).map_err(|source| GameError::MapLoad {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&description))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// The in-bounds cell containing a world-space point, if any.
    /// Floors rather than truncating toward zero, so points just left of or
    /// above the grid are out of bounds instead of landing in row/column 0.
    pub fn cell_at(&self, point: Vec2) -> Option<Cell> {
        let cx = (point.x / TILE_SIZE).floor();
        let cy = (point.y / TILE_SIZE).floor();
        if cx < 0.0 || cy < 0.0 {
            return None;
        }
        let cell = Cell::new(cx as usize, cy as usize);
        self.contains(cell).then_some(cell)
    }

    pub fn get(&self, cell: Cell) -> Option<TileKind> {
        if !self.contains(cell) {
            return None;
        }
        Some(self.tiles[cell.y * self.width + cell.x])
    }

    pub fn set(&mut self, cell: Cell, kind: TileKind) -> GameResult<()> {
        if !self.contains(cell) {
            return Err(GameError::OutOfBounds {
                x: cell.x,
                y: cell.y,
                width: self.width,
                height: self.height,
            });
        }
        self.tiles[cell.y * self.width + cell.x] = kind;
        Ok(())
    }

    pub fn any(&self, kind: TileKind) -> bool {
        self.tiles.iter().any(|tile| *tile == kind)
    }

    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|tile| **tile == kind).count()
    }

    /// Row-major walk over every cell.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, TileKind)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(idx, tile)| (Cell::new(idx % self.width, idx / self.width), *tile))
    }
}

/// Where a session reads its maze from on every full reinitialization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapSource {
    File(PathBuf),
    Text(String),
}

impl MapSource {
    /// Never fails: an unreadable file yields an all-`Empty` grid.
    pub fn load(&self) -> TileMap {
        match self {
            MapSource::Text(description) => TileMap::parse(description),
            MapSource::File(path) => match TileMap::load(path) {
                Ok(map) => {
                    debug!(path = %path.display(), "loaded map description");
                    map
                }
                Err(err) => {
                    warn!(%err, "falling back to an empty map");
                    TileMap::default()
                }
            },
        }
    }
}
