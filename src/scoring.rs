//! Item pickups and the points they award.

use rand::Rng;
use tracing::{debug, warn};

use crate::constants::{
    FRUIT_POINTS, KEY_POINTS, MAIZE_POINTS, POWER_PELLET_DURATION, POWER_PELLET_POINTS,
    STAR_MATCH_POINTS, STAR_MAZE_MATCH_POINTS, STAR_MISMATCH_POINTS, SUPER_PELLET_DURATION,
    SUPER_PELLET_POINTS,
};
use crate::session::Session;
use crate::tile_map::{Cell, TileKind, TileMap};

/// Fixed points for a pickup. Stars are scored by [`star_bonus`] instead.
pub fn points_for(tile: TileKind) -> u32 {
    match tile {
        TileKind::Maize => MAIZE_POINTS,
        TileKind::Key => KEY_POINTS,
        TileKind::PowerPellet => POWER_PELLET_POINTS,
        TileKind::SuperPellet => SUPER_PELLET_POINTS,
        TileKind::Fruit => FRUIT_POINTS,
        TileKind::Empty | TileKind::Wall | TileKind::Door | TileKind::Star => 0,
    }
}

/// Points for collecting a star, given the center-box symbols and the map
/// as it is after the star was cleared.
///
/// Matching symbols are looked up in the maze by reading the symbol index
/// as a tile kind; see [`symbol_in_maze`].
pub fn star_bonus(symbols: [usize; 2], map: &TileMap) -> u32 {
    if symbols[0] != symbols[1] {
        STAR_MISMATCH_POINTS
    } else if symbol_in_maze(symbols[0], map) {
        STAR_MAZE_MATCH_POINTS
    } else {
        STAR_MATCH_POINTS
    }
}

pub fn symbol_in_maze(symbol: usize, map: &TileMap) -> bool {
    TileKind::from_symbol(symbol).is_some_and(|kind| map.any(kind))
}

impl<R: Rng> Session<R> {
    /// Applies the pickup for a cell the player just entered.
    pub(crate) fn collect(&mut self, cell: Cell, tile: TileKind) {
        if !tile.is_consumable() {
            return;
        }
        if let Err(err) = self.map.set(cell, TileKind::Empty) {
            warn!(%err, "pickup outside the map");
            return;
        }

        match tile {
            TileKind::PowerPellet => {
                self.player.power_up(POWER_PELLET_DURATION);
                for ghost in &mut self.ghosts {
                    ghost.vulnerable = true;
                }
            }
            TileKind::SuperPellet => {
                self.player.super_power_up(SUPER_PELLET_DURATION);
                for ghost in &mut self.ghosts {
                    ghost.flattened = true;
                }
            }
            TileKind::Door => debug!(x = cell.x, y = cell.y, "door opened"),
            _ => {}
        }

        let points = match tile {
            TileKind::Star => star_bonus(self.symbols, &self.map),
            other => points_for(other),
        };
        self.score += points;
        debug!(?tile, points, score = self.score, "collected");
    }
}
