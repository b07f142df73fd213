//! Per-frame movement against the tile map.
//!
//! Speeds are distance per frame; a frame moves an entity by exactly
//! `direction * speed` or not at all.

use glam::Vec2;
use rand::Rng;
use tracing::trace;

use crate::entity::{random_sign, Ghost, Player};
use crate::tile_map::{Cell, TileKind, TileMap};

/// Something the resolver can move.
pub trait Mover {
    fn position(&self) -> Vec2;
    fn velocity(&self) -> Vec2;
    fn commit(&mut self, position: Vec2);
    fn can_enter(&self, tile: TileKind) -> bool;
}

impl Mover for Player {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn velocity(&self) -> Vec2 {
        self.direction * self.speed
    }

    fn commit(&mut self, position: Vec2) {
        self.position = position;
    }

    fn can_enter(&self, tile: TileKind) -> bool {
        match tile {
            TileKind::Wall => false,
            TileKind::Door => self.powered_up,
            _ => true,
        }
    }
}

impl Mover for Ghost {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn velocity(&self) -> Vec2 {
        self.direction * self.speed
    }

    fn commit(&mut self, position: Vec2) {
        self.position = position;
    }

    fn can_enter(&self, tile: TileKind) -> bool {
        !matches!(tile, TileKind::Wall | TileKind::Door)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was committed; `tile` is what the target cell held.
    Moved { cell: Cell, tile: TileKind },
    Blocked,
}

pub fn advance<M: Mover>(mover: &mut M, map: &TileMap) -> MoveOutcome {
    let candidate = mover.position() + mover.velocity();
    let Some(cell) = map.cell_at(candidate) else {
        return MoveOutcome::Blocked;
    };
    match map.get(cell) {
        Some(tile) if mover.can_enter(tile) => {
            mover.commit(candidate);
            MoveOutcome::Moved { cell, tile }
        }
        _ => MoveOutcome::Blocked,
    }
}

/// Moves a ghost, re-rolling its direction when the move is rejected.
pub fn advance_ghost(ghost: &mut Ghost, map: &TileMap, rng: &mut impl Rng) -> MoveOutcome {
    let outcome = advance(ghost, map);
    if outcome == MoveOutcome::Blocked {
        ghost.direction = random_axis_direction(rng);
        trace!(variant = ghost.variant, direction = ?ghost.direction, "ghost turned");
    }
    outcome
}

/// Picks an axis uniformly, then a sign uniformly.
pub fn random_axis_direction(rng: &mut impl Rng) -> Vec2 {
    let sign = random_sign(rng);
    if rng.gen_bool(0.5) {
        Vec2::new(sign, 0.0)
    } else {
        Vec2::new(0.0, sign)
    }
}
