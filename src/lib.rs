//! Super Pac-Man style maze game: a frame-stepped simulation core plus a
//! terminal front end.

pub mod config;
pub mod constants;
pub mod encounter;
pub mod entity;
pub mod error;
pub mod input;
pub mod movement;
mod power;
pub mod render;
pub mod scoring;
pub mod session;
mod spawners;
pub mod tile_map;

pub use entity::{Direction, Ghost, Player};
pub use error::{GameError, GameResult};
pub use session::Session;
pub use tile_map::{Cell, MapSource, TileKind, TileMap};
