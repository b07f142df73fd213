use std::ops::RangeInclusive;

/// Side length of one grid cell, in world units.
pub const TILE_SIZE: f32 = 40.0;
pub const MAP_WIDTH: usize = 20;
pub const MAP_HEIGHT: usize = 15;

pub const NORMAL_SPEED: f32 = 2.0;
pub const SUPER_SPEED: f32 = 3.0;
pub const GHOST_SPEED: f32 = 1.5;
pub const NORMAL_RADIUS: f32 = TILE_SIZE / 3.0;
pub const SUPER_RADIUS: f32 = TILE_SIZE / 2.0;
pub const GHOST_RADIUS: f32 = TILE_SIZE / 3.0;

pub const GHOST_COUNT: usize = 4;
/// Ghost `i` starts at tile column `GHOST_HOME_COLUMN + i`.
pub const GHOST_HOME_COLUMN: usize = 10;
pub const GHOST_HOME_ROW: usize = 8;

/// Seconds of power-up granted by each pellet kind.
pub const POWER_PELLET_DURATION: f32 = 10.0;
pub const SUPER_PELLET_DURATION: f32 = 15.0;

pub const MAIZE_POINTS: u32 = 100;
pub const KEY_POINTS: u32 = 500;
pub const POWER_PELLET_POINTS: u32 = 50;
pub const SUPER_PELLET_POINTS: u32 = 100;
pub const FRUIT_POINTS: u32 = 1000;
pub const GHOST_POINTS: u32 = 200;
pub const STAR_MISMATCH_POINTS: u32 = 500;
pub const STAR_MATCH_POINTS: u32 = 2000;
pub const STAR_MAZE_MATCH_POINTS: u32 = 5000;

pub const STARTING_LIVES: u32 = 3;
pub const MAX_LIVES: u32 = 5;
pub const BONUS_LIFE_SCORE: u32 = 10_000;
/// Shown by the HUD only; never reached by the simulation.
pub const HIGH_SCORE: u32 = 30_000;

pub const STAR_INTERVAL: f32 = 10.0;
pub const STAR_COLUMNS: RangeInclusive<usize> = 9..=10;
pub const STAR_ROWS: RangeInclusive<usize> = 6..=8;

pub const SYMBOL_CHANGE_INTERVAL: f32 = 1.0;
pub const SYMBOL_COUNT: usize = 6;

pub const SUPER_PELLET_SEEDS: usize = 2;
/// Door, fruit, door; placed on every full reinitialization.
pub const FRUIT_ENCLOSURE_ROW: usize = 7;
pub const FRUIT_ENCLOSURE_COLUMNS: [usize; 3] = [9, 10, 11];

pub const DEFAULT_MAP_PATH: &str = "assets/maze.txt";
pub const DEFAULT_LOG_PATH: &str = "superpac.log";
pub const DEFAULT_FPS: u64 = 60;
