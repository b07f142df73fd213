//! The session aggregate and the per-frame update order.

use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::constants::{
    BONUS_LIFE_SCORE, FRUIT_ENCLOSURE_COLUMNS, FRUIT_ENCLOSURE_ROW, GHOST_COUNT, MAX_LIVES,
    STARTING_LIVES, SUPER_PELLET_SEEDS, SYMBOL_COUNT,
};
use crate::entity::{Direction, Ghost, Player};
use crate::movement::{self, MoveOutcome};
use crate::tile_map::{Cell, MapSource, TileKind, TileMap};

/// Everything one round of play owns. A full reinitialization rebuilds all
/// of it from the map source.
pub struct Session<R = ThreadRng> {
    pub map: TileMap,
    pub player: Player,
    pub ghosts: Vec<Ghost>,
    pub score: u32,
    pub lives: u32,
    /// The two center-box symbols, each in `0..SYMBOL_COUNT`.
    pub symbols: [usize; 2],
    pub star_timer: f32,
    pub symbol_timer: f32,
    source: MapSource,
    pub(crate) rng: R,
}

impl Session<ThreadRng> {
    pub fn new(source: MapSource) -> Self {
        Self::with_rng(source, rand::thread_rng())
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(source: MapSource, rng: R) -> Self {
        let mut session = Self {
            map: TileMap::default(),
            player: Player::spawn(),
            ghosts: Vec::new(),
            score: 0,
            lives: STARTING_LIVES,
            symbols: [0, 0],
            star_timer: 0.0,
            symbol_timer: 0.0,
            source,
            rng,
        };
        session.reinitialize();
        session
    }

    pub fn source(&self) -> &MapSource {
        &self.source
    }

    /// Simulates one frame. `input` replaces the player's facing when present;
    /// `dt` is the elapsed time in seconds, used only by timers.
    pub fn step(&mut self, input: Option<Direction>, dt: f32) {
        if let Some(dir) = input {
            self.player.direction = dir.vector();
        }
        if let MoveOutcome::Moved { cell, tile } = movement::advance(&mut self.player, &self.map) {
            self.collect(cell, tile);
        }
        self.decay_power_up(dt);
        self.update_ghosts();
        self.tick_spawners(dt);
        self.grant_bonus_life();
    }

    /// Moves each ghost and resolves its encounter before moving the next.
    /// A reinitialization triggered by one ghost is what later ghosts see.
    fn update_ghosts(&mut self) {
        for idx in 0..self.ghosts.len() {
            let Some(ghost) = self.ghosts.get_mut(idx) else {
                break;
            };
            movement::advance_ghost(ghost, &self.map, &mut self.rng);
            self.resolve_encounter(idx);
        }
    }

    pub(crate) fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        if self.lives > 0 {
            info!(lives = self.lives, "life lost");
            self.soft_reset();
        } else {
            info!(score = self.score, "last life lost, restarting");
            self.reinitialize();
        }
    }

    /// Puts every entity back at its start; score and lives are kept.
    pub fn soft_reset(&mut self) {
        self.player.respawn();
        for ghost in &mut self.ghosts {
            ghost.respawn(&mut self.rng);
        }
    }

    /// Rebuilds the round from scratch: map, entities, score, lives, timers
    /// and symbols.
    pub fn reinitialize(&mut self) {
        self.map = self.source.load();
        self.player = Player::spawn();
        self.ghosts = (0..GHOST_COUNT)
            .map(|variant| Ghost::spawn(variant, &mut self.rng))
            .collect();
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.redraw_symbols();
        self.star_timer = 0.0;
        self.symbol_timer = 0.0;
        self.place_fruit_enclosure();
        self.seed_super_pellets();
        debug!(symbols = ?self.symbols, "session initialized");
    }

    pub(crate) fn redraw_symbols(&mut self) {
        self.symbols = [
            self.rng.gen_range(0..SYMBOL_COUNT),
            self.rng.gen_range(0..SYMBOL_COUNT),
        ];
    }

    fn place_fruit_enclosure(&mut self) {
        let kinds = [TileKind::Door, TileKind::Fruit, TileKind::Door];
        for (x, kind) in FRUIT_ENCLOSURE_COLUMNS.into_iter().zip(kinds) {
            if let Err(err) = self.map.set(Cell::new(x, FRUIT_ENCLOSURE_ROW), kind) {
                warn!(%err, "fruit enclosure does not fit the map");
            }
        }
    }

    /// Rejection-samples interior cells until enough `Empty` ones turn into
    /// super pellets. Stops early if the interior has too few `Empty` cells.
    fn seed_super_pellets(&mut self) {
        let (width, height) = (self.map.width(), self.map.height());
        if width < 3 || height < 3 {
            return;
        }
        let available = self
            .map
            .cells()
            .filter(|(cell, tile)| {
                *tile == TileKind::Empty
                    && (1..width - 1).contains(&cell.x)
                    && (1..height - 1).contains(&cell.y)
            })
            .count();
        let wanted = SUPER_PELLET_SEEDS.min(available);
        if wanted < SUPER_PELLET_SEEDS {
            warn!(available, "not enough empty cells for super pellets");
        }

        let mut placed = 0;
        while placed < wanted {
            let cell = Cell::new(
                self.rng.gen_range(1..=width - 2),
                self.rng.gen_range(1..=height - 2),
            );
            if self.map.get(cell) == Some(TileKind::Empty)
                && self.map.set(cell, TileKind::SuperPellet).is_ok()
            {
                placed += 1;
            }
        }
    }

    fn grant_bonus_life(&mut self) {
        if self.score >= BONUS_LIFE_SCORE && self.lives < MAX_LIVES {
            self.lives += 1;
            self.score -= BONUS_LIFE_SCORE;
            info!(lives = self.lives, "bonus life");
        }
    }
}
