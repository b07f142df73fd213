use rand::Rng;
use tracing::debug;

use crate::constants::{STAR_COLUMNS, STAR_INTERVAL, STAR_ROWS, SYMBOL_CHANGE_INTERVAL};
use crate::session::Session;
use crate::tile_map::{Cell, TileKind};

impl<R: Rng> Session<R> {
    pub(crate) fn tick_spawners(&mut self, dt: f32) {
        self.star_timer += dt;
        if self.star_timer >= STAR_INTERVAL {
            self.star_timer = 0.0;
            self.try_spawn_star();
        }

        self.symbol_timer += dt;
        if self.symbol_timer >= SYMBOL_CHANGE_INTERVAL {
            self.symbol_timer = 0.0;
            self.redraw_symbols();
        }
    }

    /// One draw inside the star region; occupied cells are left alone.
    fn try_spawn_star(&mut self) {
        let cell = Cell::new(
            self.rng.gen_range(STAR_COLUMNS),
            self.rng.gen_range(STAR_ROWS),
        );
        if self.map.get(cell) == Some(TileKind::Empty) && self.map.set(cell, TileKind::Star).is_ok() {
            debug!(x = cell.x, y = cell.y, "star spawned");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::constants::{STAR_COLUMNS, STAR_ROWS, SYMBOL_COUNT};
    use crate::session::Session;
    use crate::tile_map::{Cell, MapSource, TileKind, TileMap};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session() -> Session<StdRng> {
        let mut session =
            Session::with_rng(MapSource::Text(String::new()), StdRng::seed_from_u64(21));
        session.map = TileMap::default();
        session
    }

    #[test]
    fn star_appears_in_region_after_interval() {
        let mut session = session();
        session.tick_spawners(9.5);
        assert!(!session.map.any(TileKind::Star));
        session.tick_spawners(0.5);
        let stars: Vec<Cell> = session
            .map
            .cells()
            .filter(|(_, tile)| *tile == TileKind::Star)
            .map(|(cell, _)| cell)
            .collect();
        assert_eq!(stars.len(), 1);
        assert!(STAR_COLUMNS.contains(&stars[0].x));
        assert!(STAR_ROWS.contains(&stars[0].y));
        assert_eq!(session.star_timer, 0.0);
    }

    #[test]
    fn star_never_replaces_an_occupied_cell() {
        let mut session = session();
        for x in STAR_COLUMNS {
            for y in STAR_ROWS {
                session.map.set(Cell::new(x, y), TileKind::Maize).unwrap();
            }
        }
        session.tick_spawners(10.0);
        assert!(!session.map.any(TileKind::Star));
        assert_eq!(session.map.count(TileKind::Maize), 6);
    }

    #[test]
    fn symbols_redraw_every_second() {
        let mut session = session();
        session.symbols = [SYMBOL_COUNT, SYMBOL_COUNT];
        session.tick_spawners(0.5);
        assert_eq!(session.symbols, [SYMBOL_COUNT, SYMBOL_COUNT]);
        session.tick_spawners(0.5);
        assert!(session.symbols.iter().all(|s| *s < SYMBOL_COUNT));
        assert_eq!(session.symbol_timer, 0.0);
    }
}
