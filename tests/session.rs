use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use superpac::constants::{GHOST_COUNT, STARTING_LIVES, SYMBOL_COUNT, TILE_SIZE};
use superpac::{Cell, Direction, MapSource, Player, Session, TileKind};

const FRAME: f32 = 1.0 / 60.0;

fn arena_description() -> String {
    let mut rows = vec!["#".repeat(20)];
    for _ in 0..13 {
        rows.push(format!("#{}#", ".".repeat(18)));
    }
    rows.push("#".repeat(20));
    rows.join("\n")
}

/// A walled arena without the random super pellets or the fruit enclosure.
fn arena(seed: u64) -> Session<StdRng> {
    let mut session = Session::with_rng(
        MapSource::Text(arena_description()),
        StdRng::seed_from_u64(seed),
    );
    session.map = session.source().load();
    session
}

/// Puts the player two units short of cell (2, 1), heading into it.
fn approach_cell_two_one(session: &mut Session<StdRng>, tile: TileKind) {
    session.map.set(Cell::new(2, 1), tile).unwrap();
    session.player.position = Vec2::new(2.0 * TILE_SIZE - 2.0, 1.5 * TILE_SIZE);
    session.player.direction = Direction::Right.vector();
}

#[test]
fn stepping_onto_maize_scores_and_clears_it() {
    let mut session = arena(1);
    session.ghosts.clear();
    approach_cell_two_one(&mut session, TileKind::Maize);

    session.step(None, FRAME);

    assert_eq!(session.score, 100);
    assert_eq!(session.map.get(Cell::new(2, 1)), Some(TileKind::Empty));
    assert_eq!(session.player.position, Vec2::new(2.0 * TILE_SIZE, 1.5 * TILE_SIZE));
}

#[test]
fn input_turns_the_player_before_moving() {
    let mut session = arena(1);
    session.ghosts.clear();
    session.player.position = Vec2::new(100.0, 100.0);

    session.step(Some(Direction::Down), FRAME);

    assert_eq!(session.player.direction, Direction::Down.vector());
    assert_eq!(session.player.position, Vec2::new(100.0, 102.0));
}

#[test]
fn walls_and_locked_doors_stop_the_player() {
    for tile in [TileKind::Wall, TileKind::Door] {
        let mut session = arena(2);
        session.ghosts.clear();
        approach_cell_two_one(&mut session, tile);
        let before = session.player.position;

        session.step(None, FRAME);

        assert_eq!(session.player.position, before, "{tile:?}");
        assert_eq!(session.map.get(Cell::new(2, 1)), Some(tile));
        assert_eq!(session.score, 0);
    }
}

#[test]
fn powered_player_opens_doors_for_good() {
    let mut session = arena(3);
    session.ghosts.clear();
    approach_cell_two_one(&mut session, TileKind::Door);
    session.player.power_up(10.0);

    session.step(None, FRAME);

    assert_eq!(session.map.get(Cell::new(2, 1)), Some(TileKind::Empty));
    assert_eq!(session.score, 0);
}

#[test]
fn fixed_value_pickups() {
    for (tile, points) in [
        (TileKind::Key, 500),
        (TileKind::Fruit, 1000),
        (TileKind::PowerPellet, 50),
        (TileKind::SuperPellet, 100),
    ] {
        let mut session = arena(4);
        session.ghosts.clear();
        approach_cell_two_one(&mut session, tile);
        session.step(None, FRAME);
        assert_eq!(session.score, points, "{tile:?}");
        assert_eq!(session.map.get(Cell::new(2, 1)), Some(TileKind::Empty));
    }
}

#[test]
fn pellet_kinds_set_independent_ghost_flags() {
    let mut session = arena(5);
    session.ghosts[0].flattened = true;
    approach_cell_two_one(&mut session, TileKind::PowerPellet);

    session.step(None, FRAME);

    assert!(session.player.powered_up);
    assert!(session.ghosts.iter().all(|g| g.vulnerable));
    assert!(session.ghosts[0].flattened);
    assert!(session.ghosts[1..].iter().all(|g| !g.flattened));

    approach_cell_two_one(&mut session, TileKind::SuperPellet);
    session.step(None, FRAME);

    assert!(session.ghosts.iter().all(|g| g.vulnerable && g.flattened));
    assert!((session.player.power_up_timer - (15.0 - FRAME)).abs() < 1e-4);
    assert_eq!(session.player.radius, TILE_SIZE / 2.0);
}

#[test]
fn power_up_expiry_calms_every_ghost_in_one_step() {
    let mut session = arena(6);
    session.player.power_up(0.01);
    session.ghosts[0].vulnerable = true;
    session.ghosts[1].flattened = true;
    session.ghosts[2].vulnerable = true;
    session.ghosts[2].flattened = true;

    session.step(None, FRAME);

    assert!(!session.player.powered_up);
    assert!(session.ghosts.iter().all(|g| !g.vulnerable && !g.flattened));
}

fn ghost_on_player(session: &mut Session<StdRng>) {
    session.ghosts.truncate(1);
    session.player.position = Vec2::new(300.0, 300.0);
    session.player.direction = Direction::Right.vector();
    let ghost = &mut session.ghosts[0];
    ghost.position = Vec2::new(302.0, 300.0);
    ghost.direction = Direction::Right.vector();
}

#[test]
fn powered_player_eats_a_vulnerable_flattened_ghost() {
    let mut session = arena(7);
    ghost_on_player(&mut session);
    session.player.power_up(10.0);
    session.ghosts[0].vulnerable = true;
    session.ghosts[0].flattened = true;

    session.step(None, FRAME);

    let ghost = &session.ghosts[0];
    assert_eq!(session.score, 200);
    assert_eq!(ghost.position, ghost.start_position);
    assert!(!ghost.vulnerable && !ghost.flattened);
    assert_eq!(ghost.direction, Direction::Right.vector());
    assert_eq!(session.lives, STARTING_LIVES);
}

#[test]
fn flattened_ghost_is_harmless_and_inedible() {
    let mut session = arena(8);
    ghost_on_player(&mut session);
    session.ghosts[0].flattened = true;

    session.step(None, FRAME);
    assert_eq!(session.lives, STARTING_LIVES);
    assert_eq!(session.score, 0);

    session.player.power_up(10.0);
    session.step(None, FRAME);
    assert_eq!(session.lives, STARTING_LIVES);
    assert_eq!(session.score, 0);
    assert_ne!(session.ghosts[0].position, session.ghosts[0].start_position);
}

#[test]
fn losing_a_spare_life_soft_resets() {
    let mut session = arena(9);
    ghost_on_player(&mut session);
    session.score = 1_500;
    let map_before = session.map.clone();

    session.step(None, FRAME);

    assert_eq!(session.lives, STARTING_LIVES - 1);
    assert_eq!(session.score, 1_500);
    assert_eq!(session.player, Player::spawn());
    assert_eq!(session.ghosts[0].position, session.ghosts[0].start_position);
    assert_eq!(session.map, map_before);
}

#[test]
fn losing_the_last_life_restarts_the_session() {
    let mut session = arena(10);
    ghost_on_player(&mut session);
    session.lives = 1;
    session.score = 700;
    // A wall dug out of the description and a star dropped by play; the
    // reload must undo both.
    session.map.set(Cell::new(0, 0), TileKind::Empty).unwrap();
    session.map.set(Cell::new(4, 4), TileKind::Star).unwrap();

    session.step(None, FRAME);

    assert_eq!(session.map.get(Cell::new(0, 0)), Some(TileKind::Wall));
    assert_ne!(session.map.get(Cell::new(4, 4)), Some(TileKind::Star));
    assert!(!session.map.any(TileKind::Star));
    assert_eq!(session.lives, STARTING_LIVES);
    assert_eq!(session.score, 0);
    assert_eq!(session.player, Player::spawn());
    assert_eq!(session.ghosts.len(), GHOST_COUNT);
    assert_eq!(session.map.count(TileKind::SuperPellet), 2);
    assert_eq!(session.map.get(Cell::new(9, 7)), Some(TileKind::Door));
    assert_eq!(session.map.get(Cell::new(10, 7)), Some(TileKind::Fruit));
    assert_eq!(session.map.get(Cell::new(11, 7)), Some(TileKind::Door));
    assert!(session.symbols.iter().all(|s| *s < SYMBOL_COUNT));
}

#[test]
fn later_ghosts_see_the_reset_made_by_earlier_ones() {
    let mut session = arena(11);
    session.ghosts.truncate(2);
    session.player.position = Vec2::new(300.0, 300.0);
    for ghost in &mut session.ghosts {
        ghost.position = Vec2::new(302.0, 300.0);
        ghost.direction = Direction::Right.vector();
    }
    session.lives = 2;

    session.step(None, FRAME);

    // The first ghost's hit sends everyone home, so the second misses.
    assert_eq!(session.lives, 1);
}

#[test]
fn star_pays_most_when_matching_symbol_is_in_the_maze() {
    let mut session = arena(12);
    session.ghosts.clear();
    session.symbols = [1, 1];
    approach_cell_two_one(&mut session, TileKind::Star);

    session.step(None, FRAME);

    assert_eq!(session.score, 5000);
    assert_eq!(session.map.get(Cell::new(2, 1)), Some(TileKind::Empty));
}

#[test]
fn star_pays_less_when_matching_symbol_is_absent() {
    let mut session = arena(13);
    session.ghosts.clear();
    session.symbols = [3, 3];
    approach_cell_two_one(&mut session, TileKind::Star);

    session.step(None, FRAME);

    assert_eq!(session.score, 2000);
}

#[test]
fn star_pays_least_when_symbols_differ() {
    let mut session = arena(14);
    session.ghosts.clear();
    session.symbols = [0, 3];
    approach_cell_two_one(&mut session, TileKind::Star);

    session.step(None, FRAME);

    assert_eq!(session.score, 500);
}

#[test]
fn unreadable_map_file_still_yields_a_playable_session() {
    let mut session = Session::with_rng(
        MapSource::File("no/such/maze.txt".into()),
        StdRng::seed_from_u64(15),
    );
    assert!(!session.map.any(TileKind::Wall));
    assert_eq!(session.map.count(TileKind::SuperPellet), 2);
    session.step(Some(Direction::Up), FRAME);
    assert_eq!(session.lives, STARTING_LIVES);
}

#[test]
fn shipped_maze_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/maze.txt");
    let session = Session::with_rng(MapSource::File(path.into()), StdRng::seed_from_u64(16));
    assert!(session.map.any(TileKind::Wall));
    assert!(session.map.any(TileKind::Maize));
    assert_eq!(session.map.get(Cell::new(1, 1)), Some(TileKind::Maize));
    assert_eq!(session.map.get(Cell::new(10, 7)), Some(TileKind::Fruit));
}
