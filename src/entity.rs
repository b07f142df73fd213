use glam::Vec2;
use rand::Rng;

use crate::constants::{
    GHOST_HOME_COLUMN, GHOST_HOME_ROW, GHOST_RADIUS, GHOST_SPEED, NORMAL_RADIUS, NORMAL_SPEED,
    SUPER_RADIUS, SUPER_SPEED, TILE_SIZE,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn vector(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// -1 or +1 along the horizontal axis.
pub fn random_horizontal(rng: &mut impl Rng) -> Vec2 {
    Vec2::new(random_sign(rng), 0.0)
}

pub(crate) fn random_sign(rng: &mut impl Rng) -> f32 {
    if rng.gen_bool(0.5) {
        1.0
    } else {
        -1.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub position: Vec2,
    pub direction: Vec2,
    pub speed: f32,
    pub radius: f32,
    pub start_position: Vec2,
    pub powered_up: bool,
    /// Seconds of power-up left; meaningful only while `powered_up`.
    pub power_up_timer: f32,
}

impl Player {
    pub fn spawn() -> Self {
        let start = Vec2::splat(TILE_SIZE * 1.5);
        Self {
            position: start,
            direction: Direction::Right.vector(),
            speed: NORMAL_SPEED,
            radius: NORMAL_RADIUS,
            start_position: start,
            powered_up: false,
            power_up_timer: 0.0,
        }
    }

    pub fn power_up(&mut self, duration: f32) {
        self.powered_up = true;
        self.power_up_timer = duration;
    }

    pub fn super_power_up(&mut self, duration: f32) {
        self.power_up(duration);
        self.speed = SUPER_SPEED;
        self.radius = SUPER_RADIUS;
    }

    pub fn power_down(&mut self) {
        self.powered_up = false;
        self.power_up_timer = 0.0;
        self.speed = NORMAL_SPEED;
        self.radius = NORMAL_RADIUS;
    }

    /// Back to the start tile facing right, unpowered.
    pub fn respawn(&mut self) {
        self.position = self.start_position;
        self.direction = Direction::Right.vector();
        self.power_down();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ghost {
    pub position: Vec2,
    pub direction: Vec2,
    pub speed: f32,
    pub radius: f32,
    pub start_position: Vec2,
    /// Edible while the player is powered up.
    pub vulnerable: bool,
    /// Harmless to the player, but not edible.
    pub flattened: bool,
    /// Which look the renderer uses; no effect on the simulation.
    pub variant: usize,
}

impl Ghost {
    pub fn spawn(variant: usize, rng: &mut impl Rng) -> Self {
        let start = Vec2::new(
            TILE_SIZE * (GHOST_HOME_COLUMN + variant) as f32,
            TILE_SIZE * GHOST_HOME_ROW as f32,
        );
        Self {
            position: start,
            direction: random_horizontal(rng),
            speed: GHOST_SPEED,
            radius: GHOST_RADIUS,
            start_position: start,
            vulnerable: false,
            flattened: false,
            variant,
        }
    }

    pub fn calm(&mut self) {
        self.vulnerable = false;
        self.flattened = false;
    }

    /// Sent home after being eaten; keeps its facing.
    pub fn return_home(&mut self) {
        self.position = self.start_position;
        self.calm();
    }

    pub fn respawn(&mut self, rng: &mut impl Rng) {
        self.position = self.start_position;
        self.direction = random_horizontal(rng);
        self.calm();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn super_power_up_grows_and_speeds_player() {
        let mut player = Player::spawn();
        player.super_power_up(15.0);
        assert!(player.powered_up);
        assert_eq!(player.speed, SUPER_SPEED);
        assert_eq!(player.radius, SUPER_RADIUS);

        player.power_down();
        assert!(!player.powered_up);
        assert_eq!(player.speed, NORMAL_SPEED);
        assert_eq!(player.radius, NORMAL_RADIUS);
    }

    #[test]
    fn respawned_player_faces_right_at_start() {
        let mut player = Player::spawn();
        player.position = Vec2::new(300.0, 200.0);
        player.direction = Direction::Up.vector();
        player.super_power_up(15.0);
        player.respawn();
        assert_eq!(player, Player::spawn());
    }

    #[test]
    fn ghosts_spawn_in_a_row_facing_horizontally() {
        let mut rng = StdRng::seed_from_u64(3);
        for variant in 0..4 {
            let ghost = Ghost::spawn(variant, &mut rng);
            assert_eq!(
                ghost.position,
                Vec2::new(TILE_SIZE * (10 + variant) as f32, TILE_SIZE * 8.0)
            );
            assert_eq!(ghost.direction.y, 0.0);
            assert_eq!(ghost.direction.x.abs(), 1.0);
        }
    }

    #[test]
    fn eaten_ghost_keeps_direction() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut ghost = Ghost::spawn(0, &mut rng);
        ghost.position = Vec2::new(100.0, 100.0);
        ghost.direction = Direction::Down.vector();
        ghost.vulnerable = true;
        ghost.flattened = true;
        ghost.return_home();
        assert_eq!(ghost.position, ghost.start_position);
        assert_eq!(ghost.direction, Direction::Down.vector());
        assert!(!ghost.vulnerable && !ghost.flattened);
    }
}
