use rand::Rng;
use tracing::debug;

use crate::constants::GHOST_POINTS;
use crate::entity::{Ghost, Player};
use crate::session::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encounter {
    /// The player eats the ghost.
    EatGhost,
    /// The ghost costs the player a life.
    HarmPlayer,
    Ignore,
}

impl Encounter {
    /// Eating takes precedence: a vulnerable ghost is eaten by a powered
    /// player even when it is also flattened.
    pub fn classify(powered_up: bool, vulnerable: bool, flattened: bool) -> Self {
        if powered_up && vulnerable {
            Encounter::EatGhost
        } else if !powered_up && !flattened {
            Encounter::HarmPlayer
        } else {
            Encounter::Ignore
        }
    }
}

/// Circle overlap; touching counts.
pub fn overlaps(player: &Player, ghost: &Ghost) -> bool {
    player.position.distance(ghost.position) <= player.radius + ghost.radius
}

impl<R: Rng> Session<R> {
    pub(crate) fn resolve_encounter(&mut self, idx: usize) {
        let Some(ghost) = self.ghosts.get_mut(idx) else {
            return;
        };
        if !overlaps(&self.player, ghost) {
            return;
        }
        match Encounter::classify(self.player.powered_up, ghost.vulnerable, ghost.flattened) {
            Encounter::EatGhost => {
                ghost.return_home();
                self.score += GHOST_POINTS;
                debug!(variant = ghost.variant, score = self.score, "ghost eaten");
            }
            Encounter::HarmPlayer => self.lose_life(),
            Encounter::Ignore => {}
        }
    }
}
