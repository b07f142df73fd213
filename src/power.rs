use rand::Rng;
use tracing::debug;

use crate::session::Session;

impl<R: Rng> Session<R> {
    /// Counts the power-up down. On expiry the player drops back to normal
    /// and every ghost loses both its vulnerable and flattened flags, no
    /// matter which pellet set them.
    pub(crate) fn decay_power_up(&mut self, dt: f32) {
        if !self.player.powered_up {
            return;
        }
        self.player.power_up_timer -= dt;
        if self.player.power_up_timer <= 0.0 {
            self.player.power_down();
            for ghost in &mut self.ghosts {
                ghost.calm();
            }
            debug!("power-up expired");
        }
    }
}
