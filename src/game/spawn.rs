//! Randomised countdown between obstacle spawns.

use crate::core::config::GameConfig;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnTimer {
    /// Ticks left until the next spawn.
    pub remaining: u32,
}

impl SpawnTimer {
    /// Start a timer with a freshly drawn interval.
    pub fn new<R: Rng>(rng: &mut R, config: &GameConfig) -> Self {
        Self {
            remaining: draw_interval(rng, config),
        }
    }

    /// Count down one tick. On expiry returns true and schedules the next
    /// spawn right away.
    pub fn tick<R: Rng>(&mut self, rng: &mut R, config: &GameConfig) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining > 0 {
            return false;
        }
        self.remaining = draw_interval(rng, config);
        true
    }
}

/// Uniform draw from the configured inclusive interval, never zero.
fn draw_interval<R: Rng>(rng: &mut R, config: &GameConfig) -> u32 {
    let min = config.min_spawn_ticks.max(1);
    let max = config.max_spawn_ticks.max(min);
    rng.gen_range(min..=max)
}
