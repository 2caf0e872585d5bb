//! The player-controlled UFO.

use super::collision::Bounds;
use crate::core::config::GameConfig;

/// Vertical physics body with a fixed horizontal position.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    /// Left edge (never changes during a session).
    pub x: f64,
    /// Top edge. Grows downward.
    pub y: f64,
    /// Units per tick, positive is downward.
    pub velocity: f64,
    /// Side length of the square bounding box.
    pub size: f64,
    gravity: f64,
    jump_strength: f64,
}

impl Actor {
    /// Spawn at the configured start column, vertically centred.
    pub fn new(config: &GameConfig) -> Self {
        let half = config.actor_size / 2.0;
        Self {
            x: config.actor_start_x - half,
            y: config.screen_height / 2.0 - half,
            velocity: 0.0,
            size: config.actor_size,
            gravity: config.gravity,
            jump_strength: config.jump_strength,
        }
    }

    /// One step of gravity. No clamping: leaving the screen is the
    /// collision checker's business.
    pub fn tick(&mut self) {
        self.velocity += self.gravity;
        self.y += self.velocity;
    }

    /// Replace the current velocity with the jump impulse.
    pub fn flap(&mut self) {
        self.velocity = self.jump_strength;
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.size, self.size)
    }
}
