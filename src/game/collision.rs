//! Axis-aligned overlap tests between the actor, obstacles and the
//! playfield bounds.

use super::actor::Actor;
use super::obstacle::Obstacle;

/// Axis-aligned box in game units. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Strict overlap: boxes that only share an edge do not intersect, and
    /// an empty box intersects nothing.
    pub fn intersects(&self, other: &Bounds) -> bool {
        if self.width <= 0.0 || self.height <= 0.0 || other.width <= 0.0 || other.height <= 0.0 {
            return false;
        }
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }
}

/// True if the actor touches either segment of any obstacle, or has left the
/// playfield through the ceiling or the floor.
pub fn is_colliding(actor: &Actor, obstacles: &[Obstacle], screen_height: f64) -> bool {
    let bounds = actor.bounds();

    if bounds.top() <= 0.0 || bounds.bottom() >= screen_height {
        return true;
    }

    obstacles.iter().any(|obstacle| {
        bounds.intersects(&obstacle.top_rect()) || bounds.intersects(&obstacle.bottom_rect())
    })
}
