//! Paired top/bottom barriers with a gap between them.

use super::collision::Bounds;
use crate::core::config::GameConfig;
use rand::Rng;

/// One obstacle column. The gap is `gap_size` tall and centred on
/// `gap_center_y`; everything above and below it is solid.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge, decreases every tick.
    pub x: f64,
    pub width: f64,
    pub gap_center_y: f64,
    pub gap_size: f64,
    /// Set once the actor has cleared this obstacle. Never reset.
    pub passed: bool,
    screen_height: f64,
}

impl Obstacle {
    pub fn new(x: f64, gap_center_y: f64, config: &GameConfig) -> Self {
        Self {
            x,
            width: config.obstacle_width,
            gap_center_y,
            gap_size: config.gap_size,
            passed: false,
            screen_height: config.screen_height,
        }
    }

    /// Spawn at the right edge with a random gap that leaves both segments
    /// at least `gap_margin` tall.
    pub fn spawn<R: Rng>(rng: &mut R, config: &GameConfig) -> Self {
        let (min, max) = config.gap_center_range();
        let gap_center_y = if max > min {
            rng.gen_range(min..=max)
        } else {
            min
        };
        Self::new(config.screen_width, gap_center_y, config)
    }

    pub fn advance(&mut self, speed: f64) {
        self.x -= speed;
    }

    pub fn right_edge(&self) -> f64 {
        self.x + self.width
    }

    /// Fully scrolled past the left edge of the screen.
    pub fn is_off_screen(&self) -> bool {
        self.right_edge() < 0.0
    }

    pub fn gap_top(&self) -> f64 {
        self.gap_center_y - self.gap_size / 2.0
    }

    pub fn gap_bottom(&self) -> f64 {
        self.gap_center_y + self.gap_size / 2.0
    }

    pub fn top_rect(&self) -> Bounds {
        Bounds::new(self.x, 0.0, self.width, self.gap_top())
    }

    pub fn bottom_rect(&self) -> Bounds {
        let top = self.gap_bottom();
        Bounds::new(self.x, top, self.width, self.screen_height - top)
    }
}

/// Drop every obstacle whose right edge has scrolled past x = 0.
/// Returns how many were removed.
pub fn prune(obstacles: &mut Vec<Obstacle>) -> usize {
    let before = obstacles.len();
    obstacles.retain(|o| !o.is_off_screen());
    before - obstacles.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_spawn_at_right_edge() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let obstacle = Obstacle::spawn(&mut rng, &config);
        assert_eq!(obstacle.x, config.screen_width);
        assert_eq!(obstacle.width, config.obstacle_width);
        assert!(!obstacle.passed);
    }

    #[test]
    fn test_spawned_segments_are_non_degenerate() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..500 {
            let obstacle = Obstacle::spawn(&mut rng, &config);
            assert!(obstacle.top_rect().height >= config.gap_margin);
            assert!(obstacle.bottom_rect().height >= config.gap_margin);
        }
    }

    #[test]
    fn test_segments_leave_exact_gap() {
        let config = GameConfig::default();
        let obstacle = Obstacle::new(200.0, 300.0, &config);
        let top = obstacle.top_rect();
        let bottom = obstacle.bottom_rect();
        assert_eq!(top.top(), 0.0);
        assert_eq!(bottom.bottom(), config.screen_height);
        assert!((bottom.top() - top.bottom() - config.gap_size).abs() < 1e-9);
    }

    #[test]
    fn test_advance_moves_left() {
        let config = GameConfig::default();
        let mut obstacle = Obstacle::new(400.0, 300.0, &config);
        obstacle.advance(3.5);
        assert_eq!(obstacle.x, 396.5);
        assert_eq!(obstacle.top_rect().x, 396.5);
    }

    #[test]
    fn test_prune_after_151_ticks() {
        let config = GameConfig::default();
        let mut obstacles = vec![Obstacle::new(400.0, 300.0, &config)];
        for _ in 0..151 {
            obstacles[0].advance(3.0);
        }
        assert_eq!(obstacles[0].right_edge(), -3.0);
        assert_eq!(prune(&mut obstacles), 1);
        assert!(obstacles.is_empty());
    }

    #[test]
    fn test_prune_keeps_edge_at_zero() {
        let config = GameConfig::default();
        let mut obstacles = vec![
            Obstacle::new(-50.0, 300.0, &config),
            Obstacle::new(-50.5, 300.0, &config),
            Obstacle::new(100.0, 300.0, &config),
        ];
        assert_eq!(prune(&mut obstacles), 1);
        assert_eq!(obstacles.len(), 2);
        assert_eq!(obstacles[0].x, -50.0);
        assert_eq!(obstacles[1].x, 100.0);
    }
}
