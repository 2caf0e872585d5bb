//! Runtime gameplay tuning.
//!
//! A plain copy of the compile-time constants that the session reads from.
//! Tests build sessions with tweaked values (no obstacles, other gravity)
//! without touching the constants themselves.

use super::constants::*;

/// Physics, obstacle and difficulty parameters for one game session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub screen_width: f64,
    pub screen_height: f64,

    pub actor_start_x: f64,
    pub actor_size: f64,
    pub gravity: f64,
    pub jump_strength: f64,

    pub base_speed: f64,
    pub obstacle_width: f64,
    pub gap_size: f64,
    pub gap_margin: f64,
    /// Inclusive spawn interval range, in ticks.
    pub min_spawn_ticks: u32,
    pub max_spawn_ticks: u32,

    pub points_per_level: u32,
    pub speed_step: f64,

    pub city_scroll_speed: f64,
    pub star_scroll_speed: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            actor_start_x: ACTOR_START_X,
            actor_size: ACTOR_SIZE,
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,

            base_speed: BASE_SPEED,
            obstacle_width: OBSTACLE_WIDTH,
            gap_size: GAP_SIZE,
            gap_margin: GAP_MARGIN,
            min_spawn_ticks: ms_to_ticks(MIN_SPAWN_INTERVAL_MS),
            max_spawn_ticks: ms_to_ticks(MAX_SPAWN_INTERVAL_MS),

            points_per_level: POINTS_PER_LEVEL,
            speed_step: SPEED_STEP,

            city_scroll_speed: CITY_SCROLL_SPEED,
            star_scroll_speed: STAR_SCROLL_SPEED,
        }
    }
}

impl GameConfig {
    /// Inclusive range of legal gap centres.
    ///
    /// Keeps both barrier segments at least `gap_margin` tall. Collapses to a
    /// single point when the screen is too short for the configured gap.
    pub fn gap_center_range(&self) -> (f64, f64) {
        let min = self.gap_size + self.gap_margin;
        let max = (self.screen_height - self.gap_size - self.gap_margin).max(min);
        (min, max)
    }

    /// Difficulty tier reached at `score`.
    pub fn level_for_score(&self, score: u32) -> u32 {
        score / self.points_per_level.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = GameConfig::default();
        assert_eq!(config.screen_height, SCREEN_HEIGHT);
        assert_eq!(config.gravity, GRAVITY);
        assert_eq!(config.jump_strength, JUMP_STRENGTH);
        assert_eq!(config.min_spawn_ticks, 54);
        assert_eq!(config.max_spawn_ticks, 108);
    }

    #[test]
    fn test_gap_center_range() {
        let config = GameConfig::default();
        assert_eq!(config.gap_center_range(), (135.0, 465.0));
    }

    #[test]
    fn test_gap_center_range_short_screen() {
        let config = GameConfig {
            screen_height: 200.0,
            ..GameConfig::default()
        };
        let (min, max) = config.gap_center_range();
        assert_eq!(min, max);
    }

    #[test]
    fn test_level_for_score() {
        let config = GameConfig::default();
        assert_eq!(config.level_for_score(0), 0);
        assert_eq!(config.level_for_score(4), 0);
        assert_eq!(config.level_for_score(5), 1);
        assert_eq!(config.level_for_score(14), 2);
    }
}
