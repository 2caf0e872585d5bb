// Simulation rate. Every per-tick constant below is calibrated to it.
pub const TICK_RATE_HZ: u32 = 60;
pub const TICK_MICROS: u64 = 1_000_000 / TICK_RATE_HZ as u64;
/// Frame deltas above this are clamped so a stall doesn't fast-forward the run.
pub const MAX_FRAME_MS: u64 = 100;

// Playfield in game units
pub const SCREEN_WIDTH: f64 = 400.0;
pub const SCREEN_HEIGHT: f64 = 600.0;

// Actor
pub const ACTOR_START_X: f64 = 100.0; // centre
pub const ACTOR_SIZE: f64 = 30.0;
pub const GRAVITY: f64 = 0.8;
pub const JUMP_STRENGTH: f64 = -10.0;

// Obstacles
pub const BASE_SPEED: f64 = 3.0;
pub const OBSTACLE_WIDTH: f64 = 50.0;
pub const GAP_SIZE: f64 = 115.0;
pub const GAP_MARGIN: f64 = 20.0;
pub const MIN_SPAWN_INTERVAL_MS: u64 = 900;
pub const MAX_SPAWN_INTERVAL_MS: u64 = 1800;

// Difficulty
pub const POINTS_PER_LEVEL: u32 = 5;
pub const SPEED_STEP: f64 = 0.5;

// Cosmetic parallax
pub const CITY_SCROLL_SPEED: f64 = 1.0;
pub const STAR_SCROLL_SPEED: f64 = 0.3;
pub const CITY_HEIGHT: f64 = 100.0;
pub const CITY_BUILDINGS: usize = 8;
pub const STAR_FIELD_TOP: f64 = 150.0;
pub const STAR_FIELD_HEIGHT: f64 = 150.0;
pub const STAR_COUNT: usize = 50;

// Render/poll loop
pub const DEFAULT_FRAME_RATE: u32 = 60;
pub const MIN_FRAME_RATE: u32 = 10;
pub const MAX_FRAME_RATE: u32 = 240;

/// Convert a millisecond interval to whole simulation ticks at [`TICK_RATE_HZ`].
pub const fn ms_to_ticks(ms: u64) -> u32 {
    (ms * TICK_RATE_HZ as u64 / 1000) as u32
}
