//! One run of the game, from the first tick until the actor crashes.
//!
//! `GameSession::tick` advances the simulation by exactly one fixed step.
//! The order of work inside a tick is part of the game's behavior:
//!
//! 1. apply a pending flap
//! 2. actor physics
//! 3. scroll obstacles
//! 4. prune off-screen obstacles
//! 5. scoring and difficulty
//! 6. collision (ends the session)
//! 7. cosmetic scroll offsets
//! 8. spawn timer

use super::actor::Actor;
use super::backdrop::Backdrop;
use super::collision::is_colliding;
use super::obstacle::{prune, Obstacle};
use super::spawn::SpawnTimer;
use crate::core::config::GameConfig;
use rand::Rng;

/// Inputs for a single tick. Any number of flap presses collapse into one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub flap: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    Ended { final_score: u32 },
}

/// What happened during one tick. Consumed by logging and tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickEvents {
    /// Obstacles passed this tick.
    pub points: u32,
    /// New difficulty level, if it went up this tick.
    pub level_up: Option<u32>,
    pub spawned: bool,
    pub pruned: usize,
    /// Final score if the actor crashed this tick.
    pub ended: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    pub config: GameConfig,
    pub actor: Actor,
    /// Oldest first.
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub difficulty_level: u32,
    pub current_speed: f64,
    pub spawn_timer: SpawnTimer,
    /// Cosmetic layer offsets, in `0..screen_width`.
    pub city_scroll: f64,
    pub star_scroll: f64,
    pub backdrop: Backdrop,
    pub status: SessionStatus,
    pub tick_count: u64,
}

impl GameSession {
    pub fn new<R: Rng>(config: GameConfig, rng: &mut R) -> Self {
        let spawn_timer = SpawnTimer::new(rng, &config);
        let backdrop = Backdrop::generate(rng, config.screen_width);
        Self {
            actor: Actor::new(&config),
            obstacles: Vec::new(),
            score: 0,
            difficulty_level: 0,
            current_speed: config.base_speed,
            spawn_timer,
            city_scroll: 0.0,
            star_scroll: 0.0,
            backdrop,
            status: SessionStatus::Running,
            tick_count: 0,
            config,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    /// Final score once the session has ended.
    pub fn final_score(&self) -> Option<u32> {
        match self.status {
            SessionStatus::Ended { final_score } => Some(final_score),
            SessionStatus::Running => None,
        }
    }

    /// Advance one fixed step. Does nothing once the session has ended.
    pub fn tick<R: Rng>(&mut self, input: &TickInput, rng: &mut R) -> TickEvents {
        let mut events = TickEvents::default();
        if !self.is_running() {
            return events;
        }
        self.tick_count += 1;

        if input.flap {
            self.actor.flap();
        }
        self.actor.tick();

        for obstacle in &mut self.obstacles {
            obstacle.advance(self.current_speed);
        }
        events.pruned = prune(&mut self.obstacles);

        self.update_score(&mut events);

        if is_colliding(&self.actor, &self.obstacles, self.config.screen_height) {
            self.status = SessionStatus::Ended {
                final_score: self.score,
            };
            events.ended = Some(self.score);
            return events;
        }

        let width = self.config.screen_width;
        self.city_scroll = (self.city_scroll + self.config.city_scroll_speed) % width;
        self.star_scroll = (self.star_scroll + self.config.star_scroll_speed) % width;

        if self.spawn_timer.tick(rng, &self.config) {
            self.obstacles.push(Obstacle::spawn(rng, &self.config));
            events.spawned = true;
        }

        events
    }

    /// Mark newly cleared obstacles and raise the difficulty when the score
    /// crosses a level boundary.
    fn update_score(&mut self, events: &mut TickEvents) {
        let actor_left = self.actor.bounds().left();

        for obstacle in &mut self.obstacles {
            if obstacle.passed || obstacle.right_edge() >= actor_left {
                continue;
            }
            obstacle.passed = true;
            self.score += 1;
            events.points += 1;

            let level = self.config.level_for_score(self.score);
            if level > self.difficulty_level {
                self.difficulty_level = level;
                self.current_speed += self.config.speed_step;
                events.level_up = Some(level);
            }
        }
    }
}
