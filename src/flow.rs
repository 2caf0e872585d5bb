//! Screen flow: Menu → Playing → GameOver → (Playing | Exit).
//!
//! `FlowController` is the single owner of everything that lives longer than
//! one frame: the best-score store, the current session and the last result.
//! The binary feeds it one [`Triggers`] set and a tick budget per frame.

use crate::core::config::GameConfig;
use crate::game::{GameSession, TickEvents, TickInput};
use crate::persistence::BestScoreStore;
use rand::Rng;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Menu,
    Playing,
    GameOver,
    /// Terminal. Nothing is read or written after this.
    Exit,
}

/// Discrete input triggers collected during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Triggers {
    pub flap: bool,
    pub start: bool,
    pub replay: bool,
    pub quit: bool,
}

impl Triggers {
    pub fn any(&self) -> bool {
        self.flap || self.start || self.replay || self.quit
    }

    /// Fold another frame's triggers into this one.
    pub fn merge(&mut self, other: Triggers) {
        self.flap |= other.flap;
        self.start |= other.start;
        self.replay |= other.replay;
        self.quit |= other.quit;
    }
}

pub struct FlowController {
    state: FlowState,
    config: GameConfig,
    store: BestScoreStore,
    session: Option<GameSession>,
    last_score: Option<u32>,
    new_best: bool,
    /// Flap seen since the last simulated tick.
    flap_pending: bool,
    sessions_played: u32,
}

impl FlowController {
    pub fn new(config: GameConfig, store: BestScoreStore) -> Self {
        Self {
            state: FlowState::Menu,
            config,
            store,
            session: None,
            last_score: None,
            new_best: false,
            flap_pending: false,
            sessions_played: 0,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn best_score(&self) -> u32 {
        self.store.best()
    }

    /// Score of the most recently finished session.
    pub fn last_score(&self) -> Option<u32> {
        self.last_score
    }

    /// Whether the most recently finished session set a new best.
    pub fn is_new_best(&self) -> bool {
        self.new_best
    }

    pub fn sessions_played(&self) -> u32 {
        self.sessions_played
    }

    /// Apply one frame of input and run up to `ticks` simulation steps.
    ///
    /// Only fails when a new best score can't be written.
    pub fn update<R: Rng>(&mut self, triggers: &Triggers, ticks: u32, rng: &mut R) -> io::Result<()> {
        if self.state == FlowState::Exit || (!triggers.any() && ticks == 0) {
            return Ok(());
        }

        if triggers.quit {
            self.exit();
            return Ok(());
        }

        match self.state {
            FlowState::Menu => {
                if triggers.start {
                    self.start_session(rng);
                }
            }
            FlowState::Playing => {
                self.flap_pending |= triggers.flap;
                self.run_ticks(ticks, rng)?;
            }
            FlowState::GameOver => {
                if triggers.replay {
                    self.start_session(rng);
                }
            }
            FlowState::Exit => {}
        }
        Ok(())
    }

    fn start_session<R: Rng>(&mut self, rng: &mut R) {
        self.session = Some(GameSession::new(self.config.clone(), rng));
        self.flap_pending = false;
        self.new_best = false;
        self.sessions_played += 1;
        self.state = FlowState::Playing;
        log::info!(
            "Session {} started (best {})",
            self.sessions_played,
            self.store.best()
        );
    }

    fn run_ticks<R: Rng>(&mut self, ticks: u32, rng: &mut R) -> io::Result<()> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };

        let mut ended = None;
        for _ in 0..ticks {
            let input = TickInput {
                flap: std::mem::take(&mut self.flap_pending),
            };
            let events = session.tick(&input, rng);
            log_events(&events, session);
            if let Some(score) = events.ended {
                ended = Some(score);
                break;
            }
        }

        match ended {
            Some(score) => self.finish_session(score),
            None => Ok(()),
        }
    }

    fn finish_session(&mut self, score: u32) -> io::Result<()> {
        log::info!("Good run: scored {}", score);
        self.last_score = Some(score);
        self.new_best = self.store.submit(score)?;
        if self.new_best {
            log::info!(
                "New best score {} saved to {}",
                score,
                self.store.path().display()
            );
        }
        self.flap_pending = false;
        self.state = FlowState::GameOver;
        Ok(())
    }

    fn exit(&mut self) {
        if self.state == FlowState::Playing {
            log::info!("Quit during a run; unfinished score discarded");
        }
        log::info!("Exiting after {} session(s)", self.sessions_played);
        self.session = None;
        self.flap_pending = false;
        self.state = FlowState::Exit;
    }
}

fn log_events(events: &TickEvents, session: &GameSession) {
    if let Some(level) = events.level_up {
        log::debug!(
            "Difficulty level {} at score {}, speed now {:.1}",
            level,
            session.score,
            session.current_speed
        );
    }
    if events.spawned {
        log::trace!("Obstacle spawned, {} on screen", session.obstacles.len());
    }
}
