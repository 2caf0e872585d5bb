//! Fixed-step accumulator that converts wall-clock frame time into
//! whole simulation ticks.
//!
//! The simulation always advances in [`TICK_MICROS`] steps with the tuned
//! per-tick constants; only the number of steps per frame depends on how
//! long the frame took.

use super::constants::{MAX_FRAME_MS, TICK_MICROS};
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulated_micros: u64,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `elapsed` wall time and return how many ticks are now due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let clamped = elapsed.min(Duration::from_millis(MAX_FRAME_MS));
        self.accumulated_micros += clamped.as_micros() as u64;

        let ticks = self.accumulated_micros / TICK_MICROS;
        self.accumulated_micros -= ticks * TICK_MICROS;
        ticks as u32
    }

    /// Drop any partial tick, e.g. when a new session starts.
    pub fn reset(&mut self) {
        self.accumulated_micros = 0;
    }
}
