//! Tuning constants, runtime config and the fixed-step clock.

pub mod config;
pub mod constants;
pub mod timestep;

pub use config::GameConfig;
pub use constants::*;
pub use timestep::FixedStep;
