//! Gameplay simulation.
//!
//! Everything here is deterministic given the RNG handed in, and knows
//! nothing about the terminal.

pub mod actor;
pub mod backdrop;
pub mod collision;
pub mod obstacle;
pub mod session;
pub mod spawn;

pub use actor::Actor;
pub use backdrop::Backdrop;
pub use collision::{is_colliding, Bounds};
pub use obstacle::{prune, Obstacle};
pub use session::{GameSession, SessionStatus, TickEvents, TickInput};
pub use spawn::SpawnTimer;
