//! Simulation module
//!
//! All gameplay logic lives here:
//! - Fixed per-tick displacement, no real-time scaling
//! - Seeded RNG for serve directions
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod command;
pub mod opponent;
pub mod state;
pub mod tick;

pub use command::Command;
pub use state::{Arena, Ball, GameEvent, GameState, MatchState, Paddle, Score, Side};
pub use tick::tick;
