//! Retro Pong - classic two-paddle Pong against a tracking CPU paddle
//!
//! Core modules:
//! - `sim`: Fixed-step simulation (ball, paddles, collisions, scoring, match state)
//! - `renderer`: Draw primitives, scene layout and the WebGPU pipeline
//! - `audio`: Fire-and-forget sound triggers
//! - `game` / `frame_loop`: Owner of the simulation and its frame scheduler
//! - `settings`: Runtime configuration

pub mod audio;
pub mod frame_loop;
pub mod game;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Points needed to win a match
    pub const WINNING_SCORE: u32 = 5;

    /// Arena defaults (2:1 aspect, width capped)
    pub const MAX_ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_ASPECT: f32 = 2.0;
    /// Narrowest arena whose height still fits a paddle
    pub const MIN_ARENA_WIDTH: f32 = PADDLE_HEIGHT * ARENA_ASPECT;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    /// Gap between a paddle and its side wall
    pub const PADDLE_MARGIN: f32 = 10.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Serve speeds (pixels per tick) for large arenas
    pub const SERVE_SPEED_X: f32 = 5.0;
    pub const SERVE_SPEED_Y: f32 = 3.0;
    /// Serve speeds for small arenas (width <= 400 / height <= 200)
    pub const SERVE_SPEED_X_SMALL: f32 = 3.0;
    pub const SERVE_SPEED_Y_SMALL: f32 = 2.0;

    /// Vertical speed added per pixel of offset from paddle center on contact
    pub const SPIN_FACTOR: f32 = 0.08;

    /// CPU paddle tracking
    pub const AI_DEAD_ZONE: f32 = 10.0;
    pub const AI_MIN_SPEED: f32 = 2.0;
    pub const AI_SPEED_FACTOR: f32 = 0.7;
}
