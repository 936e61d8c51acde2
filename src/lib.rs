//! Retro Pong - a classic two-paddle arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, AI, scoring, game state)
//! - `config`: Validated tunable parameters
//!
//! Rendering, audio, and input devices are external collaborators: they feed
//! `sim::Command`s in once per tick and consume the `sim::Snapshot` and
//! emitted `sim::GameEvent`s afterwards. Nothing in this crate blocks,
//! draws, or polls a device.

pub mod config;
pub mod sim;

pub use config::{ConfigError, GameConfig};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick rate (60 Hz)
    pub const TICK_RATE: f32 = 60.0;
    /// Fixed simulation timestep in seconds
    pub const TICK_DT: f32 = 1.0 / TICK_RATE;

    /// Field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Paddle travel per tick
    pub const PADDLE_SPEED: f32 = 5.0;
    /// Horizontal inset of each paddle from its own goal line
    pub const PADDLE_INSET: f32 = 20.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Per-axis ball speed per tick (signs flip on bounce, magnitude never changes)
    pub const BALL_SPEED: f32 = 5.0;

    /// Band around the AI paddle's center within which it holds still
    pub const AI_DEAD_ZONE: f32 = 10.0;
    /// First side to reach this score wins the match
    pub const WINNING_SCORE: u32 = 5;
}
