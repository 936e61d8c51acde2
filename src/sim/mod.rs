//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call advances exactly one tick)
//! - Seeded RNG only
//! - No rendering, audio, or platform dependencies

pub mod ai;
pub mod physics;
pub mod scoring;
pub mod state;
pub mod tick;

pub use ai::{ChasePolicy, PaddlePolicy};
pub use state::{Ball, GameEvent, GamePhase, GameState, Paddle, Rect, Score, Side, Snapshot};
pub use tick::{Command, TickOutput, tick};
