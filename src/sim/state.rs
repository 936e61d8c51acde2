//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, GameConfig};
use crate::consts::PADDLE_INSET;

/// Which side of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Match ended; commands still apply, the simulation does not run
    GameOver { winner: Side },
}

/// One-shot notifications emitted during a tick, consumed after it completes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball reflected off a wall or paddle
    Bounce,
    /// The given side won a point
    Score(Side),
}

/// Axis-aligned rectangle. Top-left origin, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    /// Open-interval overlap test; touching edges do not count
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// A paddle: fixed horizontal position, vertical travel clamped to the field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
}

impl Paddle {
    /// Spawn vertically centered on the given side
    pub fn new(side: Side, config: &GameConfig) -> Self {
        let x = match side {
            Side::Left => PADDLE_INSET,
            Side::Right => config.field_width - PADDLE_INSET - config.paddle_width,
        };
        Self {
            x,
            y: centered_paddle_y(config),
        }
    }

    /// Back to the vertical center (match reset)
    pub fn recenter(&mut self, config: &GameConfig) {
        self.y = centered_paddle_y(config);
    }

    /// Center the paddle on a pointer target y, clamped into the field.
    /// Out-of-range targets are legal input and simply pin the paddle to
    /// the nearest bound.
    pub fn track_target(&mut self, target_y: f32, config: &GameConfig) {
        self.y = config.clamp_paddle_y(target_y - config.paddle_height / 2.0);
    }

    pub fn rect(&self, config: &GameConfig) -> Rect {
        Rect::new(self.x, self.y, config.paddle_width, config.paddle_height)
    }

    pub fn center_y(&self, config: &GameConfig) -> f32 {
        self.y + config.paddle_height / 2.0
    }
}

fn centered_paddle_y(config: &GameConfig) -> f32 {
    (config.field_height - config.paddle_height) / 2.0
}

/// The ball. Position is the top-left of its square bounding box; each
/// velocity component keeps magnitude `ball_speed`, only signs change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    /// Spawn centered with a random direction
    pub fn new(config: &GameConfig, rng: &mut impl Rng) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
        };
        ball.reset(config, rng);
        ball
    }

    /// Recenter on the field and re-randomize each velocity component to
    /// ±ball_speed independently (four equally likely directions).
    pub fn reset(&mut self, config: &GameConfig, rng: &mut impl Rng) {
        self.pos = Vec2::new(
            config.field_width / 2.0 - config.ball_radius,
            config.field_height / 2.0 - config.ball_radius,
        );
        self.vel = Vec2::new(
            config.ball_speed * random_sign(rng),
            config.ball_speed * random_sign(rng),
        );
    }

    pub fn rect(&self, config: &GameConfig) -> Rect {
        let size = config.ball_size();
        Rect::new(self.pos.x, self.pos.y, size, size)
    }

    pub fn center_y(&self, config: &GameConfig) -> f32 {
        self.pos.y + config.ball_radius
    }
}

/// ±1.0 with equal probability
fn random_sign(rng: &mut impl Rng) -> f32 {
    if rng.random_bool(0.5) { 1.0 } else { -1.0 }
}

/// Match score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn point_for(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    /// Left side is checked first; only one winner is ever reported
    pub fn winner(&self, winning_score: u32) -> Option<Side> {
        if self.left >= winning_score {
            Some(Side::Left)
        } else if self.right >= winning_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Read-only view of the field handed to presentation once per tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    pub left_paddle: Rect,
    pub right_paddle: Rect,
    pub ball: Rect,
    pub score: Score,
    pub phase: GamePhase,
}

/// Complete game state. Constructed once by the driver and mutated only
/// through [`tick`](super::tick::tick).
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulated ticks since construction
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Build a fresh `Playing` game from a validated config and seed
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball::new(&config, &mut rng);
        Ok(Self {
            left_paddle: Paddle::new(Side::Left, &config),
            right_paddle: Paddle::new(Side::Right, &config),
            ball,
            score: Score::default(),
            phase: GamePhase::Playing,
            time_ticks: 0,
            seed,
            config,
            rng,
        })
    }

    /// Full reset: zero scores, recentered paddles, fresh ball with a new
    /// random direction, back to `Playing`.
    pub fn reset(&mut self) {
        self.score = Score::default();
        self.phase = GamePhase::Playing;
        self.left_paddle.recenter(&self.config);
        self.right_paddle.recenter(&self.config);
        self.ball.reset(&self.config, &mut self.rng);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            left_paddle: self.left_paddle.rect(&self.config),
            right_paddle: self.right_paddle.rect(&self.config),
            ball: self.ball.rect(&self.config),
            score: self.score,
            phase: self.phase,
        }
    }
}
