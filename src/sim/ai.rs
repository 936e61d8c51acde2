//! Right-paddle control policies

use crate::config::GameConfig;

use super::state::{Ball, Paddle};

/// A paddle controller: observes the ball and its own paddle and returns the
/// paddle's new y. Implementations can be swapped without touching the tick
/// orchestration.
pub trait PaddlePolicy {
    fn control(&self, paddle: &Paddle, ball: &Ball, config: &GameConfig) -> f32;
}

/// Reactive dead-zone chaser: steps one `paddle_speed` toward the ball's
/// vertical center, holds still inside the dead zone, never looks at the
/// ball's velocity. Fixed-speed response with no prediction keeps it
/// beatable on purpose.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChasePolicy;

impl PaddlePolicy for ChasePolicy {
    fn control(&self, paddle: &Paddle, ball: &Ball, config: &GameConfig) -> f32 {
        let paddle_center = paddle.center_y(config);
        let ball_center = ball.center_y(config);

        let y = if ball_center < paddle_center - config.ai_dead_zone {
            paddle.y - config.paddle_speed
        } else if ball_center > paddle_center + config.ai_dead_zone {
            paddle.y + config.paddle_speed
        } else {
            paddle.y
        };

        config.clamp_paddle_y(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Side;
    use glam::Vec2;

    fn ball_centered_at(y: f32, config: &GameConfig) -> Ball {
        Ball {
            pos: Vec2::new(400.0, y - config.ball_radius),
            vel: Vec2::new(5.0, 5.0),
        }
    }

    #[test]
    fn test_chase_steps_up_by_exactly_paddle_speed() {
        let config = GameConfig::default();
        let mut paddle = Paddle::new(Side::Right, &config);
        // Paddle center at 300, ball center at 280, dead zone 10
        paddle.y = 300.0 - config.paddle_height / 2.0;
        let ball = ball_centered_at(280.0, &config);

        let before = paddle.y;
        let after = ChasePolicy.control(&paddle, &ball, &config);
        assert_eq!(after, before - config.paddle_speed);
    }

    #[test]
    fn test_chase_steps_down_by_exactly_paddle_speed() {
        let config = GameConfig::default();
        let mut paddle = Paddle::new(Side::Right, &config);
        paddle.y = 300.0 - config.paddle_height / 2.0;
        let ball = ball_centered_at(340.0, &config);

        let before = paddle.y;
        let after = ChasePolicy.control(&paddle, &ball, &config);
        assert_eq!(after, before + config.paddle_speed);
    }

    #[test]
    fn test_chase_holds_still_inside_dead_zone() {
        let config = GameConfig::default();
        let paddle = Paddle::new(Side::Right, &config);
        let center = paddle.center_y(&config);

        for offset in [0.0, config.ai_dead_zone, -config.ai_dead_zone] {
            let ball = ball_centered_at(center + offset, &config);
            assert_eq!(ChasePolicy.control(&paddle, &ball, &config), paddle.y);
        }
    }

    #[test]
    fn test_chase_clamps_at_field_bounds() {
        let config = GameConfig::default();
        let mut paddle = Paddle::new(Side::Right, &config);

        paddle.y = 0.0;
        let ball = ball_centered_at(0.0, &config);
        assert_eq!(ChasePolicy.control(&paddle, &ball, &config), 0.0);

        paddle.y = config.max_paddle_y();
        let ball = ball_centered_at(config.field_height, &config);
        assert_eq!(
            ChasePolicy.control(&paddle, &ball, &config),
            config.max_paddle_y()
        );
    }
}
