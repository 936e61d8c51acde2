//! Ball movement and collision resolution
//!
//! Checks run in a fixed order every tick: walls, then the left paddle,
//! then the right paddle. When the ball qualifies for a wall bounce and a
//! paddle bounce on the same tick the wall resolves first; the ordering is
//! load-bearing for that corner case.

use crate::config::GameConfig;

use super::state::{Ball, GameEvent, Paddle};

/// Advance the ball by one tick and resolve collisions in place.
///
/// Every resolution clamps or snaps the ball exactly to the surface it hit,
/// so a resolved ball never overlaps what it bounced off and repeated
/// bounces cannot drift off-field. Velocity components only flip sign.
pub fn advance(
    ball: &mut Ball,
    left: &Paddle,
    right: &Paddle,
    config: &GameConfig,
    events: &mut Vec<GameEvent>,
) {
    ball.pos += ball.vel;

    let size = config.ball_size();

    // Top/bottom walls
    if ball.pos.y <= 0.0 || ball.pos.y + size >= config.field_height {
        ball.vel.y = -ball.vel.y;
        if ball.pos.y <= 0.0 {
            ball.pos.y = 0.0;
        }
        if ball.pos.y + size >= config.field_height {
            ball.pos.y = config.field_height - size;
        }
        events.push(GameEvent::Bounce);
    }

    // Paddle hits are gated on travel direction so a ball that is already
    // separating cannot re-trigger while still overlapping.
    let left_rect = left.rect(config);
    if ball.vel.x < 0.0 && ball.rect(config).intersects(&left_rect) {
        ball.vel.x = ball.vel.x.abs();
        ball.pos.x = left_rect.right();
        events.push(GameEvent::Bounce);
    }

    let right_rect = right.rect(config);
    if ball.vel.x > 0.0 && ball.rect(config).intersects(&right_rect) {
        ball.vel.x = -ball.vel.x.abs();
        ball.pos.x = right_rect.left() - size;
        events.push(GameEvent::Bounce);
    }
}
