//! Boundary scoring, ball reset, and the win check

use log::debug;
use rand::Rng;

use crate::config::GameConfig;

use super::state::{Ball, GameEvent, Score, Side};

/// Check whether the ball crossed a goal line, award the point, and reset
/// the ball to the field center with a fresh random direction. At most one
/// side can score per tick. Returns the winner once a side reaches the
/// winning score; the left side is checked first.
pub fn evaluate(
    ball: &mut Ball,
    score: &mut Score,
    config: &GameConfig,
    rng: &mut impl Rng,
    events: &mut Vec<GameEvent>,
) -> Option<Side> {
    let rect = ball.rect(config);

    if rect.left() <= 0.0 {
        score.point_for(Side::Right);
        events.push(GameEvent::Score(Side::Right));
        ball.reset(config, rng);
        debug!("point to Right ({}-{})", score.left, score.right);
    } else if rect.right() >= config.field_width {
        score.point_for(Side::Left);
        events.push(GameEvent::Score(Side::Left));
        ball.reset(config, rng);
        debug!("point to Left ({}-{})", score.left, score.right);
    }

    score.winner(config.winning_score)
}
