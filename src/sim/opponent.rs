//! CPU paddle tracking
//!
//! Purely reactive: the paddle chases the ball's current height, never its
//! predicted landing point.

use super::state::{Arena, Ball, Paddle};
use crate::consts::{AI_DEAD_ZONE, AI_MIN_SPEED, AI_SPEED_FACTOR};

/// Per-tick paddle speed, proportional to the ball's vertical speed
pub fn tracking_speed(ball: &Ball) -> f32 {
    (ball.vel.y.abs() * AI_SPEED_FACTOR).max(AI_MIN_SPEED)
}

/// Step the paddle toward the ball's height, then clamp it to the arena
pub fn track(paddle: &mut Paddle, ball: &Ball, arena: &Arena) {
    let center = paddle.center_y();
    let speed = tracking_speed(ball);
    if center < ball.pos.y - AI_DEAD_ZONE {
        paddle.y += speed;
    } else if center > ball.pos.y + AI_DEAD_ZONE {
        paddle.y -= speed;
    }
    paddle.clamp_to(arena);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn setup(ball_y: f32, vy: f32) -> (Paddle, Ball, Arena) {
        let arena = Arena::new(800.0, 400.0);
        let paddle = Paddle::centered(arena.opponent_x(), &arena); // center 200
        let ball = Ball::new(Vec2::new(400.0, ball_y), Vec2::new(5.0, vy));
        (paddle, ball, arena)
    }

    #[test]
    fn test_dead_zone_holds_still() {
        for y in [190.0, 195.0, 200.0, 210.0] {
            let (mut paddle, ball, arena) = setup(y, 3.0);
            track(&mut paddle, &ball, &arena);
            assert_eq!(paddle.y, 160.0, "ball at {y}");
        }
    }

    #[test]
    fn test_moves_toward_ball() {
        let (mut paddle, ball, arena) = setup(300.0, 3.0);
        track(&mut paddle, &ball, &arena);
        assert!((paddle.y - 162.1).abs() < 1e-4);
        let (mut paddle, ball, arena) = setup(50.0, -10.0);
        track(&mut paddle, &ball, &arena);
        assert!((paddle.y - 153.0).abs() < 1e-4);
    }

    #[test]
    fn test_speed_floor() {
        let (_, ball, _) = setup(0.0, 0.5);
        assert_eq!(tracking_speed(&ball), 2.0);
        let (_, ball, _) = setup(0.0, -10.0);
        assert!((tracking_speed(&ball) - 7.0).abs() < 1e-6);
    }

    #[test]
    fn test_clamped_at_edges() {
        let (mut paddle, ball, arena) = setup(399.0, 40.0);
        paddle.y = 318.0;
        track(&mut paddle, &ball, &arena);
        assert_eq!(paddle.y, 320.0);

        let (mut paddle, ball, arena) = setup(0.0, 40.0);
        paddle.y = 3.0;
        track(&mut paddle, &ball, &arena);
        assert_eq!(paddle.y, 0.0);
    }
}
