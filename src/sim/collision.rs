//! Collision detection and response
//!
//! Tests are sampled once per tick against the ball's current position.
//! Nothing is swept: a ball that moves further than a paddle's depth in one
//! tick is only caught if its center happens to sit inside the paddle's
//! vertical span on the tick its leading edge passes the paddle face.

use super::state::{Arena, Ball, Paddle, Side};
use crate::consts::SPIN_FACTOR;

/// Bounce the ball off the top/bottom walls. Returns true on a bounce.
pub fn resolve_wall(ball: &mut Ball, arena: &Arena) -> bool {
    if ball.top() < 0.0 || ball.bottom() > arena.height {
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}

/// Whether the ball's leading edge has crossed the paddle face while its
/// center lies within the paddle's vertical span
pub fn touches_paddle(ball: &Ball, paddle: &Paddle, side: Side) -> bool {
    let crossed = match side {
        Side::Player => ball.left() < paddle.right(),
        Side::Opponent => ball.right() > paddle.x,
    };
    crossed && paddle.spans(ball.pos.y)
}

/// Vertical speed added by a hit at the ball's current offset from center
pub fn spin(ball: &Ball, paddle: &Paddle) -> f32 {
    (ball.pos.y - paddle.center_y()) * SPIN_FACTOR
}

/// Return the ball from a paddle: force horizontal direction away from the
/// paddle's side and add spin. Returns true on a hit.
pub fn resolve_paddle(ball: &mut Ball, paddle: &Paddle, side: Side) -> bool {
    if !touches_paddle(ball, paddle, side) {
        return false;
    }
    ball.vel.x = match side {
        Side::Player => ball.vel.x.abs(),
        Side::Opponent => -ball.vel.x.abs(),
    };
    ball.vel.y += spin(ball, paddle);
    true
}

/// Which side earns a point, if the ball has left the arena horizontally
pub fn scoring_side(ball: &Ball, arena: &Arena) -> Option<Side> {
    if ball.left() < 0.0 {
        Some(Side::Opponent)
    } else if ball.right() > arena.width {
        Some(Side::Player)
    } else {
        None
    }
}
